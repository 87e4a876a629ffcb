//! TSPLIB coordinate reader.
//!
//! Only the `NODE_COORD_SECTION` is read. Each line there is
//! `<id> <x> <y>`; the id column is ignored and cities are numbered in
//! file order. Reading stops at `EOF` or at the end of input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::error::LoadError;
use crate::tsp::Point;

/// Reads city coordinates from a TSPLIB file.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_points(BufReader::new(file)).map_err(|e| match e {
        LoadError::Io { source, .. } => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parses city coordinates from TSPLIB text.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::tsplib::parse_points;
///
/// let text = "NAME: tiny\nNODE_COORD_SECTION\n1 0 0\n2 3.5 4\nEOF\n";
/// let points = parse_points(text.as_bytes()).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].x, 3.5);
/// ```
pub fn parse_points<R: BufRead>(reader: R) -> Result<Vec<Point>, LoadError> {
    let mut points = Vec::new();
    let mut in_coords = false;

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: Default::default(),
            source,
        })?;
        let line = line.trim();
        let line_no = i + 1;

        if !in_coords {
            in_coords = line == "NODE_COORD_SECTION";
            continue;
        }
        if line == "EOF" {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            if !line.is_empty() {
                warn!("line {line_no}: expected `<id> <x> <y>`, skipping");
            }
            continue;
        }
        let x: f64 = parts[1].parse().map_err(|_| LoadError::InvalidCoordinate {
            line: line_no,
            field: "x coordinate",
        })?;
        let y: f64 = parts[2].parse().map_err(|_| LoadError::InvalidCoordinate {
            line: line_no,
            field: "y coordinate",
        })?;
        points.push(Point::new(x, y));
    }

    if !in_coords {
        return Err(LoadError::MissingCoordSection);
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
NAME : sample
COMMENT : four corners
TYPE : TSP
DIMENSION : 4
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0 0
2 10 0
3 10 10
4 0 1e1
EOF
5 99 99
";

    #[test]
    fn test_parse_sample() {
        let points = parse_points(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_parse_without_eof_marker() {
        let text = "NODE_COORD_SECTION\n1 1.5 2.5\n  2 -3 4  \n";
        let points = parse_points(text.as_bytes()).unwrap();
        assert_eq!(points, vec![Point::new(1.5, 2.5), Point::new(-3.0, 4.0)]);
    }

    #[test]
    fn test_short_lines_skipped() {
        let text = "NODE_COORD_SECTION\n1 1 1\n\n2 7\n3 2 2\nEOF\n";
        let points = parse_points(text.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_invalid_number() {
        let text = "NODE_COORD_SECTION\n1 1 1\n2 abc 3\n";
        match parse_points(text.as_bytes()) {
            Err(LoadError::InvalidCoordinate { line, field }) => {
                assert_eq!(line, 3);
                assert_eq!(field, "x coordinate");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_section() {
        let text = "NAME: nothing\nEOF\n";
        assert!(matches!(
            parse_points(text.as_bytes()),
            Err(LoadError::MissingCoordSection)
        ));
    }

    #[test]
    fn test_empty_section() {
        let text = "NODE_COORD_SECTION\nEOF\n";
        assert!(parse_points(text.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_points("/definitely/not/here.tsp").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("not/here.tsp"));
    }
}
