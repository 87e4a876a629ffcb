//! City coordinates.

/// A city location in the plane.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::tsp::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(self, other)
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance `sqrt((a.x - b.x)^2 + (a.y - b.y)^2)`.
///
/// NaN and infinite coordinates propagate.
pub fn distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_345() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Point::new(-7.25, 3.5);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let a = Point::new(f64::NAN, 0.0);
        let b = Point::new(1.0, 0.0);
        assert!(distance(&a, &b).is_nan());
        assert!(!a.is_finite());
        assert!(b.is_finite());
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Point::from((2.0, -1.0)), Point::new(2.0, -1.0));
    }
}
