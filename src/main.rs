//! tsp-anneal - Command Line Interface
//!
//! Reads a TSPLIB coordinate file, anneals a tour, and prints the best
//! cost and visiting order.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use u_tsp_anneal::sa::SaConfig;
use u_tsp_anneal::tsp::solve;
use u_tsp_anneal::tsplib::read_points;

#[derive(Parser)]
#[command(name = "tsp-anneal")]
#[command(version)]
#[command(about = "Approximate a Euclidean TSP tour with simulated annealing")]
struct Cli {
    /// TSPLIB file with a NODE_COORD_SECTION
    instance: PathBuf,

    /// Number of annealing iterations
    #[arg(short, long, default_value = "10000")]
    iterations: usize,

    /// Starting temperature
    #[arg(short = 't', long, default_value = "10000")]
    initial_temperature: f64,

    /// Geometric cooling factor in (0, 1)
    #[arg(short, long, default_value = "0.995")]
    cooling_rate: f64,

    /// Random seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let points = match read_points(&cli.instance) {
        Ok(points) => points,
        Err(e) => {
            eprintln!("Error loading instance: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("loaded {} cities from {}", points.len(), cli.instance.display());

    let mut config = SaConfig::default()
        .with_iterations(cli.iterations)
        .with_initial_temperature(cli.initial_temperature)
        .with_cooling_rate(cli.cooling_rate);
    config.seed = cli.seed;

    let solution = match solve(points, &config) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Final Cost: {}", solution.cost);
    let tour: Vec<String> = solution.tour.iter().map(|c| c.to_string()).collect();
    println!("Best Tour: {}", tour.join(" "));
    ExitCode::SUCCESS
}
