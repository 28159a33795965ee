//! PhysVEK command line calculator
//!
//! Adds 2-D vectors, decomposes a single vector, or computes an average speed.
//!
//! Usage:
//!   cargo run --bin physvek -- add 10@0 10@90
//!   cargo run --bin physvek -- add --vector 0,10 --vector 90,10 --json
//!   cargo run --bin physvek -- decompose 30 2
//!   cargo run --bin physvek -- speed 100 0 20

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use log::debug;
use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use physvek::kinematics::speed;
use physvek::session::VectorSet;
use physvek::vectors::{decompose, CartesianComponents, Resultant};
use physvek::{Config, FormattedResultant};

/// Type alias for the error type used throughout this binary
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// PhysVEK vector calculator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Adds 2-D vectors given as angle and magnitude",
    long_about = None
)]
struct Args {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Decimal places for angles and magnitudes
    #[arg(short, long, global = true)]
    decimals: Option<u32>,

    /// Fewest vectors `add` accepts [default: 1, or the config file's value]
    #[arg(long, global = true)]
    min_vectors: Option<usize>,

    /// Show intermediate values (same as RUST_LOG=debug)
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add vectors and print the resultant
    Add {
        /// Vectors written as MAGNITUDE@ANGLE, e.g. 10@45 (put `--` before a negative magnitude)
        vectors: Vec<String>,

        /// Vector written as ANGLE,MAGNITUDE (repeatable)
        #[arg(long = "vector", allow_hyphen_values = true)]
        extra: Vec<String>,

        /// Print the result as JSON
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },

    /// Split one vector into x and y components
    Decompose {
        /// Angle in degrees
        #[arg(allow_negative_numbers = true)]
        angle: f64,

        /// Magnitude
        #[arg(allow_negative_numbers = true)]
        magnitude: f64,
    },

    /// Average speed over a time interval
    Speed {
        /// Distance covered; the sign is ignored
        #[arg(allow_negative_numbers = true)]
        magnitude: f64,

        /// Start time
        #[arg(allow_negative_numbers = true)]
        start: f64,

        /// End time
        #[arg(allow_negative_numbers = true)]
        end: f64,
    },
}

/// JSON form of an addition result
#[derive(Serialize)]
struct Report<'a> {
    resultant: &'a Resultant,
    formatted: &'a FormattedResultant,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default().with_min_vectors(1),
    };
    if let Some(decimals) = args.decimals {
        config = config.with_decimals(decimals);
    }
    if let Some(min_vectors) = args.min_vectors {
        config = config.with_min_vectors(min_vectors);
    }
    config.validate()?;
    Ok(config)
}

/// Splits `MAGNITUDE@ANGLE` into (angle text, magnitude text)
fn split_at_sign(text: &str) -> Result<(String, String)> {
    match text.split_once('@') {
        Some((magnitude, angle)) => Ok((angle.to_string(), magnitude.to_string())),
        None => Err(format!("Expected MAGNITUDE@ANGLE, got {:?}", text).into()),
    }
}

/// Splits `ANGLE,MAGNITUDE` into (angle text, magnitude text)
fn split_at_comma(text: &str) -> Result<(String, String)> {
    match text.split_once(',') {
        Some((angle, magnitude)) => Ok((angle.to_string(), magnitude.to_string())),
        None => Err(format!("Expected ANGLE,MAGNITUDE, got {:?}", text).into()),
    }
}

fn run_add(config: &Config, vectors: &[String], extra: &[String], json: bool) -> Result<()> {
    let mut set = VectorSet::new();
    for text in vectors {
        let (angle, magnitude) = split_at_sign(text)?;
        set.add(angle, magnitude);
    }
    for text in extra {
        let (angle, magnitude) = split_at_comma(text)?;
        set.add(angle, magnitude);
    }

    let (components, resultant) = set.calculate_with_components(&config.session)?;
    for (entry, (x, y)) in set
        .entries()
        .iter()
        .zip(components.x_values().iter().zip(components.y_values()))
    {
        debug!("{}: x = {}, y = {}", set.display_name(entry.id)?, x, y);
    }

    let formatted = config.format.format(&resultant);

    if json {
        let report = Report {
            resultant: &resultant,
            formatted: &formatted,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", formatted);
    }
    Ok(())
}

fn run_decompose(config: &Config, angle: f64, magnitude: f64) {
    let CartesianComponents { x, y } = decompose(angle, magnitude);
    println!("x: {}", config.format.format_magnitude(x));
    println!("y: {}", config.format.format_magnitude(y));
}

fn run_speed(config: &Config, magnitude: f64, start: f64, end: f64) -> Result<()> {
    let value = speed(magnitude.abs(), start, end)?;
    println!(
        "Speed: {} unit(s)/time unit",
        config.format.format_magnitude(value)
    );
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    match args.command {
        Command::Add {
            vectors,
            extra,
            json,
        } => run_add(&config, &vectors, &extra, json),
        Command::Decompose { angle, magnitude } => {
            run_decompose(&config, angle, magnitude);
            Ok(())
        }
        Command::Speed {
            magnitude,
            start,
            end,
        } => run_speed(&config, magnitude, start, end),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_sign() {
        let (angle, magnitude) = split_at_sign("10@-45").unwrap();
        assert_eq!(angle, "-45");
        assert_eq!(magnitude, "10");
        assert!(split_at_sign("10,45").is_err());
    }

    #[test]
    fn test_split_at_comma() {
        let (angle, magnitude) = split_at_comma("90,2.5").unwrap();
        assert_eq!(angle, "90");
        assert_eq!(magnitude, "2.5");
        assert!(split_at_comma("90").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["physvek", "add", "5@-30", "--vector", "-90,2"]).unwrap();
        match args.command {
            Command::Add { vectors, extra, .. } => {
                assert_eq!(vectors, vec!["5@-30".to_string()]);
                assert_eq!(extra, vec!["-90,2".to_string()]);
            }
            other => panic!("Expected Add, got {:?}", other),
        }

        let args = Args::try_parse_from(["physvek", "speed", "-10", "0", "5"]).unwrap();
        assert!(matches!(args.command, Command::Speed { magnitude, .. } if magnitude == -10.0));
    }

    #[test]
    fn test_min_vectors_is_global() {
        let before = Args::try_parse_from(["physvek", "--min-vectors", "3", "add", "1@0"]).unwrap();
        assert_eq!(before.min_vectors, Some(3));

        let after = Args::try_parse_from(["physvek", "add", "1@0", "--min-vectors", "2"]).unwrap();
        assert_eq!(after.min_vectors, Some(2));

        let config = load_config(&after).unwrap();
        assert_eq!(config.session.min_vectors, 2);

        let unset = Args::try_parse_from(["physvek", "add", "1@0"]).unwrap();
        assert_eq!(load_config(&unset).unwrap().session.min_vectors, 1);
    }

    #[test]
    fn test_args_verify() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
