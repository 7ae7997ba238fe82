mod errors;

use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

pub use errors::ConfigError;

pub const USAGE: &str = "Usage: product-etl-pipeline [input].csv [output].csv [log_level:optional]\n\
                         Available log levels: error, warn, info, debug, trace (default: error)";

/// Run settings taken from positional command line arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub log_level: LevelFilter
}

impl Config {
    /// Builds the configuration from `std::env::args()`-style arguments, program name first.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let input = args.get(1).ok_or(ConfigError::MissingArgument("input"))?;
        let output = args.get(2).ok_or(ConfigError::MissingArgument("output"))?;
        let log_level = args.get(3)
            .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

        Ok(Self {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            log_level
        })
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
