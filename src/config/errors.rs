use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required argument [{0}]")]
    MissingArgument(&'static str)
}
