use thiserror::Error;

#[derive(Debug, Error)]
pub enum PriceError {
    #[error("Price error: {0}")]
    InvalidFormat(String),
    #[error("Price error: Overflow")]
    Overflow
}
