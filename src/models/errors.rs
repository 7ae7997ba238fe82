use crate::models::SkipKind;
use thiserror::Error;

/// Why a single input line did not produce an output row.
///
/// None of these abort a run; the driver counts them and moves on.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum SkipReason {
    #[error("Line is blank")]
    BlankLine,
    #[error("Expected 4 fields but found [{found}]")]
    WrongFieldCount {
        found: usize
    },
    #[error("Product id [{value}] is not an integer")]
    InvalidProductId {
        value: String
    },
    #[error("Price [{value}] is not a usable decimal number")]
    InvalidPrice {
        value: String
    }
}

impl SkipReason {
    pub fn wrong_field_count(found: usize) -> Self {
        Self::WrongFieldCount { found }
    }

    pub fn invalid_product_id(value: &str) -> Self {
        Self::InvalidProductId { value: value.to_string() }
    }

    pub fn invalid_price(value: &str) -> Self {
        Self::InvalidPrice { value: value.to_string() }
    }

    pub fn kind(&self) -> SkipKind {
        match self {
            SkipReason::BlankLine | SkipReason::WrongFieldCount { .. } => SkipKind::MalformedRow,
            SkipReason::InvalidProductId { .. } | SkipReason::InvalidPrice { .. } => SkipKind::InvalidNumericField
        }
    }
}
