mod category;
mod errors;
mod product;
#[cfg(test)]
mod tests;

use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::Price;

pub use category::Category;
pub use errors::SkipReason;
pub use product::{ParsedProduct, TransformedProduct};

const LOW_CEILING: Price = Price::new(1000, 2);
const MEDIUM_CEILING: Price = Price::new(10000, 2);
const HIGH_CEILING: Price = Price::new(50000, 2);

/// The derived price bucket written to the `PriceRange` column.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum PriceRange {
    Low,
    Medium,
    High,
    Premium
}

impl PriceRange {
    /// Buckets a final (already rounded) price. Upper bounds are inclusive.
    pub fn of(price: Price) -> Self {
        if price <= LOW_CEILING {
            PriceRange::Low
        } else if price <= MEDIUM_CEILING {
            PriceRange::Medium
        } else if price <= HIGH_CEILING {
            PriceRange::High
        } else {
            PriceRange::Premium
        }
    }
}

impl Display for PriceRange {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceRange::Low => "Low",
            PriceRange::Medium => "Medium",
            PriceRange::High => "High",
            PriceRange::Premium => "Premium"
        };
        formatter.write_str(label)
    }
}

/// The two record-level rejection kinds reported in the run summary.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SkipKind {
    MalformedRow,
    InvalidNumericField
}
