use crate::types::PriceError;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};

const DECIMAL_PLACES: u32 = 2;

/// A final product price, always carrying exactly two fractional digits.
///
/// Produced by [`Amount::round_half_up`](crate::types::Amount::round_half_up).
/// Ordering and equality compare numeric value.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Builds a price from an integer mantissa and a decimal scale, e.g. `(50000, 2)` is `500.00`.
    pub const fn new(mantissa: i64, scale: u32) -> Self {
        Price(Decimal::from_parts(
            (mantissa.unsigned_abs() & 0xFFFF_FFFF) as u32,
            (mantissa.unsigned_abs() >> 32) as u32,
            0,
            mantissa < 0,
            scale
        ))
    }

    /// Fails when the value does not fit a 96-bit mantissa at scale 2.
    pub fn from_cents(cents: i128) -> Result<Self, PriceError> {
        Decimal::try_from_i128_with_scale(cents, DECIMAL_PLACES)
            .map(Price)
            .map_err(|_| PriceError::Overflow)
    }
}

impl Display for Price {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, formatter)
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
