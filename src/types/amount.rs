use crate::types::{Price, PriceError};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 2;

/// An exact, unrounded decimal value: `mantissa × 10^-scale`.
///
/// Input prices and the discounted intermediate are carried in this form so
/// that nothing is rounded before [`Amount::round_half_up`]. Trailing
/// fractional zeros are dropped on parse, so `1.50` and `1.5` are equal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Amount {
    mantissa: i128,
    scale: u32
}

impl Amount {
    pub const fn new(mantissa: i128, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    /// Multiplies by `rate` exactly.
    pub fn discounted(self, rate: Amount) -> Result<Amount, PriceError> {
        let mantissa = self.mantissa.checked_mul(rate.mantissa).ok_or(PriceError::Overflow)?;
        let scale = self.scale.checked_add(rate.scale).ok_or(PriceError::Overflow)?;

        Ok(Amount { mantissa, scale })
    }

    /// Rounds to exactly two fractional digits, halves rounding away from zero.
    pub fn round_half_up(self) -> Result<Price, PriceError> {
        let magnitude = self.mantissa.unsigned_abs();

        let cents = if self.scale <= DECIMAL_PLACES {
            10u128.checked_pow(DECIMAL_PLACES - self.scale)
                .and_then(|factor| magnitude.checked_mul(factor))
                .ok_or(PriceError::Overflow)?
        } else {
            match 10u128.checked_pow(self.scale - DECIMAL_PLACES) {
                Some(divisor) => {
                    let (quotient, remainder) = (magnitude / divisor, magnitude % divisor);
                    if remainder >= divisor - remainder { quotient + 1 } else { quotient }
                }
                //NOTE: The divisor exceeds u128, so the value is below half a cent.
                None => 0
            }
        };

        let cents = i128::try_from(cents).map_err(|_| PriceError::Overflow)?;
        let cents = if self.mantissa < 0 { -cents } else { cents };

        Price::from_cents(cents)
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = self.scale as usize;

        if scale == 0 {
            return write!(formatter, "{sign}{digits}");
        }

        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (integer, fraction) = padded.split_at(padded.len() - scale);
        write!(formatter, "{sign}{integer}.{fraction}")
    }
}

impl FromStr for Amount {
    type Err = PriceError;

    /// Accepts plain decimals (`12`, `12.`, `.5`, `-3.25`) and scientific
    /// notation (`1.5E2`). Underscores, grouping and inner whitespace are rejected.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(PriceError::InvalidFormat("Value is an empty string".to_string()));
        }

        let (is_negative, unsigned) = match value.as_bytes()[0] {
            b'-' => (true, &value[1..]),
            b'+' => (false, &value[1..]),
            _ => (false, value)
        };

        let (significand, exponent) = match unsigned.find(['e', 'E']) {
            Some(index) => {
                let exponent: i64 = unsigned[index + 1..].parse().map_err(|error| {
                    PriceError::InvalidFormat(format!("Value has an invalid exponent: {:?}", error))
                })?;
                (&unsigned[..index], exponent)
            }
            None => (unsigned, 0)
        };

        let (integer, fraction) = significand.split_once('.').unwrap_or((significand, ""));

        if integer.is_empty() && fraction.is_empty() {
            return Err(PriceError::InvalidFormat("Value has no digits".to_string()));
        }

        if !integer.bytes().chain(fraction.bytes()).all(|byte| byte.is_ascii_digit()) {
            return Err(PriceError::InvalidFormat(format!("Value '{value}' is not a decimal number")));
        }

        let fraction = fraction.trim_end_matches('0');

        let mut mantissa: i128 = 0;
        for byte in integer.bytes().chain(fraction.bytes()) {
            mantissa = mantissa.checked_mul(10)
                .and_then(|v| v.checked_add(i128::from(byte - b'0')))
                .ok_or(PriceError::Overflow)?;
        }

        let mut scale = (fraction.len() as i64).checked_sub(exponent)
            .ok_or(PriceError::Overflow)?;

        if scale < 0 {
            if mantissa != 0 {
                let factor = u32::try_from(-scale).ok()
                    .and_then(|power| 10i128.checked_pow(power))
                    .ok_or(PriceError::Overflow)?;
                mantissa = mantissa.checked_mul(factor).ok_or(PriceError::Overflow)?;
            }
            scale = 0;
        }

        let scale = u32::try_from(scale).map_err(|_| PriceError::Overflow)?;

        if is_negative {
            mantissa = -mantissa;
        }

        Ok(Amount { mantissa, scale })
    }
}
