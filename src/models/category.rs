use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

pub const ELECTRONICS: &str = "Electronics";
pub const PREMIUM_ELECTRONICS: &str = "Premium Electronics";

/// A product category label as it appears in the data.
///
/// Labels are compared byte for byte: `electronics` or `Electronics ` (with
/// inner padding that survived trimming) are ordinary categories and never
/// trigger the electronics pricing rules.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn premium_electronics() -> Self {
        Self::new(PREMIUM_ELECTRONICS)
    }

    pub fn is_electronics(&self) -> bool {
        self.0 == ELECTRONICS
    }
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
