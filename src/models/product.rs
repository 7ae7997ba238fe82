use serde::Serialize;
use std::str::FromStr;

use crate::models::{Category, PriceRange, SkipReason};
use crate::types::{Amount, Price, ProductId};

/// A validated input row: `ProductID,Name,Price,Category`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedProduct {
    pub product_id: ProductId,
    /// Trimmed and upper-cased.
    pub name: String,
    /// Exact and unrounded.
    pub price: Amount,
    /// Trimmed, otherwise verbatim.
    pub category: Category
}

impl ParsedProduct {
    /// Validates one raw input line.
    ///
    /// Checks run in a fixed order and stop at the first failure: blank line,
    /// field count, product id, price. The name and category are never rejected.
    pub fn parse(line: &str) -> Result<Self, SkipReason> {
        if trim_field(line).is_empty() {
            return Err(SkipReason::BlankLine);
        }

        let fields = split_fields(line);

        let [id, name, price, category] = fields.as_slice() else {
            return Err(SkipReason::wrong_field_count(fields.len()));
        };

        let id = trim_field(id);
        let product_id = ProductId::from_str(id)
            .map_err(|_| SkipReason::invalid_product_id(id))?;

        let price = trim_field(price);
        let price = Amount::from_str(price)
            .map_err(|_| SkipReason::invalid_price(price))?;

        Ok(Self {
            product_id,
            name: trim_field(name).to_uppercase(),
            price,
            category: Category::new(trim_field(category))
        })
    }
}

/// An output row, serialized in the column order `ProductID,Name,Price,Category,PriceRange`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformedProduct {
    #[serde(rename = "ProductID")]
    pub product_id: ProductId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Price")]
    pub price: Price,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "PriceRange")]
    pub price_range: PriceRange
}

impl TransformedProduct {
    pub const HEADER: [&'static str; 5] = ["ProductID", "Name", "Price", "Category", "PriceRange"];
}

//NOTE: Trailing empty fields are dropped before the arity check, so `1,A,2.00,Home,,` still counts
//      as four fields while `1,A,2.00,` only counts as three.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();

    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    fields
}

/// Strips leading and trailing spaces and ASCII control characters.
fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}
