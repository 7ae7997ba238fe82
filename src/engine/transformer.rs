use crate::models::{Category, ParsedProduct, PriceRange, SkipReason, TransformedProduct};
use crate::types::{Amount, Price};

const ELECTRONICS_DISCOUNT_RATE: Amount = Amount::new(9, 1);
const PREMIUM_THRESHOLD: Price = Price::new(50000, 2);

/// The result of pushing one raw line through the transformer.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    Transformed(TransformedProduct),
    Skipped(SkipReason)
}

/// Applies the pricing and categorization rules to one record at a time.
///
/// The transformer holds no state between records; counting outcomes is the
/// job of [`RunSummary`](crate::engine::RunSummary).
#[derive(Debug, Default)]
pub struct RecordTransformer;

impl RecordTransformer {
    pub fn new() -> Self {
        Self
    }

    /// Validates and transforms a single header-stripped input line.
    pub fn transform(&self, line: &str) -> RecordOutcome {
        match ParsedProduct::parse(line).and_then(|product| self.apply_rules(product)) {
            Ok(product) => RecordOutcome::Transformed(product),
            Err(reason) => RecordOutcome::Skipped(reason)
        }
    }

    fn apply_rules(&self, product: ParsedProduct) -> Result<TransformedProduct, SkipReason> {
        let ParsedProduct { product_id, name, price, category } = product;
        let is_electronics = category.is_electronics();

        let amount = if is_electronics {
            price.discounted(ELECTRONICS_DISCOUNT_RATE)
                .map_err(|_| SkipReason::invalid_price(&price.to_string()))?
        } else {
            price
        };

        //NOTE: Only fails for values beyond a 96-bit mantissa at two decimals.
        let price = amount.round_half_up()
            .map_err(|_| SkipReason::invalid_price(&amount.to_string()))?;

        let category = if is_electronics && price > PREMIUM_THRESHOLD {
            Category::premium_electronics()
        } else {
            category
        };

        Ok(TransformedProduct {
            product_id,
            name,
            price,
            category,
            price_range: PriceRange::of(price)
        })
    }
}
