use super::{Category, ParsedProduct, PriceRange, SkipKind, SkipReason};

use std::str::FromStr;

use anyhow::Result;

use crate::types::Amount;

fn price_range_of(price: &str) -> Result<PriceRange> {
    Ok(PriceRange::of(Amount::from_str(price)?.round_half_up()?))
}

#[test]
fn test_parse_valid_line_normalizes_fields() -> Result<()> {
    let product = ParsedProduct::parse(" 7 , widget deluxe ,  12.50 ,  Home Goods  ")?;

    assert_eq!(product.product_id, 7);
    assert_eq!(product.name, "WIDGET DELUXE");
    assert_eq!(product.price, Amount::from_str("12.5")?);
    assert_eq!(product.category, Category::new("Home Goods"));

    Ok(())
}

#[test]
fn test_parse_rejects_blank_lines() {
    assert_eq!(ParsedProduct::parse(""), Err(SkipReason::BlankLine));
    assert_eq!(ParsedProduct::parse("   \t "), Err(SkipReason::BlankLine));
}

#[test]
fn test_parse_rejects_wrong_field_count() {
    assert_eq!(ParsedProduct::parse("4,Bad,10.00"), Err(SkipReason::WrongFieldCount { found: 3 }));
    assert_eq!(ParsedProduct::parse("4,Bad,10.00,Home,Extra"), Err(SkipReason::WrongFieldCount { found: 5 }));
    assert_eq!(ParsedProduct::parse(",,,"), Err(SkipReason::WrongFieldCount { found: 0 }));
}

#[test]
fn test_parse_ignores_trailing_empty_fields_when_counting() -> Result<()> {
    let product = ParsedProduct::parse("5,Lamp,20.00,Home,,")?;

    assert_eq!(product.category, Category::new("Home"));
    assert_eq!(ParsedProduct::parse("5,Lamp,20.00,"), Err(SkipReason::WrongFieldCount { found: 3 }));

    Ok(())
}

#[test]
fn test_parse_keeps_blank_category_that_is_not_trailing_empty() -> Result<()> {
    let product = ParsedProduct::parse("6,Lamp,20.00, ")?;

    assert_eq!(product.category, Category::new(""));

    Ok(())
}

#[test]
fn test_parse_rejects_non_numeric_product_id() {
    let result = ParsedProduct::parse("abc,Widget,9.99,Home");

    assert_eq!(result, Err(SkipReason::InvalidProductId { value: "abc".to_string() }));
    assert!(ParsedProduct::parse("1.5,Widget,9.99,Home").is_err());
    assert!(ParsedProduct::parse("99999999999,Widget,9.99,Home").is_err());
}

#[test]
fn test_parse_rejects_non_numeric_price() {
    let result = ParsedProduct::parse("1,Widget,nine,Home");

    assert_eq!(result, Err(SkipReason::InvalidPrice { value: "nine".to_string() }));
}

#[test]
fn test_parse_checks_product_id_before_price() {
    let result = ParsedProduct::parse("x,Widget,y,Home");

    assert!(matches!(result, Err(SkipReason::InvalidProductId { .. })));
}

#[test]
fn test_skip_reasons_map_onto_two_kinds() {
    assert_eq!(SkipReason::BlankLine.kind(), SkipKind::MalformedRow);
    assert_eq!(SkipReason::wrong_field_count(2).kind(), SkipKind::MalformedRow);
    assert_eq!(SkipReason::invalid_product_id("x").kind(), SkipKind::InvalidNumericField);
    assert_eq!(SkipReason::invalid_price("y").kind(), SkipKind::InvalidNumericField);
}

#[test]
fn test_category_electronics_match_is_exact() {
    assert!(Category::new("Electronics").is_electronics());
    assert!(!Category::new("electronics").is_electronics());
    assert!(!Category::new("ELECTRONICS").is_electronics());
    assert!(!Category::new("Premium Electronics").is_electronics());
}

#[test]
fn test_price_range_uses_inclusive_upper_bounds() -> Result<()> {
    assert_eq!(price_range_of("0.00")?, PriceRange::Low);
    assert_eq!(price_range_of("10.00")?, PriceRange::Low);
    assert_eq!(price_range_of("10.01")?, PriceRange::Medium);
    assert_eq!(price_range_of("100.00")?, PriceRange::Medium);
    assert_eq!(price_range_of("100.01")?, PriceRange::High);
    assert_eq!(price_range_of("500.00")?, PriceRange::High);
    assert_eq!(price_range_of("500.01")?, PriceRange::Premium);
    assert_eq!(price_range_of("-5.00")?, PriceRange::Low);

    Ok(())
}

#[test]
fn test_price_range_labels() {
    let labels: Vec<String> = [PriceRange::Low, PriceRange::Medium, PriceRange::High, PriceRange::Premium]
        .iter()
        .map(|range| range.to_string())
        .collect();

    assert_eq!(labels, vec!["Low", "Medium", "High", "Premium"]);
}
