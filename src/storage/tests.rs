use super::{CsvProductSink, InputLines, ProductSink};
use crate::models::{Category, PriceRange, TransformedProduct};
use crate::types::Amount;
use anyhow::Result;
use std::io::{BufReader, Cursor};
use std::str::FromStr;

fn create_product(product_id: i32, name: &str, price: &str, category: &str) -> Result<TransformedProduct> {
    let price = Amount::from_str(price)?.round_half_up()?;

    Ok(TransformedProduct {
        product_id,
        name: name.to_string(),
        price,
        category: Category::new(category),
        price_range: PriceRange::of(price)
    })
}

#[test]
fn test_csv_sink_writes_header_and_rows_in_order() -> Result<()> {
    let mut buffer = Vec::new();

    {
        let mut sink = CsvProductSink::new(&mut buffer);
        sink.write_header()?;
        sink.append(&create_product(2, "GADGET", "495.00", "Electronics")?)?;
        sink.append(&create_product(1, "WIDGET", "9.99", "Home")?)?;
        sink.flush()?;
    }

    assert_eq!(
        String::from_utf8(buffer)?,
        "ProductID,Name,Price,Category,PriceRange\n2,GADGET,495.00,Electronics,High\n1,WIDGET,9.99,Home,Low\n"
    );

    Ok(())
}

#[test]
fn test_csv_sink_does_not_quote_fields() -> Result<()> {
    let mut buffer = Vec::new();

    {
        let mut sink = CsvProductSink::new(&mut buffer);
        sink.append(&create_product(3, "12\" RULER", "4", "Office \"Supplies\"")?)?;
        sink.flush()?;
    }

    assert_eq!(String::from_utf8(buffer)?, "3,12\" RULER,4.00,Office \"Supplies\",Low\n");

    Ok(())
}

#[test]
fn test_vec_sink_collects_rows() -> Result<()> {
    let mut rows: Vec<TransformedProduct> = Vec::new();

    rows.write_header()?;
    ProductSink::append(&mut rows, &create_product(1, "WIDGET", "9.99", "Home")?)?;
    rows.flush()?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].price.to_string(), "9.99");

    Ok(())
}

fn collect_lines(content: &[u8], capacity: usize) -> Result<Vec<String>> {
    let reader = BufReader::with_capacity(capacity, Cursor::new(content));
    Ok(InputLines::new(reader).collect::<Result<Vec<_>, _>>()?)
}

#[test]
fn test_input_lines_split_on_every_line_ending() -> Result<()> {
    let content = b"header\r1,A,1.00,Home\r\n2,B,2.00,Home\n\n3,C,3.00,Home";

    for capacity in [1, 2, 3, 64] {
        assert_eq!(
            collect_lines(content, capacity)?,
            vec!["header", "1,A,1.00,Home", "2,B,2.00,Home", "", "3,C,3.00,Home"]
        );
    }

    Ok(())
}

#[test]
fn test_input_lines_treat_carriage_return_pairs_as_one_break() -> Result<()> {
    assert_eq!(collect_lines(b"a\r\n\r\nb\r", 1)?, vec!["a", "", "b"]);
    assert_eq!(collect_lines(b"a\r\rb\n", 8)?, vec!["a", "", "b"]);

    Ok(())
}

#[test]
fn test_input_lines_yield_nothing_for_empty_input() -> Result<()> {
    assert!(collect_lines(b"", 8)?.is_empty());
    assert_eq!(collect_lines(b"\n", 8)?, vec![""]);

    Ok(())
}

#[test]
fn test_input_lines_reject_invalid_utf8() {
    let mut lines = InputLines::new(Cursor::new(&b"ok\n\xff\xfe\n"[..]));

    assert!(matches!(lines.next(), Some(Ok(_))));
    assert!(matches!(lines.next(), Some(Err(_))));
}
