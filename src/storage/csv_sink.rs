use std::io::Write;

use csv::{QuoteStyle, Writer, WriterBuilder};

use crate::models::TransformedProduct;
use crate::storage::{ProductSink, SinkError};

/// Writes rows as comma-separated text with the fixed product header.
///
/// Quoting is disabled: names and categories are written exactly as they were
/// transformed, the same way a plain `join(",")` would.
pub struct CsvProductSink<W: Write> {
    writer: Writer<W>
}

impl<W: Write> CsvProductSink<W> {
    pub fn new(destination: W) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(destination);

        Self { writer }
    }
}

impl<W: Write> ProductSink for CsvProductSink<W> {
    fn write_header(&mut self) -> Result<(), SinkError> {
        self.writer.write_record(TransformedProduct::HEADER)?;
        Ok(())
    }

    fn append(&mut self, product: &TransformedProduct) -> Result<(), SinkError> {
        self.writer.serialize(product)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}
