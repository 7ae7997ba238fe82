mod csv_sink;
mod errors;
mod lines;
#[cfg(test)]
mod tests;

use crate::models::TransformedProduct;

pub use csv_sink::CsvProductSink;
pub use errors::SinkError;
pub use lines::InputLines;

/// A destination for transformed rows. Rows arrive in input order.
pub trait ProductSink {
    fn write_header(&mut self) -> Result<(), SinkError>;
    fn append(&mut self, product: &TransformedProduct) -> Result<(), SinkError>;
    fn flush(&mut self) -> Result<(), SinkError>;
}

/// Collects rows in memory; the header is implied by the row type.
impl ProductSink for Vec<TransformedProduct> {
    fn write_header(&mut self) -> Result<(), SinkError> {
        Ok(())
    }

    fn append(&mut self, product: &TransformedProduct) -> Result<(), SinkError> {
        self.push(product.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}
