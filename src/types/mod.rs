mod amount;
mod errors;
mod price;

pub use amount::Amount;
pub use errors::PriceError;
pub use price::Price;

pub type ProductId = i32;
