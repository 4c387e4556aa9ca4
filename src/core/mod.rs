pub mod currency;
pub mod format;
pub mod quote;
pub mod weather;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{ConversionResult, QuoteRecord, WeatherReport};
pub use crate::domain::ports::{ConfigProvider, UpstreamApi};
pub use crate::utils::error::Result;
pub use currency::ConversionService;
pub use quote::QuoteBook;
pub use weather::WeatherService;
