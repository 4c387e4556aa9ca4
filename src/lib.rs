pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::HttpUpstream;
pub use crate::api::{app, AppState};
pub use crate::config::{toml_config::FileConfig, HubConfig};
pub use crate::core::{ConversionService, QuoteBook, WeatherService};
pub use crate::utils::error::{HubError, Result, UpstreamError};
