pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::fetch::{fetch_json, JsonFetcher};
pub use crate::core::widget::JsonWidget;
pub use crate::domain::ports::Fetch;
pub use crate::utils::error::{FetchError, Result};
