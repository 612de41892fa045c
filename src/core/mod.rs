pub mod fetch;
pub mod widget;

pub use crate::domain::ports::Fetch;
pub use crate::utils::error::Result;
