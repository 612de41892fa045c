use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, FetchError>;
