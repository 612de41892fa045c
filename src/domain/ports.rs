use crate::utils::error::Result;
use async_trait::async_trait;

/// Transport seam: issue a GET and return the raw response body.
/// Swapping the implementation is how tests substitute a hand-rolled fetch.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get(&self, url: &str) -> Result<String>;
}
