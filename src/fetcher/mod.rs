pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

pub use http_fetcher::HttpFetcher;

#[async_trait]
pub trait Fetcher {
    /// Fetch the feed body as text.
    async fn fetch(&self, url: &str) -> Result<String>;
}
