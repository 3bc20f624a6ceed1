pub mod listings_scraper;
pub mod omdb_api;

pub use listings_scraper::ListingsScraper;
pub use omdb_api::OmdbApi;

use crate::result::Result;

use async_trait::async_trait;
use serde_json::{Map, Value};

#[async_trait]
pub trait Extract {
    type Data;

    async fn extract(&self) -> Result<Self::Data>;
}

/// Looks up metadata for a single title. `Ok(None)` means the provider had no
/// record of the title; `Err` means the request itself failed. The registry
/// treats both the same way: the title goes on the skip list.
#[async_trait]
pub trait Enrich {
    async fn lookup(&self, title: &str) -> Result<Option<Map<String, Value>>>;
}
