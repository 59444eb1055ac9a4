//! TVmaze Lookup Adapter
//!
//! Resolves a normalized title to a [`ShowSummary`] with a single call to the
//! TVmaze `singlesearch` endpoint, embedding the cast sub-resource.
//!
//! One request per lookup. No retries, no caching, and the transport's own
//! timeout defaults apply.

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::normalize::NormalizedTitle;
use crate::summary::{ShowRecord, ShowSummary};

/// Public TVmaze API
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Show-metadata client bound to one upstream base URL.
#[derive(Debug, Clone)]
pub struct TvMazeClient {
    http_client: Client,
    base_url: String,
}

impl TvMazeClient {
    /// Create a client for `base_url` (no trailing path, e.g. `https://api.tvmaze.com`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let http_client = Client::builder()
            .user_agent(concat!("series-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search URL for a title, with the title escaped and the cast embedded.
    pub fn search_url(&self, title: &NormalizedTitle) -> String {
        format!(
            "{}/singlesearch/shows?q={}&embed=cast",
            self.base_url,
            urlencoding::encode(title.as_str())
        )
    }

    /// Fetch the raw show record for a title.
    pub async fn fetch_show(&self, title: &NormalizedTitle) -> Result<ShowRecord, LookupError> {
        let url = self.search_url(title);
        debug!(title = %title, url = %url, "Querying show metadata");

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(title = %title, status = %status, "Show not found upstream");
            return Err(LookupError::NotFound {
                title: title.to_string(),
            });
        }

        let record: ShowRecord = response.json().await?;
        debug!(title = %title, name = ?record.name, "Show record received");

        Ok(record)
    }

    /// Look up a show and shape the summary.
    ///
    /// `original_query` is echoed back verbatim in the summary.
    pub async fn lookup(
        &self,
        original_query: &str,
        title: &NormalizedTitle,
    ) -> Result<ShowSummary, LookupError> {
        let record = self.fetch_show(title).await?;
        Ok(ShowSummary::from_record(original_query, title, &record))
    }
}
