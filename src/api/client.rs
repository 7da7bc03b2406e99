use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://knowyourmsp.com/api";

/// Endpoint paths on the knowyourmsp API.
pub mod paths {
    pub const REGION_DETAILS: &str = "regiondetails.php";
    pub const REGION_CONSTITUENCY_LIST: &str = "regionconstituencylist.php";
    // The remote API itself spells this path without the "s".
    pub const CONSTITUENCY_DETAILS: &str = "contituencydetails.php";
    pub const MSP_DETAILS: &str = "mspdetails.php";
}

/// The one outbound seam of the skill. A turn performs at most one fetch;
/// tests substitute a mock implementation.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// GET `{base}/{path}?{query}` and return the raw body text.
    async fn fetch(&self, path: &str, query: &[(&str, String)]) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct MspApiClient {
    client: Client,
    base_url: String,
}

impl MspApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(8))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }
}

impl Default for MspApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl Fetch for MspApiClient {
    async fn fetch(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        tracing::debug!(%url, "api request");
        // The body is returned regardless of HTTP status: a non-2xx body
        // simply fails to compile downstream, same as any other bad payload.
        let body = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .text()
            .await?;
        Ok(body)
    }
}
