//! Client for the Giphy GIF search API.
//!
//! Returns results in provider-native order; unlike the movie endpoints
//! there is no popularity field to rank by.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::cache::ResponseCache;
use super::tmdb::read_json;
use super::GatewayError;

const DEFAULT_BASE_URL: &str = "https://api.giphy.com/v1";

/// Default number of GIFs returned per search
pub const DEFAULT_GIF_LIMIT: usize = 5;

/// A GIF search result, projected down to what the selection flow needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifSummary {
    pub id: String,
    pub title: String,
    /// URL of the original-size rendition
    pub url: String,
}

#[derive(Deserialize)]
struct SearchGifsResponse {
    #[serde(default)]
    data: Vec<GifEntry>,
}

#[derive(Deserialize)]
struct GifEntry {
    id: String,
    #[serde(default)]
    title: String,
    images: GifImages,
}

#[derive(Deserialize)]
struct GifImages {
    original: GifRendition,
}

#[derive(Deserialize)]
struct GifRendition {
    url: String,
}

/// Client for the Giphy REST API
#[derive(Debug)]
pub struct GiphyClient {
    http: Client,
    api_key: String,
    base_url: String,
    search_cache: ResponseCache<(String, usize), Vec<GifSummary>>,
}

impl GiphyClient {
    /// Create a client authenticating with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            search_cache: ResponseCache::default(),
        }
    }

    /// Override the API base URL (used by tests to point at a local double)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search GIFs, preserving the provider's ordering
    ///
    /// # Errors
    ///
    /// `GatewayError::EmptyQuery` when the query is blank, `Upstream` on a
    /// non-success provider response.
    pub async fn search_gifs(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<GifSummary>, GatewayError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GatewayError::EmptyQuery);
        }

        let key = (query.to_string(), limit);
        if let Some(hit) = self.search_cache.get(&key).await {
            return Ok(hit);
        }

        let limit_param = limit.to_string();
        let response = self
            .http
            .get(format!("{}/gifs/search", self.base_url))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("q", query),
                ("limit", limit_param.as_str()),
            ])
            .send()
            .await?;

        let data: SearchGifsResponse = read_json(response).await?;
        let gifs: Vec<GifSummary> = data
            .data
            .into_iter()
            .map(|entry| GifSummary {
                id: entry.id,
                title: entry.title,
                url: entry.images.original.url,
            })
            .collect();

        self.search_cache.insert(key, gifs.clone()).await;
        Ok(gifs)
    }
}
