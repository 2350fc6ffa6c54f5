use crate::api::error::ApiError;
use crate::api::traits::SearchApi;
use crate::api::types::SearchParams;
use crate::models::InsertItem;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

/// Fixed endpoint path on the API server.
const SEARCH_PATH: &str = "/inserate";

/// HTTP client for the inserate search API.
pub struct InserateClient {
    client: Client,
    base_url: String,
}

impl InserateClient {
    /// Create a client against the given base URL (e.g. `http://localhost:8000`).
    ///
    /// No timeout is set: a search waits for the server to answer or for the
    /// transport layer to fail. There is no retry and no cancellation of
    /// requests already in flight.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Build the full request URL with the five URL-encoded query pairs.
    pub fn request_url(&self, params: &SearchParams) -> Result<Url, ApiError> {
        let endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), SEARCH_PATH);
        Url::parse_with_params(&endpoint, params.to_query_pairs())
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl SearchApi for InserateClient {
    async fn search(&self, params: &SearchParams) -> Result<Vec<InsertItem>, ApiError> {
        let url = self.request_url(params)?;

        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("API returned status: {}", status);
            return Err(ApiError::Status(status));
        }

        let body = response.text().await.map_err(ApiError::Transport)?;

        debug!("Downloaded {} bytes of JSON", body.len());

        serde_json::from_str(&body).map_err(ApiError::MalformedBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_carries_the_five_keys() {
        let client = InserateClient::new("http://localhost:8000").unwrap();
        let url = client.request_url(&SearchParams::default()).unwrap();

        assert_eq!(url.path(), "/inserate");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("query".to_string(), "küche zu verschenken".to_string()),
                ("location".to_string(), "12687".to_string()),
                ("radius".to_string(), "10".to_string()),
                ("min_price".to_string(), "0".to_string()),
                ("page_count".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn request_url_percent_encodes_values() {
        let client = InserateClient::new("http://localhost:8000/").unwrap();
        let mut params = SearchParams::default();
        params.query = "küche & herd".to_string();
        let url = client.request_url(&params).unwrap();

        let encoded = url.query().unwrap();
        assert!(encoded.contains("query=k%C3%BCche+%26+herd"));
        // Trailing slash on the base URL must not double up.
        assert!(url.as_str().starts_with("http://localhost:8000/inserate?"));
    }

    #[test]
    fn garbage_base_url_is_reported_as_invalid() {
        let client = InserateClient::new("not a url").unwrap();
        let err = client.request_url(&SearchParams::default()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
