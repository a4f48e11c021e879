//! HTTP access to the two Unsplash read endpoints.
//!
//! Request construction is split from sending so the URL and parameters
//! can be asserted in tests without any network.

use super::error::ApiError;
use super::models::{Photo, SearchResponse};

/// Default API base; override with the UNSPLASH_API_URL variable
pub const DEFAULT_API_URL: &str = "https://api.unsplash.com";

/// Photos per request, for random batches and search pages alike
pub const BATCH_SIZE: u32 = 10;

/// Client for the Unsplash REST API.
///
/// Cheap to clone: the inner reqwest client is a shared connection pool,
/// so every background task can own a copy.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    http: reqwest::Client,
    api_url: String,
    access_key: String,
}

impl UnsplashClient {
    /// Create a client for the given API base and access key.
    /// A trailing slash on the base URL is tolerated.
    pub fn new(api_url: impl Into<String>, access_key: impl Into<String>) -> Self {
        UnsplashClient {
            http: reqwest::Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            access_key: access_key.into(),
        }
    }

    /// GET /photos/random — one batch of random photos
    pub async fn random_photos(&self) -> Result<Vec<Photo>, ApiError> {
        let response = self.random_request().send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// GET /search/photos — the first page of keyword matches
    pub async fn search_photos(&self, query: &str) -> Result<Vec<Photo>, ApiError> {
        let response = self.search_request(query).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let envelope: SearchResponse = response.json().await?;
        Ok(envelope.results)
    }

    /// Download raw image bytes. Renditions live on a separate CDN host,
    /// so this takes the full URL straight from the photo record.
    pub async fn image_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.bytes().await?.to_vec())
    }

    fn random_request(&self) -> reqwest::RequestBuilder {
        self.http
            .get(format!("{}/photos/random", self.api_url))
            .query(&[("count", BATCH_SIZE)])
            .query(&[("client_id", self.access_key.as_str())])
    }

    fn search_request(&self, query: &str) -> reqwest::RequestBuilder {
        self.http
            .get(format!("{}/search/photos", self.api_url))
            .query(&[("query", query)])
            .query(&[("per_page", BATCH_SIZE)])
            .query(&[("client_id", self.access_key.as_str())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> UnsplashClient {
        UnsplashClient::new("https://api.example.test", "test-key")
    }

    #[test]
    fn random_request_carries_batch_size_and_key() {
        let request = client().random_request().build().unwrap();
        assert_eq!(request.url().path(), "/photos/random");
        let query = request.url().query().unwrap();
        assert!(query.contains("count=10"), "query was: {query}");
        assert!(query.contains("client_id=test-key"), "query was: {query}");
    }

    #[test]
    fn search_request_carries_query_page_size_and_key() {
        let request = client().search_request("nature").build().unwrap();
        assert_eq!(request.url().path(), "/search/photos");
        let query = request.url().query().unwrap();
        assert!(query.contains("query=nature"), "query was: {query}");
        assert!(query.contains("per_page=10"), "query was: {query}");
        assert!(query.contains("client_id=test-key"), "query was: {query}");
    }

    #[test]
    fn trailing_slash_on_the_base_url_is_tolerated() {
        let client = UnsplashClient::new("https://api.example.test/", "k");
        let request = client.random_request().build().unwrap();
        assert_eq!(request.url().path(), "/photos/random");
    }

    #[tokio::test]
    async fn connection_failure_surfaces_as_a_request_error() {
        // Nothing listens on port 1; the request must fail fast, not hang
        let client = UnsplashClient::new("http://127.0.0.1:1", "k");
        let result = client.random_photos().await;
        assert!(matches!(result, Err(ApiError::Request(_))));
    }
}
