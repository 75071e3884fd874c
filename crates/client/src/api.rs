//! Raw REST API client for the catalog backend.
//!
//! One method per HTTP endpoint, using [`reqwest`]. This layer reports
//! every failure through [`ApiError`]; the masking of failures behind
//! mock data happens one level up, in [`crate::fetch`].

use std::sync::Arc;

use serde::Deserialize;

use crate::auth::CredentialStore;
use crate::config::ClientConfig;

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

/// A raw industry or category record as the backend returns it.
///
/// Everything except the name is optional; normalization fills the gaps.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
}

/// A raw product record with its nested image and review collections.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub product_images: Vec<RawProductImage>,
    #[serde(default)]
    pub reviews: Vec<RawReview>,
}

/// One entry of a product's `product_images[]` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProductImage {
    pub url: String,
}

/// One entry of a product's `reviews[]` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReview {
    #[serde(default)]
    pub rating: f32,
}

/// Aggregate returned by `products?industry=<name>&count=true`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCount {
    pub count: u64,
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the catalog REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("backend returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("malformed response payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// CatalogApi
// ---------------------------------------------------------------------------

/// HTTP client for the catalog backend.
pub struct CatalogApi {
    client: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
}

impl CatalogApi {
    /// Create a new API client from configuration.
    ///
    /// The credential store is consulted per request; see
    /// [`crate::auth`].
    pub fn new(config: &ClientConfig, credentials: Arc<dyn CredentialStore>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self::with_client(client, &config.base_url, credentials)
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across several clients).
    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// List the top-level industries.
    ///
    /// Sends `GET industries`.
    pub async fn list_industries(&self) -> Result<Vec<RawListing>, ApiError> {
        let response = self.request("industries").send().await?;
        Self::parse(response).await
    }

    /// List the categories of one industry, paginated.
    ///
    /// Sends `GET categories?industry=<name>&page=<n>&limit=<n>`.
    pub async fn list_categories(
        &self,
        industry: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<RawListing>, ApiError> {
        let response = self
            .request("categories")
            .query(&[("industry", industry)])
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Fetch the aggregate product count for one industry.
    ///
    /// Sends `GET products?industry=<name>&count=true`.
    pub async fn count_products(&self, industry: &str) -> Result<ProductCount, ApiError> {
        let response = self
            .request("products")
            .query(&[("industry", industry), ("count", "true")])
            .send()
            .await?;
        Self::parse(response).await
    }

    /// List product records, optionally scoped to one industry.
    ///
    /// Sends `GET products` (or `GET products?industry=<name>`); records
    /// carry nested `product_images[]` and `reviews[]` collections.
    pub async fn list_products(
        &self,
        industry: Option<&str>,
    ) -> Result<Vec<RawProduct>, ApiError> {
        let mut request = self.request("products");
        if let Some(industry) = industry {
            request = request.query(&[("industry", industry)]);
        }
        let response = request.send().await?;
        Self::parse(response).await
    }

    // ---- private helpers ----

    /// Start a GET request for a relative endpoint path, attaching the
    /// bearer token when the credential store holds one.
    fn request(&self, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(format!("{}/{}", self.base_url, path));
        if let Some(token) = self.credentials.bearer_token() {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or [`ApiError::Status`] with the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Check the status, then decode the body as JSON.
    ///
    /// Decoding goes through `text()` + `serde_json::from_str` so a shape
    /// mismatch surfaces as [`ApiError::Malformed`] rather than folding
    /// into the transport error variant.
    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
