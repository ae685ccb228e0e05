use thiserror::Error;

/// Errors returned by the strict [`CatalogClient`](crate::CatalogClient) calls.
///
/// The fallback operations catch every variant and answer from the fixture
/// store instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network, timeout or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered 404 for the requested resource.
    #[error("not found upstream: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body decoded but a product violates the data model.
    #[error("invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl CatalogError {
    /// Returns `true` when the API reported the resource as absent, as
    /// opposed to being unreachable or misbehaving.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}
