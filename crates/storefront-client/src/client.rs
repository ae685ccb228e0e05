//! HTTP client for the remote product API.
//!
//! Wraps `reqwest` with typed status handling, shape detection for the two
//! `GET /api/products` response forms, a short-lived response cache, and the
//! fixture-backed fallback used whenever the API cannot answer.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use storefront_core::{AppConfig, FixtureStore, Product, ProductList, ProductQuery};

use crate::cache::ResponseCache;
use crate::error::CatalogError;

/// Default freshness window for cached responses.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// Client for the remote product API.
///
/// Use [`CatalogClient::new`] with an explicit base URL (a wiremock server in
/// tests) or [`CatalogClient::from_config`] in the binaries.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    cache: ResponseCache,
    fixtures: FixtureStore,
}

impl CatalogClient {
    /// Creates a client for the API at `base_url`, backed by the built-in
    /// fixture store.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CatalogError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute http(s) URL.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        cache_ttl: Duration,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
            cache: ResponseCache::new(cache_ttl),
            fixtures: FixtureStore::builtin(),
        })
    }

    /// Creates a client from the application config.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::new(
            &config.api_url,
            config.api_timeout_secs,
            &config.api_user_agent,
            Duration::from_secs(config.api_cache_ttl_secs),
        )
    }

    /// Replaces the fixture store used by the fallback path.
    #[must_use]
    pub fn with_fixtures(mut self, fixtures: FixtureStore) -> Self {
        self.fixtures = fixtures;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn fixtures(&self) -> &FixtureStore {
        &self.fixtures
    }

    /// Lists products, answering from the fixture store on any failure.
    ///
    /// A bare-array response is truncated to `query.limit`; a paginated
    /// response is returned as the server sent it. The fallback filters by
    /// category and truncates to the limit but does not paginate.
    pub async fn list_products(&self, query: &ProductQuery) -> Vec<Product> {
        match self.fetch_products(query).await {
            Ok(list) => list.into_products(query.limit),
            Err(e) => {
                log_fallback("list_products", &e);
                self.fixtures.list(query)
            }
        }
    }

    /// Fetches one product by id, answering from the fixture store on any
    /// failure, including an upstream 404.
    pub async fn get_product(&self, id: &str) -> Option<Product> {
        match self.fetch_product(id).await {
            Ok(product) => Some(product),
            Err(e) => {
                log_fallback("get_product", &e);
                self.fixtures.find(id)
            }
        }
    }

    /// Lists categories, answering from the fixture store on any failure.
    pub async fn list_categories(&self) -> Vec<String> {
        match self.fetch_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                log_fallback("list_categories", &e);
                self.fixtures.categories()
            }
        }
    }

    /// Calls `GET /api/products` and decodes either response shape.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] on network failure or timeout.
    /// - [`CatalogError::NotFound`] / [`CatalogError::UnexpectedStatus`] on a
    ///   non-2xx status.
    /// - [`CatalogError::Deserialize`] if the body is neither a product array
    ///   nor a paginated object.
    /// - [`CatalogError::InvalidProduct`] if a product has a negative price.
    pub async fn fetch_products(&self, query: &ProductQuery) -> Result<ProductList, CatalogError> {
        let url = self.products_url(query);
        self.get_json(&url, "products list", true, |list: &ProductList| {
            list.products().iter().try_for_each(check_product)
        })
        .await
    }

    /// Calls `GET /api/products/{id}`.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::fetch_products`]; an unknown id surfaces as
    /// [`CatalogError::NotFound`].
    pub async fn fetch_product(&self, id: &str) -> Result<Product, CatalogError> {
        let url = self.endpoint(&["api", "products", id]);
        self.get_json(&url, &format!("product {id}"), true, check_product)
            .await
    }

    /// Calls `GET /api/categories`.
    ///
    /// # Errors
    ///
    /// Same transport and status errors as [`CatalogClient::fetch_products`];
    /// [`CatalogError::Deserialize`] if the body is not an array of strings.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        let url = self.endpoint(&["api", "categories"]);
        self.get_json(&url, "categories", true, |_: &Vec<String>| Ok(()))
            .await
    }

    /// Checks that the API answers right now, bypassing the response cache.
    ///
    /// # Errors
    ///
    /// Any [`CatalogError`] from `GET /api/categories`.
    pub async fn probe(&self) -> Result<(), CatalogError> {
        let url = self.endpoint(&["api", "categories"]);
        self.get_json(&url, "categories probe", false, |_: &Vec<String>| Ok(()))
            .await
            .map(|_| ())
    }

    /// Builds `{base}/api/products` with the query's parameters attached.
    fn products_url(&self, query: &ProductQuery) -> Url {
        let mut url = self.endpoint(&["api", "products"]);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.query_pairs() {
                pairs.append_pair(key, &value);
            }
        }
        url
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a GET request (or serves a fresh cached body), decodes it and
    /// runs `check` on the result.
    ///
    /// Bodies are cached only after they decode and pass `check`.
    async fn get_json<T, F>(
        &self,
        url: &Url,
        context: &str,
        use_cache: bool,
        check: F,
    ) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
        F: Fn(&T) -> Result<(), CatalogError>,
    {
        let key = url.as_str();

        if use_cache {
            if let Some(body) = self.cache.get(key).await {
                tracing::debug!(url = key, "serving cached catalog response");
                return decode(&body, context);
            }
        }

        let body = self.request_text(url).await?;
        let value = decode(&body, context)?;
        check(&value)?;

        if use_cache {
            self.cache.insert(key.to_owned(), body).await;
        }
        Ok(value)
    }

    /// Sends a GET request and returns the body of a 2xx response.
    async fn request_text(&self, url: &Url) -> Result<String, CatalogError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Validates the base URL and normalises it to end with exactly one slash.
fn parse_base_url(base_url: &str) -> Result<Url, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };

    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    let url = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_owned()));
    }
    Ok(url)
}

fn decode<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

fn check_product(product: &Product) -> Result<(), CatalogError> {
    if product.has_valid_price() {
        Ok(())
    } else {
        Err(CatalogError::InvalidProduct {
            id: product.id.clone(),
            reason: format!("negative price {}", product.price),
        })
    }
}

/// Records why the fallback path was taken. A 404 is logged separately from
/// outages so the two stay distinguishable in the logs.
fn log_fallback(operation: &'static str, error: &CatalogError) {
    if error.is_not_found() {
        tracing::info!(operation, error = %error, "resource not found upstream, consulting fixture store");
    } else {
        tracing::warn!(operation, error = %error, "catalog API unavailable, serving fixture data");
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
