use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product as served by the remote product API.
///
/// Field names follow the API's camelCase wire contract. Instances are built
/// per request (from JSON or from the fixture store) and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier; the sole lookup key and routing parameter.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price. The wire format is a JSON number, e.g. `149.99`.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub in_stock: bool,
    /// ISO-8601 timestamp, passed through as the API returns it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Product {
    /// Returns `true` if the price is zero or positive.
    #[must_use]
    pub fn has_valid_price(&self) -> bool {
        self.price >= Decimal::ZERO
    }

    /// Returns the category only when it is present and non-empty.
    #[must_use]
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// The wrapped, paginated shape of `GET /api/products`.
///
/// Only `products` is required; the server has already applied
/// limit/page/category when it answers in this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedProducts {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

/// Either response shape of `GET /api/products`.
///
/// A JSON array decodes as [`ProductList::Bare`], a JSON object as
/// [`ProductList::Paginated`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductList {
    Bare(Vec<Product>),
    Paginated(PaginatedProducts),
}

impl ProductList {
    /// Resolves the response into the product sequence a view renders.
    ///
    /// A bare array is truncated to `limit` client-side; a paginated object
    /// is returned as-is.
    #[must_use]
    pub fn into_products(self, limit: Option<u32>) -> Vec<Product> {
        match self {
            ProductList::Bare(mut products) => {
                if let Some(limit) = limit {
                    products.truncate(limit as usize);
                }
                products
            }
            ProductList::Paginated(page) => page.products,
        }
    }

    /// Borrowing view over the contained products.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self {
            ProductList::Bare(products) => products,
            ProductList::Paginated(page) => &page.products,
        }
    }
}

/// Options for listing products.
///
/// Doubles as the query-string extractor for the catalog page, so absent
/// parameters deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProductQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// 1-based page number. Defaults to `1` when absent or zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ProductQuery {
    #[must_use]
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// The requested page, clamped to the first page.
    #[must_use]
    pub fn page_or_default(&self) -> u32 {
        self.page.map_or(1, |page| page.max(1))
    }

    /// The category filter, treating an empty string as no filter.
    #[must_use]
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Query parameters for `GET /api/products`, in `limit`, `page`,
    /// `category` order. `page` is always present.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs.push(("page", self.page_or_default().to_string()));
        if let Some(category) = self.category_filter() {
            pairs.push(("category", category.to_string()));
        }
        pairs
    }
}
