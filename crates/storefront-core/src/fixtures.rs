//! Built-in sample catalog served when the remote product API is unavailable.
//!
//! The table is initialized once and never mutated; every query builds its
//! own filtered copy.

use std::sync::{Arc, LazyLock};

use rust_decimal::Decimal;

use crate::products::{Product, ProductQuery};

static BUILTIN_PRODUCTS: LazyLock<Arc<[Product]>> = LazyLock::new(|| {
    vec![
        sample(
            "1",
            "Wireless Headphones",
            "High-quality wireless headphones with noise cancellation and long battery life.",
            14999,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500",
            "Electronics",
            true,
        ),
        sample(
            "2",
            "Leather Backpack",
            "Stylish leather backpack perfect for work or travel.",
            8999,
            "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=500",
            "Accessories",
            true,
        ),
        sample(
            "3",
            "Smart Watch",
            "Feature-packed smartwatch with health tracking and notifications.",
            29999,
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500",
            "Electronics",
            true,
        ),
        sample(
            "4",
            "Running Shoes",
            "Lightweight and comfortable running shoes for daily workouts.",
            12999,
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=500",
            "Footwear",
            false,
        ),
        sample(
            "5",
            "Coffee Maker",
            "Premium coffee maker for the perfect morning brew.",
            7999,
            "https://images.unsplash.com/photo-1517668808822-9ebb02f2a0e6?w=500",
            "Home",
            true,
        ),
        sample(
            "6",
            "Desk Lamp",
            "Modern LED desk lamp with adjustable brightness.",
            4999,
            "https://images.unsplash.com/photo-1507473885765-e6ed057f782c?w=500",
            "Home",
            true,
        ),
    ]
    .into()
});

fn sample(
    id: &str,
    name: &str,
    description: &str,
    price_cents: i64,
    image_url: &str,
    category: &str,
    in_stock: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(price_cents, 2),
        image_url: Some(image_url.to_string()),
        category: Some(category.to_string()),
        in_stock,
        created_at: None,
        updated_at: None,
    }
}

/// Read-only product table used by the fallback path.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    products: Arc<[Product]>,
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FixtureStore {
    /// The shared built-in sample catalog (six products).
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            products: Arc::clone(&BUILTIN_PRODUCTS),
        }
    }

    /// A store over a caller-supplied product table.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Approximates `GET /api/products` over the fixture table.
    ///
    /// Filters by exact (case-sensitive) category, then truncates to
    /// `limit`. The page number is ignored.
    #[must_use]
    pub fn list(&self, query: &ProductQuery) -> Vec<Product> {
        let category = query.category_filter();
        let limit = query.limit.map_or(usize::MAX, |l| l as usize);

        self.products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category.as_deref() == Some(c)))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Exact-match lookup by product id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    /// Distinct non-empty categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for category in self.products.iter().filter_map(Product::category_label) {
            if !seen.iter().any(|c| c == category) {
                seen.push(category.to_string());
            }
        }
        seen
    }
}
