use storefront_core::Product;

use super::card::render_grid;
use super::layout::{render_layout, PageMeta, STORE_NAME};

/// Number of products featured on the home page.
pub const FEATURED_LIMIT: u32 = 4;

#[must_use]
pub fn render_home(featured: &[Product], year: i32) -> String {
    let content = format!(
        r#"<div class="container">
<section class="hero"><h1>Welcome to Our Store</h1><p>Discover amazing products at great prices.</p><a class="button" href="/products">Shop Now</a></section>
<section><div class="section-head"><h2>Featured Products</h2><a href="/products">View All &rarr;</a></div>{grid}</section>
</div>"#,
        grid = render_grid(featured),
    );

    render_layout(
        &PageMeta::new(
            STORE_NAME,
            Some("A minimal storefront backed by the catalog API".to_string()),
        ),
        &content,
        year,
    )
}
