//! Server-rendered HTML views.
//!
//! Every view is a pure function from already-fetched catalog data to an
//! HTML string. Interpolated text goes through [`escape_html`].

mod card;
mod catalog;
mod detail;
mod home;
mod layout;

pub use card::render_card;
pub use catalog::render_catalog;
pub use detail::{render_detail, render_not_found};
pub use home::{render_home, FEATURED_LIMIT};
pub use layout::{render_layout, PageMeta, STORE_NAME};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use storefront_core::Product;

/// Everything outside the RFC 3986 unreserved set is escaped, so an id always
/// occupies exactly one path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Escapes text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Formats a price as dollars with exactly two decimals, e.g. `$149.99`.
#[must_use]
pub fn format_price(product: &Product) -> String {
    format!("${:.2}", product.price.round_dp(2))
}

/// Link to a product's detail page, e.g. `/products/sku%2F42`.
///
/// The output contains no HTML-special characters and can be interpolated
/// into an attribute as-is.
#[must_use]
pub fn product_href(id: &str) -> String {
    format!("/products/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

/// Placeholder image shown when a product has no `imageUrl`.
const PLACEHOLDER_SVG: &str = r#"<svg class="placeholder" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="1" d="M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z"/></svg>"#;

/// Renders the product image, or the placeholder when there is none.
fn render_image(product: &Product, class: &str) -> String {
    match product.image_url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => format!(
            r#"<img class="{class}" src="{src}" alt="{alt}" loading="lazy">"#,
            src = escape_html(url),
            alt = escape_html(&product.name),
        ),
        None => PLACEHOLDER_SVG.to_string(),
    }
}
