use std::fmt::Write as _;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use storefront_core::Product;

use super::card::render_grid;
use super::escape_html;
use super::layout::{render_layout, PageMeta};

/// Renders the catalog: heading with product count, category filter links,
/// and the product grid or an empty-state message.
///
/// `active_category` highlights the current filter; `None` means "All".
#[must_use]
pub fn render_catalog(
    products: &[Product],
    categories: &[String],
    active_category: Option<&str>,
    year: i32,
) -> String {
    let mut content = String::from(r#"<div class="container">"#);

    let _ = write!(
        content,
        r#"<div><h1>All Products</h1><p class="muted">Browse our collection of {} products</p></div>"#,
        products.len()
    );

    if !categories.is_empty() {
        content.push_str(r#"<nav class="filters">"#);
        content.push_str(&filter_link("All", "/products", active_category.is_none()));
        for category in categories {
            let href = format!("/products?category={}", encode_query_value(category));
            content.push_str(&filter_link(
                category,
                &href,
                active_category == Some(category.as_str()),
            ));
        }
        content.push_str("</nav>");
    }

    if products.is_empty() {
        content.push_str(r#"<div class="empty"><p class="muted">No products found.</p></div>"#);
    } else {
        content.push_str(&render_grid(products));
    }
    content.push_str("</div>");

    render_layout(
        &PageMeta::section(
            "Products",
            Some("Browse our collection of products".to_string()),
        ),
        &content,
        year,
    )
}

fn filter_link(label: &str, href: &str, active: bool) -> String {
    let class = if active { "badge in-stock" } else { "badge" };
    format!(
        r#"<a class="{class}" href="{href}">{label}</a>"#,
        href = escape_html(href),
        label = escape_html(label),
    )
}

/// Unreserved characters stay literal; everything else is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}
