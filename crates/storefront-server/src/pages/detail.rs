use storefront_core::Product;

use super::layout::{render_layout, PageMeta};
use super::{escape_html, format_price, render_image};

const BACK_LINK: &str =
    r#"<a class="back" href="/products">&larr; Back to Products</a>"#;

/// Renders the full product page. The "Add to Cart" button is a static
/// affordance, disabled when the product is out of stock.
#[must_use]
pub fn render_detail(product: &Product, year: i32) -> String {
    let (badge_class, badge_label) = if product.in_stock {
        ("badge in-stock", "In Stock")
    } else {
        ("badge out-of-stock", "Out of Stock")
    };
    let category = product.category_label().map_or_else(String::new, |c| {
        format!(r#"<span class="badge">{}</span>"#, escape_html(c))
    });
    let disabled = if product.in_stock { "" } else { " disabled" };

    let content = format!(
        r#"<div class="container">{BACK_LINK}
<div class="detail">
<div class="thumb-wrap">{image}</div>
<div>
<h1>{name}</h1>
<p class="price">{price}</p>
<p class="muted">{description}</p>
<div class="badges"><span class="{badge_class}">{badge_label}</span>{category}</div>
<button class="button" type="button"{disabled}>Add to Cart</button>
</div>
</div>
</div>"#,
        image = render_image(product, "hero-image"),
        name = escape_html(&product.name),
        price = format_price(product),
        description = escape_html(&product.description),
    );

    render_layout(
        &PageMeta::section(&product.name, Some(product.description.clone())),
        &content,
        year,
    )
}

/// Renders the page served with a 404 status when a product id resolves to
/// nothing.
#[must_use]
pub fn render_not_found(year: i32) -> String {
    let content = format!(
        r#"<div class="container empty"><h1>Product Not Found</h1><p class="muted">The product you are looking for does not exist.</p>{BACK_LINK}</div>"#
    );
    render_layout(&PageMeta::new("Product Not Found", None), &content, year)
}
