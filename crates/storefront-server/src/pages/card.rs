use storefront_core::Product;

use super::{escape_html, format_price, product_href, render_image};

/// Renders one product as a linked card: thumbnail, out-of-stock overlay,
/// name, optional category and price.
#[must_use]
pub fn render_card(product: &Product) -> String {
    let overlay = if product.in_stock {
        ""
    } else {
        r#"<div class="overlay"><span>Out of Stock</span></div>"#
    };
    let category = product.category_label().map_or_else(String::new, |c| {
        format!(r#"<p class="muted">{}</p>"#, escape_html(c))
    });

    format!(
        r#"<a class="card" href="{href}"><div class="thumb-wrap">{image}{overlay}</div><div class="card-body"><h3>{name}</h3>{category}<p class="price">{price}</p></div></a>"#,
        href = product_href(&product.id),
        image = render_image(product, "thumb"),
        name = escape_html(&product.name),
        price = format_price(product),
    )
}

/// Renders a grid of cards.
pub(super) fn render_grid(products: &[Product]) -> String {
    let cards: String = products.iter().map(render_card).collect();
    format!(r#"<div class="grid">{cards}</div>"#)
}
