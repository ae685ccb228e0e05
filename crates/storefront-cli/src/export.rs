//! Static pre-rendering of the storefront pages.

use std::path::{Path, PathBuf};

use anyhow::Context;
use storefront_client::CatalogClient;
use storefront_core::ProductQuery;
use storefront_server::pages;

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ExportSummary {
    pub pages_written: usize,
    pub products: usize,
    pub skipped: usize,
}

/// Writes `index.html`, `products/index.html` and
/// `products/{id}/index.html` for every product in the unbounded listing.
pub(crate) async fn export_site(
    client: &CatalogClient,
    out: &Path,
    year: i32,
) -> anyhow::Result<ExportSummary> {
    let mut summary = ExportSummary::default();

    let featured = client
        .list_products(&ProductQuery::with_limit(pages::FEATURED_LIMIT))
        .await;
    write_page(out, &pages::render_home(&featured, year)).await?;
    summary.pages_written += 1;

    let products = client.list_products(&ProductQuery::default()).await;
    let categories = client.list_categories().await;
    write_page(
        &out.join("products"),
        &pages::render_catalog(&products, &categories, None, year),
    )
    .await?;
    summary.pages_written += 1;

    for product in &products {
        let Some(dir) = product_dir(out, &product.id) else {
            tracing::warn!(product_id = %product.id, "skipping product with unsafe id");
            summary.skipped += 1;
            continue;
        };
        write_page(&dir, &pages::render_detail(product, year)).await?;
        tracing::debug!(product_id = %product.id, dir = %dir.display(), "rendered product page");
        summary.pages_written += 1;
    }
    summary.products = products.len();

    Ok(summary)
}

/// Directory a static file server resolves for the product's link once it
/// percent-decodes the request path: `sku/42` lands in `products/sku/42/`.
///
/// Returns `None` for ids with an empty, `.` or `..` component, or a
/// backslash, which would resolve outside the product's own directory.
fn product_dir(out: &Path, id: &str) -> Option<PathBuf> {
    let mut dir = out.join("products");
    for component in id.split('/') {
        if matches!(component, "" | "." | "..") || component.contains('\\') {
            return None;
        }
        dir.push(component);
    }
    Some(dir)
}

async fn write_page(dir: &Path, html: &str) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join("index.html");
    tokio::fs::write(&path, html)
        .await
        .with_context(|| format!("writing {}", path.display()))
}
