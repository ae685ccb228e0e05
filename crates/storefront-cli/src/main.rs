mod export;

use std::path::PathBuf;
use std::time::Duration;

use chrono::Datelike;
use clap::{Parser, Subcommand};
use storefront_client::CatalogClient;
use storefront_core::ProductQuery;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Query the storefront catalog and export static pages")]
struct Cli {
    /// Base URL of the product API; overrides `STOREFRONT_API_URL`.
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products as JSON.
    Products {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one product as JSON.
    Product { id: String },
    /// List categories as JSON.
    Categories,
    /// Render the home, catalog and every product page to a directory.
    Export {
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let api_url = cli.api_url.as_deref().unwrap_or(&config.api_url);
    let client = CatalogClient::new(
        api_url,
        config.api_timeout_secs,
        &config.api_user_agent,
        Duration::from_secs(config.api_cache_ttl_secs),
    )?;

    match cli.command {
        Commands::Products {
            limit,
            page,
            category,
        } => {
            let query = ProductQuery {
                limit,
                page,
                category,
            };
            let products = client.list_products(&query).await;
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
        Commands::Product { id } => {
            let Some(product) = client.get_product(&id).await else {
                anyhow::bail!("product '{id}' not found");
            };
            println!("{}", serde_json::to_string_pretty(&product)?);
        }
        Commands::Categories => {
            let categories = client.list_categories().await;
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }
        Commands::Export { out } => {
            let year = chrono::Utc::now().year();
            let summary = export::export_site(&client, &out, year).await?;
            tracing::info!(
                out = %out.display(),
                pages = summary.pages_written,
                products = summary.products,
                "static export complete"
            );
        }
    }

    Ok(())
}
