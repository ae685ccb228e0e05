//! Server-rendered storefront over the catalog data-access layer.

pub mod middleware;
pub mod pages;
pub mod routes;

pub use routes::{build_app, AppState};
