//! Data-access layer for the remote product API.
//!
//! [`CatalogClient`] exposes strict `fetch_*` calls that surface
//! [`CatalogError`], and fallback operations (`list_products`,
//! `get_product`, `list_categories`) that never fail: any upstream failure
//! is answered from the fixture store.

mod cache;
pub mod client;
pub mod error;

pub use client::CatalogClient;
pub use error::CatalogError;
