//! Integration tests for `CatalogClient` using wiremock HTTP mocks.
//!
//! Each test stands up a local mock of the product API. Failure scenarios
//! check that every operation resolves from the fixture store instead of
//! surfacing an error.

use std::time::Duration;

use rust_decimal::Decimal;
use serde_json::json;
use storefront_client::{CatalogClient, CatalogError};
use storefront_core::{FixtureStore, ProductQuery};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client with caching disabled so each call reaches the mock server.
fn test_client(base_url: &str) -> CatalogClient {
    CatalogClient::new(base_url, 5, "storefront-test/0.1", Duration::ZERO)
        .expect("client construction should not fail")
}

fn product_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Remote Product {id}"),
        "description": "Served by the API",
        "price": 10.0,
        "category": "Remote",
        "inStock": true
    })
}

fn ids(products: &[storefront_core::Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

async fn failing_server(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

// ---------------------------------------------------------------------------
// list_products: success paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_products_truncates_bare_array_to_limit() {
    let server = MockServer::start().await;
    let items: Vec<_> = (1..=10).map(|i| product_json(&i.to_string())).collect();

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("limit", "3"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(items)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client.list_products(&ProductQuery::with_limit(3)).await;

    assert_eq!(ids(&products), vec!["1", "2", "3"]);
    assert_eq!(products[0].name, "Remote Product 1");
}

#[tokio::test]
async fn list_products_returns_bare_array_untouched_without_limit() {
    let server = MockServer::start().await;
    let items: Vec<_> = (1..=8).map(|i| product_json(&i.to_string())).collect();

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param_is_missing("limit"))
        .and(query_param_is_missing("category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(items)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client.list_products(&ProductQuery::default()).await;

    assert_eq!(products.len(), 8);
}

#[tokio::test]
async fn list_products_trusts_paginated_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("limit", "1"))
        .and(query_param("page", "2"))
        .and(query_param("category", "Remote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [product_json("11"), product_json("12")],
            "total": 20,
            "page": 2,
            "limit": 1
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = ProductQuery {
        limit: Some(1),
        page: Some(2),
        category: Some("Remote".to_string()),
    };
    let products = client.list_products(&query).await;

    // The server is trusted to have applied the limit, so nothing is trimmed.
    assert_eq!(ids(&products), vec!["11", "12"]);
}

#[tokio::test]
async fn list_products_returns_empty_remote_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client.list_products(&ProductQuery::default()).await.is_empty());
}

// ---------------------------------------------------------------------------
// list_products: fallback paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_products_falls_back_to_fixtures_on_server_error() {
    let server = failing_server(500).await;
    let client = test_client(&server.uri());

    let products = client.list_products(&ProductQuery::with_limit(4)).await;

    assert_eq!(ids(&products), vec!["1", "2", "3", "4"]);
}

#[tokio::test]
async fn list_products_fallback_filters_by_category() {
    let server = failing_server(503).await;
    let client = test_client(&server.uri());

    let products = client
        .list_products(&ProductQuery::with_category("Home"))
        .await;

    assert_eq!(ids(&products), vec!["5", "6"]);
}

#[tokio::test]
async fn list_products_fallback_ignores_page() {
    let server = failing_server(500).await;
    let client = test_client(&server.uri());

    let query = ProductQuery {
        page: Some(5),
        ..ProductQuery::default()
    };
    assert_eq!(client.list_products(&query).await.len(), 6);
}

#[tokio::test]
async fn list_products_falls_back_on_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client.list_products(&ProductQuery::with_limit(2)).await;

    assert_eq!(ids(&products), vec!["1", "2"]);
}

#[tokio::test]
async fn list_products_falls_back_on_object_without_products() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert_eq!(client.list_products(&ProductQuery::default()).await.len(), 6);
}

#[tokio::test]
async fn list_products_falls_back_on_negative_price() {
    let server = MockServer::start().await;
    let mut bad = product_json("1");
    bad["price"] = json!(-5.0);

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([bad])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client.list_products(&ProductQuery::default()).await;

    assert_eq!(products[0].name, "Wireless Headphones");
}

#[tokio::test]
async fn list_products_falls_back_when_host_unreachable() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = test_client(&uri);
    let products = client.list_products(&ProductQuery::with_limit(4)).await;

    assert_eq!(ids(&products), vec!["1", "2", "3", "4"]);
}

#[tokio::test]
async fn list_products_fallback_uses_custom_fixture_store() {
    let server = failing_server(500).await;
    let client = test_client(&server.uri()).with_fixtures(FixtureStore::new(Vec::new()));

    assert!(client.list_products(&ProductQuery::default()).await.is_empty());
}

// ---------------------------------------------------------------------------
// get_product
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_product_returns_remote_product() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json("42")))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let product = client.get_product("42").await.expect("remote product");

    assert_eq!(product.id, "42");
    assert_eq!(product.price, Decimal::new(10, 0));
}

#[tokio::test]
async fn get_product_falls_back_on_not_found() {
    let server = failing_server(404).await;
    let client = test_client(&server.uri());

    let product = client.get_product("4").await.expect("fixture product");

    assert_eq!(product.name, "Running Shoes");
    assert!(!product.in_stock);
}

#[tokio::test]
async fn get_product_unknown_id_is_none_on_fallback() {
    let server = failing_server(500).await;
    let client = test_client(&server.uri());

    assert!(client.get_product("99").await.is_none());
    assert!(client.get_product("99").await.is_none());
}

#[tokio::test]
async fn fetch_product_reports_not_found_distinctly() {
    let server = failing_server(404).await;
    let client = test_client(&server.uri());

    let err = client.fetch_product("4").await.unwrap_err();
    assert!(err.is_not_found(), "expected NotFound, got: {err:?}");

    let server = failing_server(502).await;
    let client = test_client(&server.uri());
    let err = client.fetch_product("4").await.unwrap_err();
    assert!(
        matches!(err, CatalogError::UnexpectedStatus { status: 502, .. }),
        "expected UnexpectedStatus(502), got: {err:?}"
    );
}

// ---------------------------------------------------------------------------
// list_categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_categories_returns_remote_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Toys", "Garden"])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert_eq!(client.list_categories().await, vec!["Toys", "Garden"]);
}

#[tokio::test]
async fn list_categories_falls_back_to_fixture_categories() {
    let server = failing_server(500).await;
    let client = test_client(&server.uri());

    assert_eq!(
        client.list_categories().await,
        vec!["Electronics", "Accessories", "Footwear", "Home"]
    );
}

#[tokio::test]
async fn list_categories_falls_back_on_wrong_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "categories": [] })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert_eq!(client.list_categories().await.len(), 4);
}

// ---------------------------------------------------------------------------
// response cache
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fresh_responses_are_served_from_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Toys"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri(), 5, "storefront-test/0.1", Duration::from_secs(60))
        .expect("client");

    assert_eq!(client.list_categories().await, vec!["Toys"]);
    assert_eq!(client.list_categories().await, vec!["Toys"]);
}

#[tokio::test]
async fn zero_ttl_sends_every_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Toys"])))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client.list_categories().await;
    client.list_categories().await;
}

#[tokio::test]
async fn failures_are_not_cached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(2)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri(), 5, "storefront-test/0.1", Duration::from_secs(60))
        .expect("client");

    client.list_categories().await;
    client.list_categories().await;
}

#[tokio::test]
async fn rejected_products_are_not_cached() {
    let server = MockServer::start().await;

    let mut product = product_json("7");
    product["price"] = json!(-1);
    Mock::given(method("GET"))
        .and(path("/api/products/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product))
        .expect(2)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri(), 5, "storefront-test/0.1", Duration::from_secs(60))
        .expect("client");

    assert!(client.get_product("7").await.is_none());
    let err = client.fetch_product("7").await.expect_err("negative price");
    assert!(matches!(err, CatalogError::InvalidProduct { .. }));
}

#[tokio::test]
async fn rejected_product_lists_are_not_cached() {
    let server = MockServer::start().await;

    let mut product = product_json("7");
    product["price"] = json!(-1);
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([product])))
        .expect(2)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri(), 5, "storefront-test/0.1", Duration::from_secs(60))
        .expect("client");

    let query = ProductQuery::default();
    assert_eq!(client.list_products(&query).await.len(), 6);
    assert_eq!(client.list_products(&query).await.len(), 6);
}

#[tokio::test]
async fn probe_bypasses_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Toys"])))
        .expect(2)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri(), 5, "storefront-test/0.1", Duration::from_secs(60))
        .expect("client");

    client.list_categories().await;
    client.probe().await.expect("probe should succeed");
}

#[tokio::test]
async fn probe_reports_outage() {
    let server = failing_server(503).await;
    let client = test_client(&server.uri());

    assert!(client.probe().await.is_err());
}
