use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use storefront_client::CatalogClient;
use storefront_core::ProductQuery;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::{request_id, RequestId};
use crate::pages::{self, FEATURED_LIMIT};

/// Browser/proxy freshness for rendered pages, matching the upstream
/// response cache window.
const PAGE_CACHE_CONTROL: &str = "public, max-age=60";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: CatalogClient) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    upstream: &'static str,
}

/// Failures a page handler can surface to the client.
#[derive(Debug)]
pub enum PageError {
    NotFound,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => (
                StatusCode::NOT_FOUND,
                Html(pages::render_not_found(current_year())),
            )
                .into_response(),
        }
    }
}

fn current_year() -> i32 {
    Utc::now().year()
}

fn page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/products", get(catalog))
        .route("/products/{id}", get(product_detail))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static(PAGE_CACHE_CONTROL),
        ))
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(page_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn home(State(state): State<AppState>) -> Html<String> {
    let featured = state
        .catalog
        .list_products(&ProductQuery::with_limit(FEATURED_LIMIT))
        .await;
    Html(pages::render_home(&featured, current_year()))
}

async fn catalog(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Html<String> {
    let products = state.catalog.list_products(&query).await;
    let categories = state.catalog.list_categories().await;
    Html(pages::render_catalog(
        &products,
        &categories,
        query.category_filter(),
        current_year(),
    ))
}

async fn product_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let product = state.catalog.get_product(&id).await.ok_or_else(|| {
        tracing::debug!(product_id = %id, "product not found");
        PageError::NotFound
    })?;
    Ok(Html(pages::render_detail(&product, current_year())))
}

/// Reports liveness. The store keeps serving from fixtures when the API is
/// down, so the status stays `ok` and only `upstream` degrades.
async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let upstream = match state.catalog.probe().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "health check: catalog API unavailable");
            "unavailable"
        }
    };

    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            upstream,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
