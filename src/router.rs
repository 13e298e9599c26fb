use std::sync::Arc;

use axum::{http::StatusCode, middleware::from_fn_with_state, routing::get, Router};

use crate::{
    config::Configuration,
    db::ShopStore,
    metrics::ShopMetrics,
    middleware::refresh_on_scrape,
    routes::{export_metrics, healthz, hello_home, home, list_orders, list_users, readyz},
    service::AppState,
};

/// Path served by the metrics exporter and intercepted by the refresh
/// middleware.
pub const METRICS_PATH: &str = "/metrics";

/// Build the shop API router around the given store and metrics registry.
pub fn shop_api_router(
    configuration: Configuration,
    store: Arc<dyn ShopStore>,
    metrics: Arc<ShopMetrics>,
) -> Router {
    let state = AppState {
        configuration,
        store,
        metrics,
    };

    Router::new()
        .route("/", get(home))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/users", get(list_users))
        .route("/orders", get(list_orders))
        .route(METRICS_PATH, get(export_metrics))
        .method_not_allowed_fallback(|| async { (StatusCode::METHOD_NOT_ALLOWED, ()) })
        .layer(from_fn_with_state(state.clone(), refresh_on_scrape))
        .with_state(state)
}

/// Build the hello server router. It has no state and serves only the banner
/// and the two probes.
pub fn hello_router() -> Router {
    Router::new()
        .route("/", get(hello_home))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
