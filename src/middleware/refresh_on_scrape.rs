use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{metrics, router::METRICS_PATH, service::AppState};

/// Reload the gauges from the database before a scrape is served.
///
/// Only requests to the metrics path trigger a refresh. Every other request
/// passes through untouched, which keeps `/healthz` and `/readyz` free of
/// database traffic.
#[tracing::instrument(skip(state, request, next))]
pub async fn refresh_on_scrape(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.uri().path() == METRICS_PATH {
        metrics::refresh(state.store.as_ref(), &state.metrics).await;
    }

    next.run(request).await
}
