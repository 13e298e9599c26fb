use axum::body::Body;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Response, StatusCode};

use crate::error::ShopApiResult;
use crate::metrics::OPENMETRICS_CONTENT_TYPE;
use crate::service::AppState;

/// Serve the gauge registry in the OpenMetrics text format.
///
/// By the time this handler runs the registry has already been refreshed by
/// the scrape-interception middleware.
#[tracing::instrument(skip(state))]
pub async fn export_metrics(State(state): State<AppState>) -> ShopApiResult<Response<Body>> {
    let buffer = state.metrics.encode()?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, OPENMETRICS_CONTENT_TYPE)
        .body(Body::from(buffer))?;

    Ok(response)
}
