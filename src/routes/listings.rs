use axum::extract::State;
use axum::Json;

use crate::db::{OrderRow, UserRow};
use crate::error::ShopApiResult;
use crate::metrics;
use crate::service::AppState;

/// List up to 10 users as a JSON array of positional rows.
///
/// A successful listing also refreshes the gauges. When the query fails the
/// refresh is skipped and the handler replies with the DB error response.
#[tracing::instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> ShopApiResult<Json<Vec<UserRow>>> {
    let rows = state
        .store
        .list_users()
        .await
        .inspect_err(|e| tracing::error!("Failed to list users: {}", e))?;

    metrics::refresh(state.store.as_ref(), &state.metrics).await;

    Ok(Json(rows))
}

/// List up to 10 orders as a JSON array of positional rows.
#[tracing::instrument(skip(state))]
pub async fn list_orders(State(state): State<AppState>) -> ShopApiResult<Json<Vec<OrderRow>>> {
    let rows = state
        .store
        .list_orders()
        .await
        .inspect_err(|e| tracing::error!("Failed to list orders: {}", e))?;

    metrics::refresh(state.store.as_ref(), &state.metrics).await;

    Ok(Json(rows))
}
