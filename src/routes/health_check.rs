use axum::http::StatusCode;

/// Body served by the shop API on `/`.
pub const SHOP_API_HOME_BODY: &str = "Shop API";

/// Body served by the hello server on `/`.
pub const HELLO_HOME_BODY: &str = "DevOps CI/CD Pipeline";

#[tracing::instrument]
pub async fn home() -> &'static str {
    SHOP_API_HOME_BODY
}

#[tracing::instrument]
pub async fn hello_home() -> &'static str {
    HELLO_HOME_BODY
}

// Liveness and readiness probes never touch the database. A slow or
// unreachable database must not get the process restarted or pulled out of
// rotation.

#[tracing::instrument]
pub async fn healthz() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[tracing::instrument]
pub async fn readyz() -> StatusCode {
    StatusCode::NO_CONTENT
}
