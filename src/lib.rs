#![deny(missing_docs)]
//! # Shop demo services
//!
//! Two small HTTP services used as deploy targets for CI/CD pipeline demos:
//! a hello server that only serves a banner and liveness probes, and a shop
//! API that additionally exposes database-derived Prometheus gauges and
//! read-only listings of the users and orders relations.

mod cli;
mod config;
mod db;
mod error;
mod metrics;
mod middleware;
mod router;
mod routes;
mod service;
#[cfg(feature = "test-utils")]
pub mod test;
pub mod tracing;

pub use cli::{HelloServerArgs, ShopApiArgs};
pub use config::Configuration;
#[cfg(any(test, feature = "test-utils"))]
pub use db::MockShopStore;
pub use db::{DbStats, OrderRow, PgShopStore, ShopStore, UserRow};
pub use error::{ErrorResponse, ShopApiError, ShopApiResult};
pub use metrics::ShopMetrics;
pub use router::{hello_router, shop_api_router};
pub use service::{AppState, ShopApiService};
