//! HTTP route handlers for the shop API and the hello server.

mod health_check;
mod listings;
mod metrics;

pub use health_check::{healthz, hello_home, home, readyz};
pub use listings::{list_orders, list_users};
pub use metrics::export_metrics;
