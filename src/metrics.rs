//! Prometheus gauges derived from the shop database.
//!
//! The registry and its gauges live behind a single [`std::sync::RwLock`] so
//! that a refresh publishes all seven values as one unit. A scrape that runs
//! concurrently with a refresh either sees the complete previous snapshot or
//! the complete new one, never a mix.

use std::sync::atomic::AtomicU64;
use std::sync::{PoisonError, RwLock};

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;

use crate::db::{DbStats, ShopStore};

/// Content-Type for Prometheus/OpenMetrics text format responses.
pub const OPENMETRICS_CONTENT_TYPE: &str =
    "application/openmetrics-text; version=1.0.0; charset=utf-8";

/// Registry of the seven shop gauges.
pub struct ShopMetrics {
    inner: RwLock<Inner>,
}

struct Inner {
    registry: Registry,
    gauges: ShopGauges,
}

struct ShopGauges {
    users_total: Gauge<f64, AtomicU64>,
    products_total: Gauge<f64, AtomicU64>,
    orders_total: Gauge<f64, AtomicU64>,
    average_order_price: Gauge<f64, AtomicU64>,
    orders_pending: Gauge<f64, AtomicU64>,
    orders_shipped: Gauge<f64, AtomicU64>,
    orders_cancelled: Gauge<f64, AtomicU64>,
}

impl ShopGauges {
    fn new() -> Self {
        ShopGauges {
            users_total: Gauge::default(),
            products_total: Gauge::default(),
            orders_total: Gauge::default(),
            average_order_price: Gauge::default(),
            orders_pending: Gauge::default(),
            orders_shipped: Gauge::default(),
            orders_cancelled: Gauge::default(),
        }
    }

    fn register(&self, registry: &mut Registry) {
        registry.register(
            "users_total",
            "Number of rows in the users table",
            self.users_total.clone(),
        );
        registry.register(
            "products_total",
            "Number of rows in the products table",
            self.products_total.clone(),
        );
        registry.register(
            "orders_total",
            "Number of rows in the orders table",
            self.orders_total.clone(),
        );
        registry.register(
            "average_order_price",
            "Average of unit price times quantity across all orders",
            self.average_order_price.clone(),
        );
        registry.register(
            "orders_pending",
            "Number of orders with status pending",
            self.orders_pending.clone(),
        );
        registry.register(
            "orders_shipped",
            "Number of orders with status shipped",
            self.orders_shipped.clone(),
        );
        registry.register(
            "orders_cancelled",
            "Number of orders with status cancelled",
            self.orders_cancelled.clone(),
        );
    }

    fn set_all(&self, stats: DbStats) {
        self.users_total.set(stats.users as f64);
        self.products_total.set(stats.products as f64);
        self.orders_total.set(stats.orders as f64);
        self.average_order_price.set(stats.average_order_price);
        self.orders_pending.set(stats.pending as f64);
        self.orders_shipped.set(stats.shipped as f64);
        self.orders_cancelled.set(stats.cancelled as f64);
    }
}

impl ShopMetrics {
    /// Create a registry with all gauges registered and set to 0.
    pub fn new() -> Self {
        let mut registry = Registry::default();
        let gauges = ShopGauges::new();
        gauges.register(&mut registry);

        ShopMetrics {
            inner: RwLock::new(Inner { registry, gauges }),
        }
    }

    /// Publish a complete set of gauge values.
    ///
    /// Holds the write lock while all seven gauges are set, so concurrent
    /// encodes cannot observe a partially applied snapshot.
    pub fn publish(&self, stats: DbStats) {
        let inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.gauges.set_all(stats);
    }

    /// Encode the registry into the OpenMetrics text format.
    pub fn encode(&self) -> Result<String, std::fmt::Error> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut buffer = String::new();
        encode(&mut buffer, &inner.registry)?;
        Ok(buffer)
    }
}

impl Default for ShopMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Reload all gauge values from the database.
///
/// The stats are computed into a buffer first and only published once every
/// query has succeeded. A failed pass is logged and swallowed, leaving the
/// previously published values in place. Callers never need to handle refresh
/// errors.
pub async fn refresh(store: &dyn ShopStore, metrics: &ShopMetrics) {
    match store.load_stats().await {
        Ok(stats) => metrics.publish(stats),
        Err(e) => tracing::error!("Failed to refresh shop gauges: {}", e),
    }
}
