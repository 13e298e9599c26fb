//! HTTP service for the shop API

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::{
    config::Configuration,
    db::{PgShopStore, ShopStore},
    error::ShopApiResult,
    metrics::ShopMetrics,
    router::shop_api_router,
    ShopApiError,
};

/// Core shop API service
#[derive(Debug)]
pub struct ShopApiService {
    listener: TcpListener,
    router: Router,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection settings
    pub configuration: Configuration,
    /// Store used to query the shop relations
    pub store: Arc<dyn ShopStore>,
    /// Gauge registry served on the metrics path
    pub metrics: Arc<ShopMetrics>,
}

impl ShopApiService {
    /// Create a new service instance bound to the given address and port,
    /// backed by a PostgreSQL store.
    pub async fn new(
        address: impl Into<IpAddr>,
        port: u16,
        configuration: Configuration,
    ) -> ShopApiResult<Self> {
        let store = Arc::new(PgShopStore::new(&configuration));
        Self::with_store(address, port, configuration, store).await
    }

    /// Create a new service instance around the given store.
    ///
    /// No connection is made at startup. The store is only hit when a request
    /// needs it, so the service comes up cleanly with the database down.
    pub async fn with_store(
        address: impl Into<IpAddr>,
        port: u16,
        configuration: Configuration,
        store: Arc<dyn ShopStore>,
    ) -> ShopApiResult<Self> {
        tracing::info!("Configuration: {:?}", configuration);

        let metrics = Arc::new(ShopMetrics::new());
        let router = shop_api_router(configuration, store, metrics);
        let address = SocketAddr::new(address.into(), port);
        let listener = TcpListener::bind(address).await?;

        Ok(ShopApiService { router, listener })
    }

    /// Get the socket address the service is configured to use
    pub fn address(&self) -> ShopApiResult<SocketAddr> {
        self.listener.local_addr().map_err(ShopApiError::Io)
    }

    /// Start the HTTP server and run until terminated
    pub async fn run(self) -> ShopApiResult<()> {
        let address = self.address()?;

        tracing::info!("Starting server on {}", address);
        axum::serve(self.listener, self.router)
            .await
            .inspect_err(|e| tracing::error!("Server on {} stopped: {}", address, e))?;

        Ok(())
    }
}
