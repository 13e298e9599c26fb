use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use shop_api::{Configuration, ShopApiService, ShopStore};

/// A running shop API instance bound to an ephemeral local port.
pub struct TestApp {
    pub address: SocketAddr,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service around the given store.
    ///
    /// The listener is bound before this returns, so requests can be sent
    /// immediately.
    pub async fn spawn(store: Arc<dyn ShopStore>) -> Self {
        let service =
            ShopApiService::with_store(Ipv4Addr::LOCALHOST, 0, Configuration::default(), store)
                .await
                .expect("Failed to start test service");
        let address = service.address().expect("Failed to get test service address");

        tokio::spawn(service.run());

        Self {
            address,
            client: reqwest::Client::new(),
        }
    }

    /// Send a GET request to the running app and return the response.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("http://{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
