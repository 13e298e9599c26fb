use std::net::SocketAddr;

use clap::Parser;
use shop_api::{hello_router, tracing::initialize_tracing_subscriber, HelloServerArgs};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    initialize_tracing_subscriber("info");

    let args = HelloServerArgs::parse();
    let address = SocketAddr::new(args.ip_addr()?, args.port);

    let listener = TcpListener::bind(address).await?;
    tracing::info!("Starting hello server on {}", address);

    axum::serve(listener, hello_router()).await?;

    Ok(())
}
