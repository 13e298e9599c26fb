use clap::Parser;
use shop_api::{tracing::initialize_tracing_subscriber, Configuration, ShopApiArgs, ShopApiService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    initialize_tracing_subscriber("info");

    let args = ShopApiArgs::parse();
    let address = args.ip_addr()?;
    let configuration = Configuration::from(&args);

    let service = ShopApiService::new(address, args.port, configuration).await?;
    service.run().await?;

    Ok(())
}
