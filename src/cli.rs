use std::net::{AddrParseError, IpAddr};
use std::str::FromStr;

/// Command line arguments and environment variables for configuring the shop API
#[derive(clap::Parser, Debug)]
pub struct ShopApiArgs {
    /// The address to bind to (e.g., 0.0.0.0).
    #[arg(short, long, env = "SHOP_API_ADDRESS", default_value = "0.0.0.0")]
    pub address: String,

    /// The port to bind to (e.g., 5000).
    #[arg(short, long, env = "SHOP_API_PORT", default_value = "5000")]
    pub port: u16,

    /// Hostname of the database server.
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// User to authenticate with the database.
    #[arg(long, env = "DB_USER", default_value = "user")]
    pub db_user: String,

    /// Password to authenticate with the database.
    #[arg(long, env = "DB_PASS", default_value = "password")]
    pub db_pass: String,

    /// Name of the database to query.
    #[arg(long, env = "DB_NAME", default_value = "mydb")]
    pub db_name: String,
}

impl ShopApiArgs {
    /// Parse the configured bind address into an [`IpAddr`].
    pub fn ip_addr(&self) -> Result<IpAddr, AddrParseError> {
        IpAddr::from_str(&self.address)
    }
}

/// Command line arguments and environment variables for configuring the hello server
#[derive(clap::Parser, Debug)]
pub struct HelloServerArgs {
    /// The address to bind to (e.g., 0.0.0.0).
    #[arg(short, long, env = "HELLO_SERVER_ADDRESS", default_value = "0.0.0.0")]
    pub address: String,

    /// The port to bind to (e.g., 5000).
    #[arg(short, long, env = "HELLO_SERVER_PORT", default_value = "5000")]
    pub port: u16,
}

impl HelloServerArgs {
    /// Parse the configured bind address into an [`IpAddr`].
    pub fn ip_addr(&self) -> Result<IpAddr, AddrParseError> {
        IpAddr::from_str(&self.address)
    }
}
