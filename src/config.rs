//! Configuration module for the shop API.
//!
//! This module provides the database connection settings used by the richer
//! shop service. The hello server has no configuration beyond its bind
//! address.

use std::fmt;

use crate::cli::ShopApiArgs;

/// Default database host
pub const DEFAULT_DB_HOST: &str = "localhost";
/// Default database user
pub const DEFAULT_DB_USER: &str = "user";
/// Default database password
pub const DEFAULT_DB_PASS: &str = "password";
/// Default database name
pub const DEFAULT_DB_NAME: &str = "mydb";

/// Main configuration structure for the shop API.
#[derive(Clone)]
pub struct Configuration {
    /// Hostname of the database server
    pub db_host: String,
    /// User to authenticate with
    pub db_user: String,
    /// Password to authenticate with
    pub db_pass: String,
    /// Name of the database to query
    pub db_name: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            db_host: DEFAULT_DB_HOST.to_string(),
            db_user: DEFAULT_DB_USER.to_string(),
            db_pass: DEFAULT_DB_PASS.to_string(),
            db_name: DEFAULT_DB_NAME.to_string(),
        }
    }
}

impl From<&ShopApiArgs> for Configuration {
    fn from(args: &ShopApiArgs) -> Self {
        Configuration {
            db_host: args.db_host.clone(),
            db_user: args.db_user.clone(),
            db_pass: args.db_pass.clone(),
            db_name: args.db_name.clone(),
        }
    }
}

// The configuration is logged at startup, so the password must not appear in
// its Debug output.
impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("db_host", &self.db_host)
            .field("db_user", &self.db_user)
            .field("db_pass", &"<redacted>")
            .field("db_name", &self.db_name)
            .finish()
    }
}
