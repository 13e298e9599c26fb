//! Database access for the shop API.
//!
//! The API is a read-only view over an externally owned schema with three
//! relations: `users(id, name, email, country, city)`,
//! `products(id, price, ...)` and `orders(id, user_id, product_id, quantity,
//! status)`. Every operation opens its own connection, runs its queries and
//! drops the connection again, so a failed call never poisons later ones.

use futures::future::BoxFuture;
use futures::FutureExt;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;

use crate::config::Configuration;
use crate::error::ShopApiResult;

/// A row from the users relation: (id, name, email, country, city).
pub type UserRow = (i32, String, String, String, String);

/// A row from the orders relation: (id, user_id, product_id, quantity, status).
pub type OrderRow = (i32, i32, i32, i32, String);

const LIST_USERS: &str = "SELECT id, name, email, country, city FROM users LIMIT 10";
const LIST_ORDERS: &str = "SELECT id, user_id, product_id, quantity, status FROM orders LIMIT 10";

const COUNT_USERS: &str = "SELECT COUNT(*) FROM users";
const COUNT_PRODUCTS: &str = "SELECT COUNT(*) FROM products";
const COUNT_ORDERS: &str = "SELECT COUNT(*) FROM orders";
const AVG_ORDER_PRICE: &str = "SELECT CAST(AVG(p.price * o.quantity) AS DOUBLE PRECISION) \
     FROM orders o JOIN products p ON o.product_id = p.id";
const ORDER_STATUS_COUNTS: &str = "SELECT status, COUNT(*) FROM orders GROUP BY status";

const STATUS_PENDING: &str = "pending";
const STATUS_SHIPPED: &str = "shipped";
const STATUS_CANCELLED: &str = "cancelled";

/// Aggregates produced by one refresh pass over the database.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DbStats {
    /// Number of rows in the users relation
    pub users: i64,
    /// Number of rows in the products relation
    pub products: i64,
    /// Number of rows in the orders relation
    pub orders: i64,
    /// Average of (unit price x quantity) across all orders, 0 when there are
    /// no orders
    pub average_order_price: f64,
    /// Number of orders with status "pending"
    pub pending: i64,
    /// Number of orders with status "shipped"
    pub shipped: i64,
    /// Number of orders with status "cancelled"
    pub cancelled: i64,
}

impl DbStats {
    /// Assemble stats from raw query results.
    ///
    /// A NULL average collapses to 0 and status keys other than the three
    /// recognized ones are ignored. Recognized keys missing from
    /// `status_counts` default to 0.
    pub fn from_aggregates(
        users: i64,
        products: i64,
        orders: i64,
        average_order_price: Option<f64>,
        status_counts: &[(String, i64)],
    ) -> Self {
        let count_for = |status: &str| {
            status_counts
                .iter()
                .find(|(key, _)| key == status)
                .map(|(_, count)| *count)
                .unwrap_or(0)
        };

        DbStats {
            users,
            products,
            orders,
            average_order_price: average_order_price.unwrap_or(0.0),
            pending: count_for(STATUS_PENDING),
            shipped: count_for(STATUS_SHIPPED),
            cancelled: count_for(STATUS_CANCELLED),
        }
    }
}

/// A trait for reading the shop relations.
///
/// Primarily used to allow the store to be mocked in tests.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait ShopStore: std::fmt::Debug + Send + Sync {
    /// Fetch up to 10 rows from the users relation, in no particular order.
    fn list_users(&self) -> BoxFuture<'static, ShopApiResult<Vec<UserRow>>>;

    /// Fetch up to 10 rows from the orders relation, in no particular order.
    fn list_orders(&self) -> BoxFuture<'static, ShopApiResult<Vec<OrderRow>>>;

    /// Run the five aggregate queries on a single connection and combine the
    /// results into a [`DbStats`].
    fn load_stats(&self) -> BoxFuture<'static, ShopApiResult<DbStats>>;
}

/// A [`ShopStore`] backed by a PostgreSQL database.
#[derive(Debug, Clone)]
pub struct PgShopStore {
    options: PgConnectOptions,
}

impl PgShopStore {
    /// Create a store that will connect with the given configuration.
    pub fn new(configuration: &Configuration) -> Self {
        let options = PgConnectOptions::new()
            .host(&configuration.db_host)
            .username(&configuration.db_user)
            .password(&configuration.db_pass)
            .database(&configuration.db_name);

        PgShopStore { options }
    }
}

impl ShopStore for PgShopStore {
    fn list_users(&self) -> BoxFuture<'static, ShopApiResult<Vec<UserRow>>> {
        let options = self.options.clone();
        async move {
            let mut conn = options.connect().await?;
            let rows = sqlx::query_as::<_, UserRow>(LIST_USERS)
                .fetch_all(&mut conn)
                .await?;
            Ok(rows)
        }
        .boxed()
    }

    fn list_orders(&self) -> BoxFuture<'static, ShopApiResult<Vec<OrderRow>>> {
        let options = self.options.clone();
        async move {
            let mut conn = options.connect().await?;
            let rows = sqlx::query_as::<_, OrderRow>(LIST_ORDERS)
                .fetch_all(&mut conn)
                .await?;
            Ok(rows)
        }
        .boxed()
    }

    fn load_stats(&self) -> BoxFuture<'static, ShopApiResult<DbStats>> {
        let options = self.options.clone();
        async move {
            let mut conn = options.connect().await?;

            let users = sqlx::query_scalar::<_, i64>(COUNT_USERS)
                .fetch_one(&mut conn)
                .await?;
            let products = sqlx::query_scalar::<_, i64>(COUNT_PRODUCTS)
                .fetch_one(&mut conn)
                .await?;
            let orders = sqlx::query_scalar::<_, i64>(COUNT_ORDERS)
                .fetch_one(&mut conn)
                .await?;
            let average_order_price = sqlx::query_scalar::<_, Option<f64>>(AVG_ORDER_PRICE)
                .fetch_one(&mut conn)
                .await?;
            let status_counts = sqlx::query_as::<_, (String, i64)>(ORDER_STATUS_COUNTS)
                .fetch_all(&mut conn)
                .await?;

            Ok(DbStats::from_aggregates(
                users,
                products,
                orders,
                average_order_price,
                &status_counts,
            ))
        }
        .boxed()
    }
}
