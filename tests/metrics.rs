use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use setup::TestApp;
use shop_api::test::test_tracing::initialize_testing_tracing_subscriber;
use shop_api::{DbStats, MockShopStore};

mod setup;

/// Extract a sample value from the text exposition format, e.g. `3` from a
/// `users_total 3.0` line.
fn gauge_value(exposition: &str, name: &str) -> Option<f64> {
    exposition.lines().find_map(|line| {
        let (metric, value) = line.split_once(' ')?;
        if metric == name {
            value.parse().ok()
        } else {
            None
        }
    })
}

fn fixed_stats() -> DbStats {
    DbStats {
        users: 4,
        products: 2,
        orders: 5,
        average_order_price: 18.5,
        pending: 3,
        shipped: 2,
        cancelled: 0,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn scrape_returns_all_gauges_with_openmetrics_content_type() {
    initialize_testing_tracing_subscriber();

    let mut store = MockShopStore::new();
    store
        .expect_load_stats()
        .returning(|| Box::pin(async { Ok(fixed_stats()) }));
    let app = TestApp::spawn(Arc::new(store)).await;

    let response = app.get("/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .expect("Missing content type")
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(
        content_type,
        "application/openmetrics-text; version=1.0.0; charset=utf-8"
    );

    let body = response.text().await.expect("Failed to read response body");
    assert_eq!(gauge_value(&body, "users_total"), Some(4.0));
    assert_eq!(gauge_value(&body, "products_total"), Some(2.0));
    assert_eq!(gauge_value(&body, "orders_total"), Some(5.0));
    assert_eq!(gauge_value(&body, "average_order_price"), Some(18.5));
    assert_eq!(gauge_value(&body, "orders_pending"), Some(3.0));
    assert_eq!(gauge_value(&body, "orders_shipped"), Some(2.0));
    assert_eq!(gauge_value(&body, "orders_cancelled"), Some(0.0));
}

#[tokio::test(flavor = "multi_thread")]
async fn consecutive_scrapes_over_unchanged_data_are_identical() {
    initialize_testing_tracing_subscriber();

    let mut store = MockShopStore::new();
    store
        .expect_load_stats()
        .returning(|| Box::pin(async { Ok(fixed_stats()) }));
    let app = TestApp::spawn(Arc::new(store)).await;

    let first = app
        .get("/metrics")
        .await
        .text()
        .await
        .expect("Failed to read response body");
    let second = app
        .get("/metrics")
        .await
        .text()
        .await
        .expect("Failed to read response body");

    assert_eq!(first, second);
}

#[tokio::test(flavor = "multi_thread")]
async fn scrape_with_database_down_serves_zeroed_gauges() {
    initialize_testing_tracing_subscriber();

    let mut store = MockShopStore::new();
    store.expect_load_stats().returning(|| {
        Box::pin(async {
            Err(shop_api::ShopApiError::Db(sqlx::Error::from(
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
            )))
        })
    });
    let app = TestApp::spawn(Arc::new(store)).await;

    let response = app.get("/metrics").await;

    // The refresh failure is swallowed, the scrape itself stays 200 and the
    // gauges keep their last published values, zero on a fresh registry.
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("Failed to read response body");
    assert_eq!(gauge_value(&body, "users_total"), Some(0.0));
    assert_eq!(gauge_value(&body, "orders_pending"), Some(0.0));
}
