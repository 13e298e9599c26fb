//! Request middleware for the shop API.

mod refresh_on_scrape;

pub use refresh_on_scrape::refresh_on_scrape;
