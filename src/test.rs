//! Test support for the shop services.
//!
//! Compiled only with the `test-utils` feature. Everything in here is shared
//! between the unit tests and the integration tests under `tests/`.

pub mod test_tracing;
