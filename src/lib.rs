//! MercadoLibre API client and diagnostic probe harness
//!
//! This crate wraps the handful of MercadoLibre endpoints our integration
//! touches (OAuth token exchange, item search/detail, orders search) and
//! backs the interactive probe binaries used to exercise them by hand:
//!
//! - `token-probe` - exchange an authorization code for tokens
//! - `publications-probe` - list a user's items and fetch the first detail
//! - `sales-probe` - list recent orders for a seller
//!
//! All probes are single-shot and sequential. Errors are reported to the
//! console (and log file, where the probe keeps one); nothing retries.

// Core modules
pub mod error;
pub mod config;
pub mod api;
pub mod logging;

// Re-export commonly used types for convenience
pub use error::{MeliError, Result};
pub use config::MeliConfig;
pub use api::client::MeliClient;
