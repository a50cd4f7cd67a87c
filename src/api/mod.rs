//! MercadoLibre API client implementation
//!
//! Thin wrappers over the endpoints the harness probes:
//! authentication (`/oauth/token`), user info (`/users/me`), item
//! search/detail (`/users/{id}/items/search`, `/items/{id}`) and orders
//! search (`/orders/search`). Request/response shapes are whatever the
//! remote API defines; structs here are permissive on purpose.

pub mod auth;
pub mod client;
pub mod user;
pub mod items;
pub mod orders;

// Re-export commonly used types
pub use auth::{OAuthState, TokenRequest, TokenResponse};
pub use client::MeliClient;
pub use user::UserInformation;
pub use items::{Item, ItemSearchResponse, SearchOptions};
pub use orders::{Order, OrdersResponse, OrdersSearchOptions};
