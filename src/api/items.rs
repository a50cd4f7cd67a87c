//! Item search and item detail
//!
//! # API Endpoints
//! - `GET /users/{user_id}/items/search` - ids of a user's published
//!   items, paginated with `limit`/`offset`
//! - `GET /items/{item_id}` - full listing detail

use crate::api::client::{MeliClient, RawResponse};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Pagination for the item search endpoint. The dashboard syncs in pages
/// of 50; a probe normally asks for one page only.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOptions {
    pub limit: u32,
    pub offset: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Response of `/users/{user_id}/items/search`. `results` holds item ids
/// only; details need a second call per item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSearchResponse {
    #[serde(default)]
    pub seller_id: Option<String>,

    #[serde(default)]
    pub results: Vec<String>,

    #[serde(default)]
    pub paging: Paging,
}

impl ItemSearchResponse {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Id of the first returned item, if any. An empty result set means
    /// the caller skips the detail step entirely.
    pub fn first_item_id(&self) -> Option<&str> {
        self.results.first().map(|s| s.as_str())
    }
}

/// Listing detail. All fields optional; the remote shape is not ours to
/// enforce. These are the fields the dashboard persists per publication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub category_id: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub currency_id: Option<String>,

    #[serde(default)]
    pub available_quantity: Option<u64>,

    #[serde(default)]
    pub sold_quantity: Option<u64>,

    #[serde(default)]
    pub listing_type_id: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub permalink: Option<String>,

    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl Item {
    /// One-line summary for probe output.
    pub fn summary(&self) -> String {
        let title = self.title.as_deref().unwrap_or("<untitled>");
        let status = self.status.as_deref().unwrap_or("unknown");
        match (self.price, self.currency_id.as_deref()) {
            (Some(price), Some(currency)) => {
                format!("{title} | {price} {currency} ({status})")
            }
            (Some(price), None) => format!("{title} | {price} ({status})"),
            _ => format!("{title} ({status})"),
        }
    }
}

impl MeliClient {
    /// Search a user's published items.
    pub async fn search_user_items(
        &self,
        user_id: &str,
        options: &SearchOptions,
    ) -> Result<ItemSearchResponse> {
        self.get_with_query(&format!("/users/{user_id}/items/search"), options)
            .await
    }

    /// Same search, captured raw so the probe can log status/headers/body
    /// before deciding anything.
    pub async fn search_user_items_raw(
        &self,
        user_id: &str,
        options: &SearchOptions,
    ) -> Result<RawResponse> {
        self.get_raw(&format!(
            "/users/{user_id}/items/search?limit={}&offset={}",
            options.limit, options.offset
        ))
        .await
    }

    /// Fetch a listing parsed into [`Item`].
    pub async fn get_item(&self, item_id: &str) -> Result<Item> {
        self.get_json(&format!("/items/{item_id}")).await
    }
}
