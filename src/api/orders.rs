//! Orders (sales) search
//!
//! # API Endpoint
//! `GET /orders/search?seller={id}&order.date_created.from={iso8601}`
//!
//! The dashboard syncs the trailing 60 days of sales with this query; the
//! probe issues the same query once and prints what came back.

use crate::api::client::MeliClient;
use crate::error::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::items::Paging;

#[derive(Debug, Clone, Serialize)]
pub struct OrdersSearchOptions {
    pub seller: String,

    /// Lower bound on order creation date, RFC 3339.
    #[serde(rename = "order.date_created.from")]
    pub date_created_from: String,

    pub limit: u32,
    pub offset: u32,
}

impl OrdersSearchOptions {
    /// Orders created in the last `days` days for one seller.
    pub fn recent(seller: &str, days: i64) -> Self {
        let from: DateTime<Utc> = Utc::now() - Duration::days(days);
        Self {
            seller: seller.to_string(),
            date_created_from: from.to_rfc3339(),
            limit: 50,
            offset: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemDetail {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub item: Option<OrderItemDetail>,
    #[serde(default)]
    pub quantity: u64,
    #[serde(default)]
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buyer {
    #[serde(default)]
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,

    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub total_amount: Option<f64>,

    #[serde(default)]
    pub buyer: Option<Buyer>,

    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

impl Order {
    /// Total units across the order's line items.
    pub fn total_quantity(&self) -> u64 {
        self.order_items.iter().map(|i| i.quantity).sum()
    }

    /// Title of the first line item, if present.
    pub fn first_item_title(&self) -> Option<&str> {
        self.order_items
            .first()
            .and_then(|i| i.item.as_ref())
            .and_then(|item| item.title.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub results: Vec<Order>,

    #[serde(default)]
    pub paging: Paging,
}

impl MeliClient {
    /// Search a seller's orders.
    pub async fn search_orders(&self, options: &OrdersSearchOptions) -> Result<OrdersResponse> {
        self.get_with_query("/orders/search", options).await
    }
}
