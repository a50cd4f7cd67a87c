//! Sales Probe
//!
//! Interactive check of the orders search endpoint: given an access token
//! and a seller id, fetches the seller's orders from the trailing 60 days
//! and logs a summary per order. Shares the publications probe's
//! console + file logging.
//!
//! Usage:
//! ```bash
//! cargo run --features cli --bin sales-probe
//! ```

use meli_core::api::orders::OrdersSearchOptions;
use meli_core::logging::{init_dual_logging, DEFAULT_LOG_FILE};
use meli_core::{MeliClient, MeliConfig, MeliError};
use std::io::{self, Write};
use tracing::{error, info};

const SALES_WINDOW_DAYS: i64 = 60;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_dual_logging(DEFAULT_LOG_FILE)?;

    let config = MeliConfig::from_env();

    let access_token = prompt("Enter your MercadoLibre access token: ")?;
    let seller_id = prompt("Enter the MercadoLibre seller ID: ")?;
    if access_token.is_empty() || seller_id.is_empty() {
        error!("access token and seller id are both required");
        return Ok(());
    }

    let client = MeliClient::new(&config, access_token);

    if let Err(e) = fetch_sales(&client, &seller_id).await {
        report_failure(&e);
    }

    Ok(())
}

async fn fetch_sales(client: &MeliClient, seller_id: &str) -> meli_core::Result<()> {
    info!("=== Testing MercadoLibre Orders API ===");

    let options = OrdersSearchOptions::recent(seller_id, SALES_WINDOW_DAYS);
    info!(
        "Fetching orders since {} for seller {}...",
        options.date_created_from, seller_id
    );

    let response = client.search_orders(&options).await?;

    info!(
        "Found {} orders ({} in this page)",
        response.paging.total,
        response.results.len()
    );

    if response.results.is_empty() {
        info!("No orders found in the last {SALES_WINDOW_DAYS} days");
        return Ok(());
    }

    for order in &response.results {
        info!(
            "Order {} [{}] {} x{} total {} by {}",
            order.id,
            order.status.as_deref().unwrap_or("unknown"),
            order.first_item_title().unwrap_or("<no items>"),
            order.total_quantity(),
            order
                .total_amount
                .map(|a| a.to_string())
                .unwrap_or_else(|| "?".to_string()),
            order
                .buyer
                .as_ref()
                .and_then(|b| b.nickname.as_deref())
                .unwrap_or("<unknown buyer>")
        );
        if let Some(date) = order.date_created {
            info!("  created: {date}");
        }
    }

    Ok(())
}

fn report_failure(error: &MeliError) {
    match error {
        MeliError::Request(e) => error!("Error making request: {e}"),
        MeliError::JsonDecode { message, raw } => {
            error!("Error: could not parse JSON response ({message})");
            error!("Raw response: {raw}");
        }
        MeliError::ApiStatus { status, body } => {
            error!("Error fetching orders (status {status})");
            error!("{body}");
        }
        other => error!("Error: {other}"),
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
