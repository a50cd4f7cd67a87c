//! Publications Probe
//!
//! Interactive check of the item-listing endpoints: given an access token
//! and a user id, fetches the user's item search page, then the detail of
//! the first returned item. Every step is logged to the console and to
//! `mercadolibre_api.log`.
//!
//! Usage:
//! ```bash
//! cargo run --features cli --bin publications-probe
//! ```

use meli_core::api::items::{Item, ItemSearchResponse, SearchOptions};
use meli_core::logging::{init_dual_logging, DEFAULT_LOG_FILE};
use meli_core::{MeliClient, MeliConfig, MeliError};
use std::io::{self, Write};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_dual_logging(DEFAULT_LOG_FILE)?;

    let config = MeliConfig::from_env();

    let access_token = prompt("Enter your MercadoLibre access token: ")?;
    let user_id = prompt("Enter the MercadoLibre user ID: ")?;
    if access_token.is_empty() || user_id.is_empty() {
        error!("access token and user id are both required");
        return Ok(());
    }

    let client = MeliClient::new(&config, access_token);

    if let Err(e) = fetch_publications(&client, &user_id).await {
        report_failure(&e);
    }

    Ok(())
}

async fn fetch_publications(client: &MeliClient, user_id: &str) -> meli_core::Result<()> {
    info!("=== Testing MercadoLibre Publications API ===");

    // Step 1: the user's item search page.
    info!("1. Fetching user's items...");
    let response = client
        .search_user_items_raw(user_id, &SearchOptions::default())
        .await?;

    info!("Search Response Status Code: {}", response.status);
    info!("Search Response Headers:");
    for (name, value) in &response.headers {
        info!("{name}: {value}");
    }

    if !response.is_success() {
        error!("Error fetching items");
        error!("{}", response.body);
        return Ok(());
    }

    let search: ItemSearchResponse = response.json()?;
    info!("Search Results:");
    log_pretty(&response.body);

    // Step 2: detail of the first item, skipped entirely when the search
    // came back empty.
    let Some(item_id) = search.first_item_id() else {
        info!("No items found for user");
        return Ok(());
    };

    info!("2. Fetching details for first item...");
    let detail = client.get_raw(&format!("/items/{item_id}")).await?;
    info!("Item Response Status Code: {}", detail.status);

    if !detail.is_success() {
        error!("Error fetching item details");
        error!("{}", detail.body);
        return Ok(());
    }

    info!("Item Details:");
    log_pretty(&detail.body);

    let item: Item = detail.json()?;
    info!("Item summary: {}", item.summary());

    Ok(())
}

fn log_pretty(body: &str) {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => info!("{value:#}"),
        Err(_) => info!("{body}"),
    }
}

fn report_failure(error: &MeliError) {
    match error {
        MeliError::Request(e) => error!("Error making request: {e}"),
        MeliError::JsonDecode { message, raw } => {
            error!("Error: could not parse JSON response ({message})");
            error!("Raw response: {raw}");
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
