//! Token Exchange Probe
//!
//! Interactive check of the MercadoLibre OAuth token endpoint: paste the
//! authorization code from the callback URL (or the whole callback URL)
//! and the probe posts the exchange request and prints everything the
//! endpoint answers.
//!
//! Usage:
//! ```bash
//! cargo run --features cli --bin token-probe
//! ```

use meli_core::api::auth::{
    parse_authorization_callback, post_token_request, TokenRequest, TokenResponse,
};
use meli_core::{MeliConfig, MeliError};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = MeliConfig::from_env();

    println!("\n=== MercadoLibre Token Exchange Probe ===\n");

    let input = prompt("Enter the authorization code from the callback URL: ")?;
    if input.is_empty() {
        println!("No authorization code provided. Exiting.");
        return Ok(());
    }

    // Accept either the bare code or the full pasted callback URL.
    let code = if input.starts_with("http") {
        match parse_authorization_callback(&input) {
            Ok(code) => code,
            Err(e) => {
                println!("\nCould not read the callback URL: {e}");
                return Ok(());
            }
        }
    } else {
        input
    };

    if let Err(e) = exchange(&config, &code).await {
        report_failure(&e);
    }

    Ok(())
}

async fn exchange(config: &MeliConfig, code: &str) -> meli_core::Result<()> {
    let http = reqwest::Client::new();
    let request = TokenRequest::authorization_code(config, code);

    let response = post_token_request(&http, config, &request).await?;

    println!("\nResponse Status Code: {}", response.status);

    println!("\nResponse Headers:");
    for (name, value) in &response.headers {
        println!("{name}: {value}");
    }

    // Parse before the status check so a non-JSON body is reported as a
    // decode failure regardless of status.
    let body: serde_json::Value =
        serde_json::from_str(&response.body).map_err(|e| MeliError::JsonDecode {
            message: e.to_string(),
            raw: response.body.clone(),
        })?;

    println!("\nResponse Body:");
    println!("{body:#}");

    if response.is_success() {
        let tokens: TokenResponse =
            serde_json::from_value(body).map_err(|e| MeliError::JsonDecode {
                message: e.to_string(),
                raw: response.body.clone(),
            })?;

        println!("\nSuccess! Token details:");
        println!("Access Token: {}", tokens.access_token);
        println!(
            "Refresh Token: {}",
            tokens.refresh_token.as_deref().unwrap_or("<none>")
        );
        println!("Expires in: {} seconds", tokens.expires_in);
        println!("Expires at: {}", tokens.expires_at());
        match tokens.user_id {
            Some(user_id) => println!("User ID: {user_id}"),
            None => println!("User ID: <none>"),
        }
    } else {
        println!("\nError! Could not obtain tokens");
    }

    Ok(())
}

// Transport and decode failures are the two conditions this probe tells
// apart; both end the run without a non-zero exit.
fn report_failure(error: &MeliError) {
    match error {
        MeliError::Request(e) => {
            println!("\nError making request: {e}");
        }
        MeliError::JsonDecode { message, raw } => {
            println!("\nError: could not parse JSON response ({message})");
            println!("Raw response: {raw}");
        }
        other => {
            println!("\nError: {other}");
        }
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
