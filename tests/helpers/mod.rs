//! Test helpers for live API integration tests
//!
//! Utilities for managing throwaway test credentials and the interactive
//! prompts the live tests rely on.

use meli_core::api::auth::TokenResponse;
use meli_core::error::{MeliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Tokens saved on disk between live test runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCredentials {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user_id: Option<u64>,
    pub saved_at: String,
}

/// Path of the credentials file (next to Cargo.toml, gitignored).
pub fn credentials_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("test_credentials.json");
    path
}

/// Save tokens to disk for reuse in later live tests.
pub fn save_credentials(tokens: &TokenResponse) -> Result<()> {
    let credentials = TestCredentials {
        access_token: tokens.access_token.clone(),
        refresh_token: tokens.refresh_token.clone(),
        user_id: tokens.user_id,
        saved_at: chrono::Utc::now().to_rfc3339(),
    };

    let json = serde_json::to_string_pretty(&credentials).map_err(|e| {
        MeliError::InvalidInput(format!("could not serialize credentials: {e}"))
    })?;
    fs::write(credentials_path(), json)?;

    println!("Credentials saved to: {:?}", credentials_path());
    Ok(())
}

/// Load previously saved tokens.
pub fn load_credentials() -> Result<TestCredentials> {
    let path = credentials_path();
    if !path.exists() {
        return Err(MeliError::InvalidInput(format!(
            "credentials file not found: {path:?}\nRun the interactive token exchange test first!"
        )));
    }

    let json = fs::read_to_string(path)?;
    let credentials: TestCredentials = serde_json::from_str(&json).map_err(|e| {
        MeliError::JsonDecode {
            message: e.to_string(),
            raw: json.clone(),
        }
    })?;

    println!("Credentials loaded (saved at {})", credentials.saved_at);
    Ok(credentials)
}

pub fn prompt(label: &str) -> String {
    print!("{label}");
    io::stdout().flush().ok();

    let mut input = String::new();
    io::stdin().read_line(&mut input).ok();
    input.trim().to_string()
}

pub fn wait_for_confirmation(label: &str) {
    prompt(&format!("{label} (press Enter to continue) "));
}

pub fn print_header(title: &str) {
    println!("\n{}", "=".repeat(70));
    println!("  {title}");
    println!("{}\n", "=".repeat(70));
}

pub fn print_section(title: &str) {
    println!("\n--- {title} ---");
}

pub fn truncate(value: &str, max: usize) -> String {
    if value.len() <= max {
        value.to_string()
    } else {
        format!("{}...", &value[..max])
    }
}
