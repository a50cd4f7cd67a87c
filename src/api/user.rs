//! Authenticated user information
//!
//! # API Endpoint
//! `GET https://api.mercadolibre.com/users/me`

use crate::api::client::MeliClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Subset of `/users/me` the harness cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInformation {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub nickname: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Site the account belongs to, e.g. `MLA` (Argentina).
    #[serde(default)]
    pub site_id: Option<String>,
}

impl MeliClient {
    /// Fetch the account behind the access token.
    ///
    /// Useful before the publications probe when the caller does not know
    /// the numeric user id yet.
    pub async fn get_user_information(&self) -> Result<UserInformation> {
        let response = self.get_value("/users/me").await?;

        // Pick fields out of the raw value; the full payload carries far
        // more than the harness needs.
        let id = response.get("id").and_then(|v| v.as_u64());

        let nickname = response
            .get("nickname")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let email = response
            .get("email")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let site_id = response
            .get("site_id")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        Ok(UserInformation {
            id,
            nickname,
            email,
            site_id,
        })
    }
}
