//! Authenticated HTTP client for the MercadoLibre REST API
//!
//! Every request goes out with `Authorization: Bearer {token}` and
//! `Accept: application/json`. Responses are read as text first so the
//! raw body survives for display when parsing fails; decoding is
//! centralized in [`decode_response`] so a non-success status and a
//! malformed body always surface as the same two error kinds.

use crate::config::MeliConfig;
use crate::error::{MeliError, Result};
use reqwest::header;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A response captured whole: status, headers and body text.
///
/// The probes want to log all three before any parsing happens, so the
/// client never consumes a response behind the caller's back.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as `T`, applying the standard status/decode rules.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        decode_response(self.status, &self.body)
    }

    async fn capture(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }
}

/// Decode a captured response body.
///
/// Non-2xx becomes `ApiStatus` (the remote did answer, just not happily);
/// a body that is not valid JSON for `T` becomes `JsonDecode` with the
/// raw text preserved.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        return Err(MeliError::ApiStatus {
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| MeliError::JsonDecode {
        message: e.to_string(),
        raw: body.to_string(),
    })
}

/// POST a form-encoded body and capture the response whole. Used by the
/// token endpoint, which is the one non-GET call in the harness.
pub async fn send_form<F: Serialize>(
    http: &reqwest::Client,
    url: &str,
    form: &F,
) -> Result<RawResponse> {
    let response = http
        .post(url)
        .header(header::ACCEPT, "application/json")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .form(form)
        .send()
        .await?;

    RawResponse::capture(response).await
}

/// Bearer-token client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct MeliClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl MeliClient {
    pub fn new(config: &MeliConfig, access_token: impl Into<String>) -> Self {
        Self::with_base_url(&config.api_url, access_token)
    }

    /// Bind to an explicit base URL (tests point this at a local server).
    pub fn with_base_url(base_url: &str, access_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET and capture status/headers/body without parsing.
    pub async fn get_raw(&self, path: &str) -> Result<RawResponse> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.access_token),
            )
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        RawResponse::capture(response).await
    }

    /// GET and parse the body as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_raw(path).await?.json()
    }

    /// GET with a serializable query string, parsing the body as `T`.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET (with query)");

        let response = self
            .http
            .get(&url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.access_token),
            )
            .header(header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        RawResponse::capture(response).await?.json()
    }

    /// GET returning the body as an opaque JSON value.
    pub async fn get_value(&self, path: &str) -> Result<serde_json::Value> {
        self.get_json(path).await
    }
}
