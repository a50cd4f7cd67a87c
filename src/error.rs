//! Error types for MercadoLibre API calls
//!
//! Remote calls fail in exactly two ways we care to tell apart: the
//! transport layer failed (`Request`) or the body came back as something
//! other than JSON (`JsonDecode`). A non-2xx status is a soft failure
//! (`ApiStatus`) that the probes report and move on from.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeliError {
    /// Network/HTTP layer failure (connect, TLS, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not valid JSON. Keeps the raw body so the
    /// probes can print it for inspection.
    #[error("could not parse response as JSON: {message}")]
    JsonDecode { message: String, raw: String },

    /// Remote API answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeliError {
    /// True for the transport-failure kind (as opposed to a response the
    /// server did send but we could not use).
    pub fn is_transport(&self) -> bool {
        matches!(self, MeliError::Request(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, MeliError::JsonDecode { .. })
    }
}

pub type Result<T> = std::result::Result<T, MeliError>;
