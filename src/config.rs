//! Application credentials and endpoint configuration
//!
//! Defaults match the registered test application; every field can be
//! overridden through `MELI_*` environment variables (a `.env` file is
//! honored). The probes never persist anything back.

#[derive(Debug, Clone)]
pub struct MeliConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// Authorization (consent) page, per-site domain.
    pub auth_url: String,
    /// OAuth token exchange endpoint.
    pub token_url: String,
    /// REST API base.
    pub api_url: String,
}

impl Default for MeliConfig {
    fn default() -> Self {
        Self {
            client_id: "4683025741956879".to_string(),
            client_secret: "1ie3G4fiCyrzZWb0CYJy7cfYIfdzWDXS".to_string(),
            redirect_uri: "https://incredible-profiterole-5d1cb4.netlify.app/mercadolibre/callback"
                .to_string(),
            auth_url: "https://auth.mercadolibre.com.ar/authorization".to_string(),
            token_url: "https://api.mercadolibre.com/oauth/token".to_string(),
            api_url: "https://api.mercadolibre.com".to_string(),
        }
    }
}

impl MeliConfig {
    /// Load configuration, letting environment variables override the
    /// built-in defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            client_id: env_or("MELI_CLIENT_ID", defaults.client_id),
            client_secret: env_or("MELI_CLIENT_SECRET", defaults.client_secret),
            redirect_uri: env_or("MELI_REDIRECT_URI", defaults.redirect_uri),
            auth_url: env_or("MELI_AUTH_URL", defaults.auth_url),
            token_url: env_or("MELI_TOKEN_URL", defaults.token_url),
            api_url: env_or("MELI_API_URL", defaults.api_url),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}
