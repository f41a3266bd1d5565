use std::collections::HashMap;
use std::path::Path;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub client_id: String,
    pub client_secret: String,
    pub gateway_base_url: String,
    pub api_version: String,
    pub gateway_timeout_ms: Option<u64>,
}

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_GATEWAY_BASE_URL: &str = "https://api.cashfree.com/pg";
pub const DEFAULT_API_VERSION: &str = "2022-09-01";

impl AppConfig {
    /// Process environment first, then a `.env` file in the working directory.
    pub fn from_env() -> Self {
        let file = read_env_file(Path::new(".env"));
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file.get(key).cloned()))
    }

    /// Builds the config from an arbitrary variable source. Credentials are not
    /// checked here; a missing pair shows up as an authentication error from the gateway.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| format!("0.0.0.0:{port}")),
            client_id: lookup("APP_ID").unwrap_or_default(),
            client_secret: lookup("SECRET_KEY").unwrap_or_default(),
            gateway_base_url: lookup("CASHFREE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GATEWAY_BASE_URL.to_string()),
            api_version: lookup("CASHFREE_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            gateway_timeout_ms: lookup("GATEWAY_TIMEOUT_MS").and_then(|s| s.parse::<u64>().ok()),
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

/// A missing file yields no variables; an unreadable one is logged and skipped.
pub fn read_env_file(path: &Path) -> HashMap<String, String> {
    match dotenvy::from_path_iter(path) {
        Ok(items) => items
            .filter_map(|item| match item {
                Ok(pair) => Some(pair),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "skipping bad .env line: {e}");
                    None
                }
            })
            .collect(),
        Err(e) if e.not_found() => HashMap::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring unreadable .env: {e}");
            HashMap::new()
        }
    }
}
