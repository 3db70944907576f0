//! Server configuration read from the environment (and `.env` via dotenvy)

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_IGDB_API_URL: &str = "https://api.igdb.com/v4";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Twitch application client id used by IGDB
    pub igdb_client_id: Option<String>,
    /// App access token for IGDB
    pub igdb_access_token: Option<String>,
    pub igdb_api_url: String,
    pub bind_address: String,
    /// Directory served as the site root; `/` maps to `public/index.html` below it
    pub static_root: PathBuf,
    pub upstream_timeout: Duration,
}

/// Borrowed IGDB credentials, present only when both halves are configured
pub struct IgdbCredentials<'a> {
    pub client_id: &'a str,
    pub access_token: &'a str,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            igdb_client_id: get("IGDB_CLIENT_ID"),
            igdb_access_token: get("IGDB_ACCESS_TOKEN"),
            igdb_api_url: get("IGDB_API_URL").unwrap_or_else(|| DEFAULT_IGDB_API_URL.to_string()),
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            static_root: get("STATIC_ROOT").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")),
            upstream_timeout: get("UPSTREAM_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS)),
        }
    }

    pub fn igdb_credentials(&self) -> Option<IgdbCredentials<'_>> {
        Some(IgdbCredentials {
            client_id: self.igdb_client_id.as_deref()?,
            access_token: self.igdb_access_token.as_deref()?,
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_root.join("public").join("index.html")
    }
}
