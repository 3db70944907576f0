//! IGDB API proxy client

use axum::body::Bytes;
use reqwest::header::ACCEPT;

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Top-rated games with enough votes to be meaningful, cover required
pub const GAMES_QUERY: &str = "fields name, rating, rating_count, cover.image_id; \
    where cover != null & rating != null & rating_count > 500; \
    sort rating desc; \
    limit 24;";

pub const PLATFORMS_QUERY: &str = "fields name; sort name asc; limit 500;";

#[derive(Debug, Clone, Copy)]
pub enum Endpoint {
    Games,
    Platforms,
}

impl Endpoint {
    fn path(self) -> &'static str {
        match self {
            Endpoint::Games => "games",
            Endpoint::Platforms => "platforms",
        }
    }

    fn query(self) -> &'static str {
        match self {
            Endpoint::Games => GAMES_QUERY,
            Endpoint::Platforms => PLATFORMS_QUERY,
        }
    }
}

/// Run the fixed query for `endpoint` and return IGDB's JSON body untouched
pub async fn fetch(
    client: &reqwest::Client,
    config: &ServerConfig,
    endpoint: Endpoint,
) -> Result<Bytes, ApiError> {
    let creds = config.igdb_credentials().ok_or(ApiError::MissingCredentials)?;

    let url = format!("{}/{}", config.igdb_api_url.trim_end_matches('/'), endpoint.path());

    let response = client
        .post(&url)
        .header("Client-ID", creds.client_id)
        .bearer_auth(creds.access_token)
        .header(ACCEPT, "application/json")
        .body(endpoint.query())
        .send()
        .await?
        .error_for_status()?;

    let body = response.bytes().await?;
    tracing::debug!(endpoint = endpoint.path(), bytes = body.len(), "IGDB response");
    Ok(body)
}
