//! HTTP client for the catalog API
//!
//! Uses gloo-net for browser fetch API

use gloo_net::http::Request;
use rankr_core::{FetchError, Game, Platform};
use serde::de::DeserializeOwned;

/// Fetch the top-rated games (with cover references)
pub async fn fetch_games() -> Result<Vec<Game>, FetchError> {
    post_empty("/api/games").await
}

/// Fetch the full platform list
pub async fn fetch_platforms() -> Result<Vec<Platform>, FetchError> {
    post_empty("/api/platforms").await
}

fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();

    format!("{}{}", origin, path)
}

/// POST with no body and decode the JSON reply
async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let response = Request::post(&api_url(path))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Status { status, body });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}
