//! Catalog route handlers (IGDB proxy)

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use crate::error::ApiError;
use crate::igdb::{self, Endpoint};
use crate::AppState;

/// Top-rated games with cover references
/// POST /api/games
pub async fn get_games(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    proxy(&state, Endpoint::Games).await
}

/// All platforms, sorted by name
/// POST /api/platforms
pub async fn get_platforms(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    proxy(&state, Endpoint::Platforms).await
}

async fn proxy(state: &AppState, endpoint: Endpoint) -> Result<Response, ApiError> {
    let body = igdb::fetch(&state.http, &state.config, endpoint).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
