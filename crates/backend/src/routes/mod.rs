//! HTTP routes: catalog API plus the static site

pub mod games;

pub use games::*;

use axum::{
    extract::Request,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use crate::AppState;

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}

/// True when any path segment names a dotfile (`.env`, `.git`, ...), encoded or not
fn is_hidden_path(path: &str) -> bool {
    path.split('/').any(|segment| {
        segment.starts_with('.') || segment.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("%2e"))
    })
}

async fn reject_hidden(request: Request, next: Next) -> Response {
    if is_hidden_path(request.uri().path()) {
        return not_found().await.into_response();
    }
    next.run(request).await
}

pub fn build_router(state: Arc<AppState>) -> Router {
    // ServeDir rejects `..` segments, so nothing outside the root is reachable.
    // Dotfiles are refused before ServeDir sees them: `.env` sits in the root.
    let static_files = middleware::from_fn(reject_hidden).layer(
        ServeDir::new(&state.config.static_root)
            .append_index_html_on_directories(false)
            .not_found_service(not_found.into_service()),
    );
    let index = ServeFile::new(state.config.index_file());

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Catalog API
        .route("/api/games", post(get_games))
        .route("/api/platforms", post(get_platforms))
        // Static site
        .route_service("/", index)
        .fallback_service(static_files)
        .with_state(state)
        .layer(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
