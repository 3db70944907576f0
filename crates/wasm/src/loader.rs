//! Page-ready data loading for the cover grid and platform list
//!
//! Both loaders run independently; a failure is logged and the DOM is left
//! as it was.

use std::rc::Rc;

use rankr_core::game_cards;
use web_sys::Document;

use crate::http_client::{fetch_games, fetch_platforms};
use crate::page::PageState;
use crate::render::append_game_cards;

pub async fn load_games(document: Document) {
    let Some(grid) = document.get_element_by_id("game-grid") else {
        return;
    };

    let games = match fetch_games().await {
        Ok(games) => games,
        Err(e) => {
            tracing::error!("Error fetching games: {}", e);
            return;
        }
    };

    let cards = game_cards(&games);
    tracing::debug!(games = games.len(), cards = cards.len(), "games loaded");

    if let Err(e) = append_game_cards(&document, &grid, &cards) {
        tracing::error!("Error rendering games: {:?}", e);
    }
}

pub async fn load_platforms(state: Rc<PageState>) {
    match fetch_platforms().await {
        Ok(platforms) => {
            tracing::debug!(platforms = platforms.len(), "platforms loaded");
            state.refresh_platforms(platforms);
        }
        Err(e) => tracing::error!("Error fetching platforms: {}", e),
    }
}
