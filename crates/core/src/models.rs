//! Catalog data returned by `/api/games` and `/api/platforms`

use serde::{Deserialize, Serialize};
use crate::constants::COVER_URL_PREFIX;

/// Box-art reference of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cover {
    pub image_id: String,
}

/// A game as returned by IGDB. Extra fields (id, rating, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub name: String,
    #[serde(default)]
    pub cover: Option<Cover>,
}

impl Game {
    /// CDN URL of the cover, if the game has one
    pub fn cover_url(&self) -> Option<String> {
        self.cover.as_ref().map(|c| cover_url(&c.image_id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
}

impl Platform {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Resolve an IGDB image id against the big-cover CDN template
pub fn cover_url(image_id: &str) -> String {
    format!("{}{}.jpg", COVER_URL_PREFIX, image_id)
}
