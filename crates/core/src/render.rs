//! View models for the cover grid and platform lists
//!
//! The WASM crate turns these into DOM nodes; keeping them here lets the
//! selection rules be tested without a browser.

use crate::constants::NO_RESULTS_LABEL;
use crate::models::{Game, Platform};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCard {
    pub image_url: String,
    pub alt: String,
}

/// One card per game that has a cover, in response order
pub fn game_cards(games: &[Game]) -> Vec<GameCard> {
    games
        .iter()
        .filter_map(|game| {
            game.cover_url().map(|image_url| GameCard {
                image_url,
                alt: game.name.clone(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformRow {
    Link { label: String },
    Placeholder { label: String },
}

impl PlatformRow {
    pub fn label(&self) -> &str {
        match self {
            PlatformRow::Link { label } | PlatformRow::Placeholder { label } => label,
        }
    }
}

/// Rows for a platform list; an empty input yields a single placeholder
pub fn platform_rows<'a, I>(platforms: I) -> Vec<PlatformRow>
where
    I: IntoIterator<Item = &'a Platform>,
{
    let rows: Vec<PlatformRow> = platforms
        .into_iter()
        .map(|p| PlatformRow::Link { label: p.name.clone() })
        .collect();

    if rows.is_empty() {
        vec![PlatformRow::Placeholder { label: NO_RESULTS_LABEL.to_string() }]
    } else {
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cover;

    fn game(name: &str, image_id: Option<&str>) -> Game {
        Game {
            name: name.to_string(),
            cover: image_id.map(|id| Cover { image_id: id.to_string() }),
        }
    }

    #[test]
    fn only_games_with_cover_get_cards_in_order() {
        let games = vec![
            game("Hades", Some("co39vc")),
            game("Untitled", None),
            game("Celeste", Some("co3byy")),
        ];
        let cards = game_cards(&games);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].alt, "Hades");
        assert!(cards[0].image_url.ends_with("/t_cover_big/co39vc.jpg"));
        assert_eq!(cards[1].alt, "Celeste");
    }

    #[test]
    fn no_games_no_cards() {
        assert!(game_cards(&[]).is_empty());
    }

    #[test]
    fn empty_platforms_render_one_placeholder() {
        let none: Vec<Platform> = Vec::new();
        let rows = platform_rows(&none);
        assert_eq!(rows, vec![PlatformRow::Placeholder { label: NO_RESULTS_LABEL.to_string() }]);
    }

    #[test]
    fn one_row_per_platform_preserving_order() {
        let platforms = vec![Platform::new("PC"), Platform::new("Dreamcast"), Platform::new("Wii U")];
        let rows = platform_rows(&platforms);
        let labels: Vec<&str> = rows.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["PC", "Dreamcast", "Wii U"]);
        assert!(rows.iter().all(|r| matches!(r, PlatformRow::Link { .. })));
    }
}
