//! Rankr core: catalog models and the page logic shared by the web client
//! and the server

pub mod constants;
pub mod error;
pub mod menu;
pub mod models;
pub mod render;
pub mod search;

pub use error::FetchError;
pub use menu::{HoverMenu, MenuConfig, MenuEffect, MenuState, PanelPosition, Rect};
pub use models::{cover_url, Cover, Game, Platform};
pub use render::{game_cards, platform_rows, GameCard, PlatformRow};
pub use search::filter_platforms;
