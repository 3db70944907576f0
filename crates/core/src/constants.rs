//! Shared constants for the catalog page

/// IGDB image CDN prefix for big cover art
/// The image id and `.jpg` are appended to form the full URL
pub const COVER_URL_PREFIX: &str = "https://images.igdb.com/igdb/image/upload/t_cover_big/";

/// Grace period between pointer-leave and the dropdown actually closing (ms)
pub const CLOSE_DELAY_MS: u32 = 100;

/// Vertical gap between a trigger and its flyout panel (px)
pub const PANEL_OFFSET: f64 = 6.0;

/// Category selected when a dropdown opens and the markup names none
pub const DEFAULT_CATEGORY: &str = "playstation";

/// Label of the single row shown when a platform list is empty
pub const NO_RESULTS_LABEL: &str = "No platforms found";
