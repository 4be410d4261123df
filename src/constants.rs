// src/constants.rs

// --- Preference Persistence ---
pub const PREFERENCE_KEY: &str = "dark-mode";
pub const PREFERENCE_ENABLED: &str = "enabled";
pub const PREFERENCE_DISABLED: &str = "disabled";
pub const DARK_CLASS: &str = "dark"; // Marker on the rendering root

// --- Listing ---
pub const ALL_CATEGORY: &str = "All";
pub const UNRANKED: u8 = u8::MAX; // Entries without a difficulty sort after Hard

// --- Carousel ---
pub const AUTOPLAY_INTERVAL_SECS: u64 = 5;

// --- Logging ---
pub const DEFAULT_LOG_FILTER: &str = "info";

// --- Row Glyphs ---
pub const GLYPH_SOLVED: &str = "✅";
pub const GLYPH_UNSOLVED: &str = "🔄";
pub const GLYPH_REVISIT: &str = "✔️";
pub const GLYPH_NO_REVISIT: &str = "🔖";
