pub const SITE_NAME: &str = "GameHub";

/// Delay before a search box change triggers a new listing request.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

pub const GENRE_FILTERS: &[&str] = &[
    "action",
    "racing",
    "roguelike",
    "rpg",
    "sandbox",
    "simulation",
    "sports",
    "survival",
];

pub const PLATFORM_FILTERS: &[&str] = &["PC", "PlayStation", "Xbox", "Switch", "Mobile"];
