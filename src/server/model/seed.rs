//! Seed reports and the built-in catalog used by the development seeding routes.

use crate::model::seed::{SeedEventsReportDto, SeedReportDto};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedReport {
    pub games_inserted: u32,
    pub communities_inserted: u32,
    pub errors: Vec<String>,
}

impl SeedReport {
    pub fn into_dto(self) -> SeedReportDto {
        SeedReportDto {
            games_inserted: self.games_inserted,
            communities_inserted: self.communities_inserted,
            errors: self.errors,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedEventsReport {
    pub versions_created: u32,
    pub events_created: u32,
    pub errors: Vec<String>,
}

impl SeedEventsReport {
    pub fn into_dto(self) -> SeedEventsReportDto {
        SeedEventsReportDto {
            versions_created: self.versions_created,
            events_created: self.events_created,
            errors: self.errors,
        }
    }
}

pub struct SeedGame {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub cover_url: Option<&'static str>,
    pub platforms: &'static [&'static str],
    pub genres: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub communities: &'static [SeedCommunity],
}

pub struct SeedCommunity {
    pub name: &'static str,
    pub invite_url: &'static str,
    pub category: &'static str,
    pub language: &'static str,
    pub online_count: u32,
}

pub struct SeedVersion {
    pub game_slug: &'static str,
    pub version: &'static str,
    pub notes: &'static str,
}

pub const SEED_GAMES: &[SeedGame] = &[
    SeedGame {
        slug: "stardew-valley",
        title: "Stardew Valley",
        description: "Inherit your grandfather's old farm plot and build a new life in Pelican Town.",
        cover_url: None,
        platforms: &["PC", "Switch", "PlayStation", "Xbox", "Mobile"],
        genres: &["simulation", "rpg"],
        tags: &["farming", "co-op", "cozy"],
        communities: &[SeedCommunity {
            name: "Pelican Town Farmers",
            invite_url: "https://discord.gg/stardewvalley",
            category: "general",
            language: "en",
            online_count: 1200,
        }],
    },
    SeedGame {
        slug: "minecraft",
        title: "Minecraft",
        description: "Explore infinite worlds and build everything from the simplest of homes to the grandest of castles.",
        cover_url: None,
        platforms: &["PC", "Switch", "PlayStation", "Xbox", "Mobile"],
        genres: &["sandbox", "survival"],
        tags: &["crafting", "multiplayer", "crossplay"],
        communities: &[
            SeedCommunity {
                name: "Minecraft Builders",
                invite_url: "https://discord.gg/minecraft",
                category: "creative",
                language: "en",
                online_count: 5400,
            },
            SeedCommunity {
                name: "Redstone Engineers",
                invite_url: "https://discord.gg/redstone",
                category: "technical",
                language: "en",
                online_count: 800,
            },
        ],
    },
    SeedGame {
        slug: "rocket-league",
        title: "Rocket League",
        description: "Soccer meets driving in a high-powered hybrid of arcade-style soccer and vehicular mayhem.",
        cover_url: None,
        platforms: &["PC", "Switch", "PlayStation", "Xbox"],
        genres: &["sports", "racing"],
        tags: &["competitive", "crossplay"],
        communities: &[SeedCommunity {
            name: "Rocket League Ranked",
            invite_url: "https://discord.gg/rocketleague",
            category: "competitive",
            language: "en",
            online_count: 2300,
        }],
    },
    SeedGame {
        slug: "hades",
        title: "Hades",
        description: "Defy the god of the dead as you hack and slash out of the Underworld.",
        cover_url: None,
        platforms: &["PC", "Switch", "PlayStation", "Xbox"],
        genres: &["action", "roguelike"],
        tags: &["single-player", "story"],
        communities: &[],
    },
    SeedGame {
        slug: "valheim",
        title: "Valheim",
        description: "A brutal exploration and survival game for 1-10 players set in a procedurally generated purgatory.",
        cover_url: None,
        platforms: &["PC", "Xbox"],
        genres: &["survival", "action"],
        tags: &["co-op", "vikings"],
        communities: &[SeedCommunity {
            name: "Valheim Vikings",
            invite_url: "https://discord.gg/valheim",
            category: "general",
            language: "en",
            online_count: 950,
        }],
    },
];

pub const SEED_VERSIONS: &[SeedVersion] = &[
    SeedVersion {
        game_slug: "stardew-valley",
        version: "1.6",
        notes: "New festivals, farm type and hundreds of quality of life changes.",
    },
    SeedVersion {
        game_slug: "minecraft",
        version: "1.21",
        notes: "Tricky Trials: trial chambers, the breeze and the mace.",
    },
    SeedVersion {
        game_slug: "valheim",
        version: "0.218",
        notes: "Ashlands biome released.",
    },
];
