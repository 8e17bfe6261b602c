//! Idempotent seeding of the demo catalog.
//!
//! Every row is checked before insert, so running a seed twice inserts nothing
//! the second time. Row failures are collected into the report instead of
//! aborting the run.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::feed::EventKind,
    server::{
        data::{
            community::{CommunityRepository, CreateCommunityParam},
            event::EventRepository,
            game::{CreateGameParam, GameRepository},
            game_version::GameVersionRepository,
        },
        error::AppError,
        model::{
            event::CreateEventParam,
            game::Game,
            seed::{
                SeedCommunity, SeedEventsReport, SeedGame, SeedReport, SEED_GAMES, SEED_VERSIONS,
            },
        },
    },
};

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the demo games and their communities.
    pub async fn seed_games(&self) -> SeedReport {
        let mut report = SeedReport::default();

        for seed in SEED_GAMES {
            let game = match self.ensure_game(seed).await {
                Ok((game, inserted)) => {
                    if inserted {
                        report.games_inserted += 1;
                    }
                    game
                }
                Err(err) => {
                    report.errors.push(format!("game {}: {}", seed.slug, err));
                    continue;
                }
            };

            for community in seed.communities {
                match self.ensure_community(&game, community).await {
                    Ok(true) => report.communities_inserted += 1,
                    Ok(false) => {}
                    Err(err) => report
                        .errors
                        .push(format!("community {}: {}", community.name, err)),
                }
            }
        }

        tracing::info!(
            "Seeded {} games and {} communities ({} errors)",
            report.games_inserted,
            report.communities_inserted,
            report.errors.len()
        );

        report
    }

    /// Inserts demo game versions and a `game_update` event for each.
    pub async fn seed_events(&self) -> SeedEventsReport {
        let mut report = SeedEventsReport::default();
        let game_repo = GameRepository::new(self.db);
        let version_repo = GameVersionRepository::new(self.db);
        let event_repo = EventRepository::new(self.db);

        for seed in SEED_VERSIONS {
            let game = match game_repo.find_by_slug(seed.game_slug).await {
                Ok(Some(game)) => game,
                Ok(None) => {
                    report
                        .errors
                        .push(format!("version {}: unknown game {}", seed.version, seed.game_slug));
                    continue;
                }
                Err(err) => {
                    report.errors.push(format!("version {}: {}", seed.version, err));
                    continue;
                }
            };

            match version_repo.exists(game.id, seed.version).await {
                Ok(true) => {}
                Ok(false) => {
                    match version_repo
                        .create(
                            game.id,
                            seed.version.to_string(),
                            Some(seed.notes.to_string()),
                        )
                        .await
                    {
                        Ok(_) => report.versions_created += 1,
                        Err(err) => {
                            report.errors.push(format!("version {}: {}", seed.version, err));
                            continue;
                        }
                    }
                }
                Err(err) => {
                    report.errors.push(format!("version {}: {}", seed.version, err));
                    continue;
                }
            }

            let title = format!("{} {} released", game.title, seed.version);
            let created = match event_repo.exists_for_game(game.id, &title).await {
                Ok(true) => Ok(false),
                Ok(false) => event_repo
                    .create(CreateEventParam {
                        user_id: None,
                        game_id: Some(game.id),
                        kind: EventKind::GameUpdate,
                        title: title.clone(),
                        description: Some(seed.notes.to_string()),
                    })
                    .await
                    .map(|_| true),
                Err(err) => Err(AppError::from(err)),
            };

            match created {
                Ok(true) => report.events_created += 1,
                Ok(false) => {}
                Err(err) => report.errors.push(format!("event {}: {}", title, err)),
            }
        }

        tracing::info!(
            "Seeded {} versions and {} events ({} errors)",
            report.versions_created,
            report.events_created,
            report.errors.len()
        );

        report
    }

    /// Returns the game for `seed.slug`, inserting it when missing.
    async fn ensure_game(&self, seed: &SeedGame) -> Result<(Game, bool), AppError> {
        let repo = GameRepository::new(self.db);

        if let Some(game) = repo.find_by_slug(seed.slug).await? {
            return Ok((game, false));
        }

        let game = repo
            .create(CreateGameParam {
                slug: seed.slug.to_string(),
                title: seed.title.to_string(),
                description: Some(seed.description.to_string()),
                cover_url: seed.cover_url.map(str::to_string),
                platforms: to_strings(seed.platforms),
                genres: to_strings(seed.genres),
                tags: to_strings(seed.tags),
            })
            .await?;

        Ok((game, true))
    }

    async fn ensure_community(
        &self,
        game: &Game,
        community: &SeedCommunity,
    ) -> Result<bool, AppError> {
        let repo = CommunityRepository::new(self.db);

        if repo.exists_by_name(game.id, community.name).await? {
            return Ok(false);
        }

        repo.create(CreateCommunityParam {
            game_id: game.id,
            name: community.name.to_string(),
            invite_url: community.invite_url.to_string(),
            category: Some(community.category.to_string()),
            language: Some(community.language.to_string()),
            online_count: community.online_count,
        })
        .await?;

        Ok(true)
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
