//! Game listing, detail aggregation and play status tracking.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{feed::EventKind, game::PlayStatus},
    server::{
        data::{
            community::CommunityRepository,
            event::EventRepository,
            game::GameRepository,
            game_version::GameVersionRepository,
            guide::{GuideRepository, PlayGuideRepository},
            player::PlayerRepository,
            profile::ProfileRepository,
            user_game::UserGameRepository,
        },
        error::AppError,
        model::{
            event::CreateEventParam,
            game::{
                Game, GameDetail, GameFilter, SetGameStatusParam, UserGame, SIMILAR_GAMES_LIMIT,
                VERSIONS_LIMIT,
            },
            player::PlayerWithIdentity,
            section::Section,
        },
    },
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, filter: GameFilter) -> Result<Vec<Game>, AppError> {
        let games = GameRepository::new(self.db).list(&filter).await?;
        Ok(games)
    }

    /// Loads a game and every related slice.
    ///
    /// Slices are fetched concurrently and independently: a failing slice is
    /// reported as an error section while the others still populate.
    ///
    /// # Arguments
    /// - `slug` - Game slug
    /// - `viewer_id` - Logged-in viewer, whose tracking entry is included
    ///
    /// # Returns
    /// - `Ok(GameDetail)` - The game with its sections
    /// - `Err(AppError::NotFound)` - No game has this slug
    /// - `Err(AppError::DbErr)` - The game itself could not be loaded
    pub async fn get_detail(
        &self,
        slug: &str,
        viewer_id: Option<&str>,
    ) -> Result<GameDetail, AppError> {
        let game_repo = GameRepository::new(self.db);

        let Some(game) = game_repo.find_by_slug(slug).await? else {
            return Err(AppError::NotFound(format!("Game '{}' not found", slug)));
        };

        let community_repo = CommunityRepository::new(self.db);
        let guide_repo = GuideRepository::new(self.db);
        let play_guide_repo = PlayGuideRepository::new(self.db);
        let game_version_repo = GameVersionRepository::new(self.db);
        let (communities, guides, play_guides, players, similar_games, versions, viewer_status) = tokio::join!(
            community_repo.get_by_game(game.id),
            guide_repo.get_by_game(game.id),
            play_guide_repo.get_by_game(game.id),
            self.get_players(&game),
            game_repo.find_similar(&game, SIMILAR_GAMES_LIMIT),
            game_version_repo.get_latest_by_game(game.id, VERSIONS_LIMIT),
            self.get_viewer_status(viewer_id, game.id),
        );

        Ok(GameDetail {
            communities: Section::from_result("communities", communities),
            guides: Section::from_result("guides", guides),
            play_guides: Section::from_result("play guides", play_guides),
            players: Section::from_result("players", players),
            similar_games: Section::from_result("similar games", similar_games),
            versions: Section::from_result("versions", versions),
            viewer_status: Section::from_result("your play status", viewer_status),
            game,
        })
    }

    /// Players of a game with their display names resolved.
    async fn get_players(&self, game: &Game) -> Result<Vec<PlayerWithIdentity>, AppError> {
        let players = PlayerRepository::new(self.db).get_by_game(game.id).await?;

        let user_ids: Vec<String> = players.iter().map(|p| p.user_id.clone()).collect();
        let profiles = ProfileRepository::new(self.db)
            .find_by_user_ids(&user_ids)
            .await?;

        let players = players
            .into_iter()
            .map(|player| {
                let profile = profiles.iter().find(|p| p.user_id == player.user_id);
                PlayerWithIdentity::new(
                    player,
                    profile,
                    Some((game.slug.as_str(), game.title.as_str())),
                )
            })
            .collect();

        Ok(players)
    }

    /// The viewer's tracking entry. Anonymous viewers have none.
    async fn get_viewer_status(
        &self,
        viewer_id: Option<&str>,
        game_id: i32,
    ) -> Result<Option<UserGame>, AppError> {
        let Some(viewer_id) = viewer_id else {
            return Ok(None);
        };

        UserGameRepository::new(self.db).find(viewer_id, game_id).await
    }

    /// Sets the user's play status for a game and records a `status_changed` event.
    ///
    /// Both writes share one transaction.
    ///
    /// # Returns
    /// - `Ok(UserGame)` - The stored tracking entry
    /// - `Err(AppError::NotFound)` - No game has this slug
    pub async fn set_status(
        &self,
        user_id: &str,
        slug: &str,
        status: PlayStatus,
        favorite: bool,
    ) -> Result<UserGame, AppError> {
        let Some(game) = GameRepository::new(self.db).find_by_slug(slug).await? else {
            return Err(AppError::NotFound(format!("Game '{}' not found", slug)));
        };

        let txn = self.db.begin().await?;

        let tracked = UserGameRepository::new(&txn)
            .upsert(SetGameStatusParam {
                user_id: user_id.to_string(),
                game_id: game.id,
                status,
                favorite,
            })
            .await?;

        EventRepository::new(&txn)
            .create(CreateEventParam {
                user_id: Some(user_id.to_string()),
                game_id: Some(game.id),
                kind: EventKind::StatusChanged,
                title: format!("Marked {} as {}", game.title, status.label()),
                description: None,
            })
            .await?;

        txn.commit().await?;

        Ok(tracked)
    }
}
