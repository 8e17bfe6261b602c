use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, player::PlayerRepository, profile::ProfileRepository},
    error::AppError,
    model::player::PlayerWithIdentity,
};

pub const SUGGESTED_PLAYERS_LIMIT: u64 = 20;

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Recently active players, one per user, excluding the viewer.
    pub async fn get_suggested(
        &self,
        viewer_id: Option<&str>,
    ) -> Result<Vec<PlayerWithIdentity>, AppError> {
        let players = PlayerRepository::new(self.db)
            .get_suggested(viewer_id, SUGGESTED_PLAYERS_LIMIT)
            .await?;

        let user_ids: Vec<String> = players.iter().map(|p| p.user_id.clone()).collect();
        let mut game_ids: Vec<i32> = players.iter().map(|p| p.game_id).collect();
        game_ids.sort_unstable();
        game_ids.dedup();

        let game_repo = GameRepository::new(self.db);
        let profile_repo = ProfileRepository::new(self.db);
        let (profiles, games) = tokio::join!(
            profile_repo.find_by_user_ids(&user_ids),
            game_repo.find_by_ids(&game_ids),
        );
        let (profiles, games) = (profiles?, games?);

        let players = players
            .into_iter()
            .map(|player| {
                let profile = profiles.iter().find(|p| p.user_id == player.user_id);
                let game = games
                    .iter()
                    .find(|g| g.id == player.game_id)
                    .map(|g| (g.slug.as_str(), g.title.as_str()));
                PlayerWithIdentity::new(player, profile, game)
            })
            .collect();

        Ok(players)
    }
}
