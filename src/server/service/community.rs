use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::feed::EventKind,
    server::{
        data::{
            community::CommunityRepository, event::EventRepository,
            user_community::UserCommunityRepository,
        },
        error::AppError,
        model::event::CreateEventParam,
    },
};

pub struct CommunityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommunityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records that the user joined a community.
    ///
    /// Joining again is a no-op; a `community_joined` event is only recorded
    /// for the first join, in the same transaction as the membership.
    ///
    /// # Returns
    /// - `Ok(())` - User is a member
    /// - `Err(AppError::NotFound)` - Community does not exist
    pub async fn join(&self, user_id: &str, community_id: i32) -> Result<(), AppError> {
        let Some(community) = CommunityRepository::new(self.db)
            .find_by_id(community_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Community {} not found",
                community_id
            )));
        };

        let txn = self.db.begin().await?;

        let joined = UserCommunityRepository::new(&txn)
            .join(user_id, community.id)
            .await?;

        if joined {
            EventRepository::new(&txn)
                .create(CreateEventParam {
                    user_id: Some(user_id.to_string()),
                    game_id: Some(community.game_id),
                    kind: EventKind::CommunityJoined,
                    title: format!("Joined {}", community.name),
                    description: None,
                })
                .await?;
        }

        txn.commit().await?;

        Ok(())
    }
}
