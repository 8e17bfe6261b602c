use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct UserCommunityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserCommunityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records membership of a user in a community.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership newly recorded
    /// - `Ok(false)` - User was already a member
    pub async fn join(&self, user_id: &str, community_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::UserCommunity::insert(entity::user_community::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            community_id: ActiveValue::Set(community_id),
            joined_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_community::Column::UserId,
                entity::user_community::Column::CommunityId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Ids of communities a user joined, most recent first.
    pub async fn get_community_ids(&self, user_id: &str) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserCommunity::find()
            .select_only()
            .column(entity::user_community::Column::CommunityId)
            .filter(entity::user_community::Column::UserId.eq(user_id))
            .order_by_desc(entity::user_community::Column::JoinedAt)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn count_by_user(&self, user_id: &str) -> Result<u64, DbErr> {
        entity::prelude::UserCommunity::find()
            .filter(entity::user_community::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }
}
