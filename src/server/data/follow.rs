use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect,
};

pub struct FollowRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FollowRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records that `follower_id` follows `followee_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - A new follow was recorded
    /// - `Ok(false)` - The follow already existed
    pub async fn follow(&self, follower_id: &str, followee_id: &str) -> Result<bool, DbErr> {
        let inserted = entity::prelude::Follow::insert(entity::follow::ActiveModel {
            follower_id: ActiveValue::Set(follower_id.to_string()),
            followee_id: ActiveValue::Set(followee_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::follow::Column::FollowerId,
                entity::follow::Column::FolloweeId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Removes a follow. Missing follows are not an error.
    pub async fn unfollow(&self, follower_id: &str, followee_id: &str) -> Result<(), DbErr> {
        entity::prelude::Follow::delete_many()
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FolloweeId.eq(followee_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn is_following(&self, follower_id: &str, followee_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FolloweeId.eq(followee_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Identities followed by `follower_id`.
    pub async fn get_followee_ids(&self, follower_id: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::Follow::find()
            .select_only()
            .column(entity::follow::Column::FolloweeId)
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    pub async fn count_followers(&self, user_id: &str) -> Result<u64, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::FolloweeId.eq(user_id))
            .count(self.db)
            .await
    }

    pub async fn count_following(&self, user_id: &str) -> Result<u64, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(user_id))
            .count(self.db)
            .await
    }
}
