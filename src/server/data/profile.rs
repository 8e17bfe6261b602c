//! Profile repository.
//!
//! Profiles are keyed by the owning user's identity and carry the public,
//! immutable username.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::profile::{CreateProfileParam, Profile, UpdateProfileParam};

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>, DbErr> {
        let entity = entity::prelude::Profile::find()
            .filter(entity::profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Profile::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Profile>, DbErr> {
        let entity = entity::prelude::Profile::find()
            .filter(entity::profile::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(Profile::from_entity))
    }

    /// Profiles for the given identities. Identities without a profile are skipped.
    pub async fn find_by_user_ids(&self, user_ids: &[String]) -> Result<Vec<Profile>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Profile::find()
            .filter(entity::profile::Column::UserId.is_in(user_ids.iter().cloned()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Profile::from_entity).collect())
    }

    /// Inserts a profile unless it would violate a unique index.
    ///
    /// A conflict on either the owning identity or the username is skipped
    /// rather than raised, so concurrent first-use requests cannot fail.
    ///
    /// # Returns
    /// - `Ok(true)` - The profile was inserted
    /// - `Ok(false)` - The identity already has a profile or the username is taken
    pub async fn insert_if_absent(&self, param: CreateProfileParam) -> Result<bool, DbErr> {
        let now = Utc::now();

        let inserted = entity::prelude::Profile::insert(entity::profile::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            username: ActiveValue::Set(param.username),
            display_name: ActiveValue::Set(param.display_name),
            avatar_url: ActiveValue::Set(param.avatar_url),
            bio: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(OnConflict::new().do_nothing().to_owned())
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Updates the editable fields of a user's profile. The username is never touched.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - Updated profile
    /// - `Ok(None)` - The user has no profile
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        user_id: &str,
        param: UpdateProfileParam,
    ) -> Result<Option<Profile>, DbErr> {
        let Some(entity) = entity::prelude::Profile::find()
            .filter(entity::profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.display_name = ActiveValue::Set(param.display_name);
        active.bio = ActiveValue::Set(param.bio);
        active.avatar_url = ActiveValue::Set(param.avatar_url);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Profile::from_entity(updated)))
    }
}
