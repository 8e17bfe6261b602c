//! Profiles: lazy creation, public profile aggregation, edits and follows.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{feed::EventKind, profile::UpdateProfileDto},
    server::{
        data::{
            community::CommunityRepository, event::EventRepository, follow::FollowRepository,
            game::GameRepository, guide::GuideRepository, profile::ProfileRepository,
            user_community::UserCommunityRepository, user_game::UserGameRepository,
        },
        error::AppError,
        model::{
            event::{CreateEventParam, FEED_LIMIT},
            profile::{
                CreateProfileParam, Profile, ProfileStats, ProfileView, UpdateProfileParam,
                BIO_MAX_LEN, DISPLAY_NAME_MAX_LEN, USERNAME_MAX_LEN,
            },
            user::User,
        },
        service::feed::FeedService,
        util::parse::slugify,
    },
};

/// Identity characters used in the fallback username.
const FALLBACK_ID_LEN: usize = 8;

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the user's profile, creating it on first use.
    ///
    /// The username is the slugified Discord name; when that is empty or already
    /// taken, `player-` followed by the first eight identity characters is used,
    /// then `player-` followed by the whole identity. Inserts skip conflicts and
    /// the profile is re-read afterwards, so concurrent calls for the same user
    /// all return the one stored profile.
    ///
    /// # Returns
    /// - `Ok(Profile)` - Existing or newly created profile
    /// - `Err(AppError::DbErr)` - Lookup or insert failed
    /// - `Err(AppError::InternalError)` - Every candidate username is taken
    pub async fn ensure_profile(&self, user: &User) -> Result<Profile, AppError> {
        let repo = ProfileRepository::new(self.db);

        if let Some(profile) = repo.find_by_user_id(&user.discord_id).await? {
            return Ok(profile);
        }

        for username in candidate_usernames(user) {
            let inserted = repo
                .insert_if_absent(CreateProfileParam {
                    user_id: user.discord_id.clone(),
                    username: username.clone(),
                    display_name: Some(user.name.clone()),
                    avatar_url: user
                        .avatar
                        .as_deref()
                        .map(|hash| avatar_url(&user.discord_id, hash)),
                })
                .await?;

            if inserted {
                tracing::info!("Created profile '{}' for user {}", username, user.discord_id);
            }

            // Also covers a concurrent request having created the profile first
            if let Some(profile) = repo.find_by_user_id(&user.discord_id).await? {
                return Ok(profile);
            }
        }

        Err(AppError::InternalError(format!(
            "No free username for user {}",
            user.discord_id
        )))
    }

    /// Loads the public profile page for `username`.
    ///
    /// # Returns
    /// - `Ok(ProfileView)` - Profile with stats, games, communities, guides and events
    /// - `Err(AppError::NotFound)` - No profile has this username
    pub async fn get_by_username(
        &self,
        username: &str,
        viewer_id: Option<&str>,
    ) -> Result<ProfileView, AppError> {
        let Some(profile) = ProfileRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Profile '{}' not found",
                username
            )));
        };

        self.build_view(profile, viewer_id).await
    }

    /// The user's own profile page, creating the profile when needed.
    pub async fn get_own(&self, user: &User) -> Result<ProfileView, AppError> {
        let profile = self.ensure_profile(user).await?;
        self.build_view(profile, Some(&user.discord_id)).await
    }

    /// Updates display name, bio and avatar URL.
    ///
    /// Blank values clear the field. The username cannot be changed.
    ///
    /// # Returns
    /// - `Ok(ProfileView)` - The updated profile page
    /// - `Err(AppError::BadRequest)` - Display name over 50 or bio over 500 characters
    pub async fn update(
        &self,
        user: &User,
        payload: UpdateProfileDto,
    ) -> Result<ProfileView, AppError> {
        let param = validate_update(payload)?;

        self.ensure_profile(user).await?;

        let Some(profile) = ProfileRepository::new(self.db)
            .update(&user.discord_id, param)
            .await?
        else {
            return Err(AppError::InternalError(format!(
                "Profile for user {} vanished during update",
                user.discord_id
            )));
        };

        self.build_view(profile, Some(&user.discord_id)).await
    }

    /// Follows the profile named `username`.
    ///
    /// # Returns
    /// - `Ok(())` - The user follows the profile (newly or already)
    /// - `Err(AppError::NotFound)` - No profile has this username
    /// - `Err(AppError::BadRequest)` - The profile belongs to the user
    pub async fn follow(&self, user: &User, username: &str) -> Result<(), AppError> {
        let target = self.resolve_follow_target(user, username).await?;

        let txn = self.db.begin().await?;

        let followed = FollowRepository::new(&txn)
            .follow(&user.discord_id, &target.user_id)
            .await?;

        if followed {
            EventRepository::new(&txn)
                .create(CreateEventParam {
                    user_id: Some(user.discord_id.clone()),
                    game_id: None,
                    kind: EventKind::Followed,
                    title: format!("Started following {}", target.resolved_name()),
                    description: None,
                })
                .await?;
        }

        txn.commit().await?;

        Ok(())
    }

    /// Unfollows the profile named `username`. Not following is not an error.
    pub async fn unfollow(&self, user: &User, username: &str) -> Result<(), AppError> {
        let target = self.resolve_follow_target(user, username).await?;

        FollowRepository::new(self.db)
            .unfollow(&user.discord_id, &target.user_id)
            .await?;

        Ok(())
    }

    async fn resolve_follow_target(&self, user: &User, username: &str) -> Result<Profile, AppError> {
        let Some(target) = ProfileRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Profile '{}' not found",
                username
            )));
        };

        if target.user_id == user.discord_id {
            return Err(AppError::BadRequest("You cannot follow yourself".to_string()));
        }

        Ok(target)
    }

    async fn build_view(
        &self,
        profile: Profile,
        viewer_id: Option<&str>,
    ) -> Result<ProfileView, AppError> {
        let user_id = profile.user_id.as_str();

        let user_game_repo = UserGameRepository::new(self.db);
        let user_community_repo = UserCommunityRepository::new(self.db);
        let guide_repo = GuideRepository::new(self.db);
        let follow_repo = FollowRepository::new(self.db);
        let event_repo = EventRepository::new(self.db);
        let feed_service = FeedService::new(self.db);

        let (
            tracked,
            community_ids,
            guides,
            events,
            games_count,
            communities_count,
            guides_count,
            followers,
            following,
            is_following,
        ) = tokio::join!(
            user_game_repo.get_by_user(user_id),
            user_community_repo.get_community_ids(user_id),
            guide_repo.get_by_author(user_id),
            event_repo.get_recent_by_users(std::slice::from_ref(&profile.user_id), FEED_LIMIT),
            user_game_repo.count_by_user(user_id),
            user_community_repo.count_by_user(user_id),
            guide_repo.count_by_author(user_id),
            follow_repo.count_followers(user_id),
            follow_repo.count_following(user_id),
            async {
                match viewer_id {
                    Some(viewer_id) if viewer_id != user_id => {
                        follow_repo.is_following(viewer_id, user_id).await
                    }
                    _ => Ok(false),
                }
            },
        );
        let (tracked, community_ids, events) = (tracked?, community_ids?, events?);

        let stats = ProfileStats {
            games: games_count?,
            communities: communities_count?,
            guides: guides_count?,
            followers: followers?,
            following: following?,
        };

        let game_ids: Vec<i32> = tracked.iter().map(|t| t.game_id).collect();
        let game_repo = GameRepository::new(self.db);
        let community_repo = CommunityRepository::new(self.db);
        let (games, communities, events) = tokio::join!(
            game_repo.find_by_ids(&game_ids),
            community_repo.find_by_ids(&community_ids),
            feed_service.hydrate_events(events),
        );
        let games = games?;

        let games = tracked
            .into_iter()
            .filter_map(|t| {
                games
                    .iter()
                    .find(|g| g.id == t.game_id)
                    .map(|g| (g.clone(), t))
            })
            .collect::<Vec<_>>();

        Ok(ProfileView {
            is_self: viewer_id == Some(user_id),
            is_following: is_following?,
            stats,
            games,
            communities: communities?,
            guides: guides?,
            events: events?,
            profile,
        })
    }
}

fn fallback_username(user_id: &str) -> String {
    let prefix: String = user_id.chars().take(FALLBACK_ID_LEN).collect();
    format!("player-{}", prefix)
}

/// Usernames to try in order: the slugified name, the short fallback and the
/// full-identity fallback, without blanks or repeats.
fn candidate_usernames(user: &User) -> Vec<String> {
    let mut candidates = Vec::with_capacity(3);
    for candidate in [
        slugify(&user.name, USERNAME_MAX_LEN),
        fallback_username(&user.discord_id),
        format!("player-{}", user.discord_id),
    ] {
        if !candidate.is_empty() && !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}

fn avatar_url(user_id: &str, hash: &str) -> String {
    format!("https://cdn.discordapp.com/avatars/{}/{}.png", user_id, hash)
}

/// Trims every field, maps blank values to `None` and enforces length limits.
fn validate_update(payload: UpdateProfileDto) -> Result<UpdateProfileParam, AppError> {
    let display_name = clean(payload.display_name);
    let bio = clean(payload.bio);
    let avatar_url = clean(payload.avatar_url);

    if display_name
        .as_ref()
        .is_some_and(|v| v.chars().count() > DISPLAY_NAME_MAX_LEN)
    {
        return Err(AppError::BadRequest(format!(
            "Display name must be at most {} characters",
            DISPLAY_NAME_MAX_LEN
        )));
    }

    if bio.as_ref().is_some_and(|v| v.chars().count() > BIO_MAX_LEN) {
        return Err(AppError::BadRequest(format!(
            "Bio must be at most {} characters",
            BIO_MAX_LEN
        )));
    }

    Ok(UpdateProfileParam {
        display_name,
        bio,
        avatar_url,
    })
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
