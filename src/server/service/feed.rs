//! Activity feed of followed users.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        event::EventRepository, follow::FollowRepository, game::GameRepository,
        profile::ProfileRepository,
    },
    error::AppError,
    model::{
        event::{Event, EventView, Feed, FEED_LIMIT},
        user::User,
    },
    service::profile::ProfileService,
};

pub struct FeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the feed for a logged-in user.
    ///
    /// The user's profile is created first when missing. A failure there is an
    /// error, never an empty feed.
    ///
    /// # Returns
    /// - `Ok(Feed)` - Up to 20 newest events by followed users
    /// - `Err(AppError)` - Profile creation or a feed query failed
    pub async fn get_feed(&self, user: &User) -> Result<Feed, AppError> {
        let profile = ProfileService::new(self.db).ensure_profile(user).await?;

        let followee_ids = FollowRepository::new(self.db)
            .get_followee_ids(&user.discord_id)
            .await?;

        let events = EventRepository::new(self.db)
            .get_recent_by_users(&followee_ids, FEED_LIMIT)
            .await?;

        Ok(Feed {
            profile,
            following_count: followee_ids.len() as u64,
            events: self.hydrate_events(events).await?,
        })
    }

    /// Attaches author profiles and game slugs/titles to events.
    pub async fn hydrate_events(&self, events: Vec<Event>) -> Result<Vec<EventView>, AppError> {
        let mut user_ids: Vec<String> = events.iter().filter_map(|e| e.user_id.clone()).collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let mut game_ids: Vec<i32> = events.iter().filter_map(|e| e.game_id).collect();
        game_ids.sort_unstable();
        game_ids.dedup();

        let profile_repo = ProfileRepository::new(self.db);
        let game_repo = GameRepository::new(self.db);
        let (profiles, games) = tokio::join!(
            profile_repo.find_by_user_ids(&user_ids),
            game_repo.find_by_ids(&game_ids),
        );
        let (profiles, games) = (profiles?, games?);

        let views = events
            .into_iter()
            .map(|event| {
                let author = event
                    .user_id
                    .as_deref()
                    .and_then(|id| profiles.iter().find(|p| p.user_id == id))
                    .cloned();
                let game = event
                    .game_id
                    .and_then(|id| games.iter().find(|g| g.id == id))
                    .map(|g| (g.slug.clone(), g.title.clone()));

                EventView {
                    event,
                    author,
                    game,
                }
            })
            .collect();

        Ok(views)
    }
}
