//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a profile.
///
/// # Returns
/// - `Ok((user, profile))` - Created user and profile entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_profile(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::profile::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let profile = crate::factory::profile::create_profile(db, &user.discord_id).await?;

    Ok((user, profile))
}

/// Creates a game with one community, guide, play guide and player attached.
///
/// # Returns
/// - `Ok((game, user))` - The game and the user backing its player row
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::game::Model, entity::user::Model), DbErr> {
    let game = crate::factory::game::create_game(db).await?;
    let user = crate::factory::user::create_user(db).await?;

    crate::factory::community::create_community(db, game.id).await?;
    crate::factory::guide::create_guide(db, game.id).await?;
    crate::factory::play_guide::create_play_guide(db, game.id).await?;
    crate::factory::player::create_player(db, &user.discord_id, game.id).await?;

    Ok((game, user))
}
