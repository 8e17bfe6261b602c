//! Play guide factory for creating test cross-platform guide entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::prelude::StringList;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a play guide from PC to PlayStation for the given game.
///
/// # Returns
/// - `Ok(entity::play_guide::Model)` - Created play guide
/// - `Err(DbErr)` - Database error during insert
pub async fn create_play_guide(
    db: &DatabaseConnection,
    game_id: i32,
) -> Result<entity::play_guide::Model, DbErr> {
    let id = next_id();
    entity::play_guide::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        title: ActiveValue::Set(format!("Crossplay {}", id)),
        summary: ActiveValue::Set(Some("Play together across platforms".to_string())),
        from_platform: ActiveValue::Set("pc".to_string()),
        to_platform: ActiveValue::Set("playstation".to_string()),
        steps: ActiveValue::Set(StringList::from(vec![
            "Link your account",
            "Enable crossplay",
        ])),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
