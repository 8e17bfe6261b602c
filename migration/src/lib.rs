pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_profile_table;
mod m20260301_000003_create_game_table;
mod m20260301_000004_create_community_table;
mod m20260301_000005_create_guide_table;
mod m20260301_000006_create_play_guide_table;
mod m20260301_000007_create_player_table;
mod m20260301_000008_create_user_game_table;
mod m20260301_000009_create_user_community_table;
mod m20260301_000010_create_follow_table;
mod m20260302_000011_create_game_version_table;
mod m20260302_000012_create_event_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_profile_table::Migration),
            Box::new(m20260301_000003_create_game_table::Migration),
            Box::new(m20260301_000004_create_community_table::Migration),
            Box::new(m20260301_000005_create_guide_table::Migration),
            Box::new(m20260301_000006_create_play_guide_table::Migration),
            Box::new(m20260301_000007_create_player_table::Migration),
            Box::new(m20260301_000008_create_user_game_table::Migration),
            Box::new(m20260301_000009_create_user_community_table::Migration),
            Box::new(m20260301_000010_create_follow_table::Migration),
            Box::new(m20260302_000011_create_game_version_table::Migration),
            Box::new(m20260302_000012_create_event_table::Migration),
        ]
    }
}
