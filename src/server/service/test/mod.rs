use crate::server::model::user::User;
use sea_orm::{DatabaseConnection, DbErr};

mod feed;
mod game;
mod profile;

/// Inserts a Discord user and returns it as a domain model.
async fn create_domain_user(db: &DatabaseConnection, name: &str) -> Result<User, DbErr> {
    let entity = test_utils::factory::user::UserFactory::new(db)
        .name(name)
        .build()
        .await?;

    Ok(User::from_entity(entity))
}
