use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_game_table::Game;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string_null(Event::UserId))
                    .col(integer_null(Event::GameId))
                    .col(string_len(Event::Kind, 32))
                    .col(string(Event::Title))
                    .col(text_null(Event::Description))
                    .col(
                        timestamp(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_game_id")
                            .from(Event::Table, Event::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_user_created_at")
                    .table(Event::Table)
                    .col(Event::UserId)
                    .col(Event::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    UserId,
    GameId,
    Kind,
    Title,
    Description,
    CreatedAt,
}
