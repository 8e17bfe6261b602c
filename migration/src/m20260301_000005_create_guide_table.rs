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
                    .table(Guide::Table)
                    .if_not_exists()
                    .col(pk_auto(Guide::Id))
                    .col(integer(Guide::GameId))
                    .col(string(Guide::Title))
                    .col(text(Guide::Content))
                    .col(string_null(Guide::CreatedBy))
                    .col(
                        timestamp(Guide::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guide_game_id")
                            .from(Guide::Table, Guide::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guide::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guide {
    Table,
    Id,
    GameId,
    Title,
    Content,
    CreatedBy,
    CreatedAt,
}
