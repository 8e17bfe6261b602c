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
                    .table(PlayGuide::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayGuide::Id))
                    .col(integer(PlayGuide::GameId))
                    .col(string(PlayGuide::Title))
                    .col(text_null(PlayGuide::Summary))
                    .col(string(PlayGuide::FromPlatform))
                    .col(string(PlayGuide::ToPlatform))
                    .col(text(PlayGuide::Steps).default("[]"))
                    .col(
                        timestamp(PlayGuide::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_play_guide_game_id")
                            .from(PlayGuide::Table, PlayGuide::GameId)
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
            .drop_table(Table::drop().table(PlayGuide::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayGuide {
    Table,
    Id,
    GameId,
    Title,
    Summary,
    FromPlatform,
    ToPlatform,
    Steps,
    CreatedAt,
}
