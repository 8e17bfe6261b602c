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
                    .table(GameVersion::Table)
                    .if_not_exists()
                    .col(pk_auto(GameVersion::Id))
                    .col(integer(GameVersion::GameId))
                    .col(string(GameVersion::Version))
                    .col(text_null(GameVersion::Notes))
                    .col(
                        timestamp(GameVersion::ReleasedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_version_game_id")
                            .from(GameVersion::Table, GameVersion::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_version_game_version")
                    .table(GameVersion::Table)
                    .col(GameVersion::GameId)
                    .col(GameVersion::Version)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameVersion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameVersion {
    Table,
    Id,
    GameId,
    Version,
    Notes,
    ReleasedAt,
}
