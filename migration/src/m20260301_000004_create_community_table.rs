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
                    .table(Community::Table)
                    .if_not_exists()
                    .col(pk_auto(Community::Id))
                    .col(integer(Community::GameId))
                    .col(string(Community::Name))
                    .col(string(Community::InviteUrl))
                    .col(string_null(Community::Category))
                    .col(string_null(Community::Language))
                    .col(integer(Community::OnlineCount).default(0))
                    .col(
                        timestamp(Community::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_community_game_id")
                            .from(Community::Table, Community::GameId)
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
            .drop_table(Table::drop().table(Community::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Community {
    Table,
    Id,
    GameId,
    Name,
    InviteUrl,
    Category,
    Language,
    OnlineCount,
    CreatedAt,
}
