use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string_uniq(Game::Slug))
                    .col(string(Game::Title))
                    .col(text_null(Game::Description))
                    .col(string_null(Game::CoverUrl))
                    .col(text(Game::Platforms).default("[]"))
                    .col(text(Game::Genres).default("[]"))
                    .col(text(Game::Tags).default("[]"))
                    .col(
                        timestamp(Game::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_created_at")
                    .table(Game::Table)
                    .col(Game::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    Slug,
    Title,
    Description,
    CoverUrl,
    Platforms,
    Genres,
    Tags,
    CreatedAt,
}
