use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User,
    m20260301_000004_create_community_table::Community,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserCommunity::Table)
                    .if_not_exists()
                    .col(string(UserCommunity::UserId))
                    .col(integer(UserCommunity::CommunityId))
                    .col(
                        timestamp(UserCommunity::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserCommunity::UserId)
                            .col(UserCommunity::CommunityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_community_user_id")
                            .from(UserCommunity::Table, UserCommunity::UserId)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_community_community_id")
                            .from(UserCommunity::Table, UserCommunity::CommunityId)
                            .to(Community::Table, Community::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserCommunity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserCommunity {
    Table,
    UserId,
    CommunityId,
    JoinedAt,
}
