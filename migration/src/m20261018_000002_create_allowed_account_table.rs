use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AllowedAccount::Table)
                    .if_not_exists()
                    .col(string(AllowedAccount::Friendcode))
                    .col(string(AllowedAccount::GuildId))
                    .col(string(AllowedAccount::Ign))
                    .col(string(AllowedAccount::DiscordUsername))
                    .col(boolean(AllowedAccount::IsMain).default(false))
                    .col(string_null(AllowedAccount::ScreenshotId))
                    .col(string(AllowedAccount::Source))
                    .col(timestamp_with_time_zone(AllowedAccount::CreatedAt))
                    .col(timestamp_with_time_zone(AllowedAccount::ModifiedAt))
                    .primary_key(
                        Index::create()
                            .name("pk_allowed_account")
                            .col(AllowedAccount::Friendcode)
                            .col(AllowedAccount::GuildId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_allowed_account_username_guild")
                    .table(AllowedAccount::Table)
                    .col(AllowedAccount::DiscordUsername)
                    .col(AllowedAccount::GuildId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AllowedAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AllowedAccount {
    Table,
    Friendcode,
    GuildId,
    Ign,
    DiscordUsername,
    IsMain,
    ScreenshotId,
    Source,
    CreatedAt,
    ModifiedAt,
}
