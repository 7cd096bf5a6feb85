use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordRoleAssignment::Table)
                    .if_not_exists()
                    .col(string(DiscordRoleAssignment::RoleId))
                    .col(string(DiscordRoleAssignment::GuildId))
                    .col(string(DiscordRoleAssignment::Username))
                    .col(string(DiscordRoleAssignment::RoleName))
                    .col(integer(DiscordRoleAssignment::RoleRank).default(0))
                    .col(timestamp_with_time_zone(DiscordRoleAssignment::CreatedAt))
                    .col(timestamp_with_time_zone(DiscordRoleAssignment::ModifiedAt))
                    .primary_key(
                        Index::create()
                            .name("pk_discord_role_assignment")
                            .col(DiscordRoleAssignment::RoleId)
                            .col(DiscordRoleAssignment::GuildId)
                            .col(DiscordRoleAssignment::Username),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordRoleAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordRoleAssignment {
    Table,
    RoleId,
    GuildId,
    Username,
    RoleName,
    RoleRank,
    CreatedAt,
    ModifiedAt,
}
