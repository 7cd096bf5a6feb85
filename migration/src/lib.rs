pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_discord_guild_table;
mod m20261018_000002_create_allowed_account_table;
mod m20261018_000003_create_discord_role_assignment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_discord_guild_table::Migration),
            Box::new(m20261018_000002_create_allowed_account_table::Migration),
            Box::new(m20261018_000003_create_discord_role_assignment_table::Migration),
        ]
    }
}
