use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "allowed_account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub friendcode: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub ign: String,
    pub discord_username: String,
    pub is_main: bool,
    pub screenshot_id: Option<String>,
    /// Either `command` (self-registered) or `scan` (derived from the roles channel).
    pub source: String,
    pub created_at: DateTimeUtc,
    pub modified_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
