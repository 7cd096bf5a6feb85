//! Factory for creating role assignment test rows.

use crate::fixture;
use entity::discord_role_assignment;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inserting role assignments with custom values.
///
/// Default values are sourced from the discord_role_assignment fixture; the
/// role, guild and user are set from the constructor arguments.
pub struct DiscordRoleAssignmentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: discord_role_assignment::Model,
}

impl<'a> DiscordRoleAssignmentFactory<'a> {
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Discord guild ID
    /// - `username` - Discord username holding the role
    /// - `role_id` - Discord role ID
    pub fn new(db: &'a DatabaseConnection, guild_id: &str, username: &str, role_id: u64) -> Self {
        let entity = fixture::discord_role_assignment::entity_builder()
            .guild_id(guild_id)
            .username(username)
            .role_id(role_id.to_string())
            .build();

        Self { db, entity }
    }

    pub fn role_name(mut self, role_name: impl Into<String>) -> Self {
        self.entity.role_name = role_name.into();
        self
    }

    pub fn role_rank(mut self, role_rank: i32) -> Self {
        self.entity.role_rank = role_rank;
        self
    }

    /// Builds and inserts the role assignment.
    pub async fn build(self) -> Result<discord_role_assignment::Model, DbErr> {
        discord_role_assignment::ActiveModel {
            role_id: ActiveValue::Set(self.entity.role_id),
            guild_id: ActiveValue::Set(self.entity.guild_id),
            username: ActiveValue::Set(self.entity.username),
            role_name: ActiveValue::Set(self.entity.role_name),
            role_rank: ActiveValue::Set(self.entity.role_rank),
            created_at: ActiveValue::Set(self.entity.created_at),
            modified_at: ActiveValue::Set(self.entity.modified_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role assignment with the given name and rank.
///
/// # Example
/// ```rust,ignore
/// factory::create_role_assignment(&db, "1310093045726969977", "ash", 42, "Ultra Ball", 3).await?;
/// ```
pub async fn create_role_assignment(
    db: &DatabaseConnection,
    guild_id: &str,
    username: &str,
    role_id: u64,
    role_name: &str,
    role_rank: i32,
) -> Result<discord_role_assignment::Model, DbErr> {
    DiscordRoleAssignmentFactory::new(db, guild_id, username, role_id)
        .role_name(role_name)
        .role_rank(role_rank)
        .build()
        .await
}
