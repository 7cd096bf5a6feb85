//! Role assignment repository for database operations.
//!
//! This module provides the `RoleAssignmentRepository` for the snapshot of which
//! user holds which role in each guild. The snapshot is replaced wholesale on every
//! scheduled refresh and read by the account listing and the whitelist filter.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::role::RoleAssignment;

/// Rows per multi-row INSERT, kept well under SQLite's bound parameter limit.
const INSERT_CHUNK_SIZE: usize = 500;

/// Repository for role assignment snapshot operations.
pub struct RoleAssignmentRepository<'a, C: ConnectionTrait> {
    /// Connection or transaction for executing queries.
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleAssignmentRepository<'a, C> {
    /// Creates a new repository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every role assignment stored for a guild.
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<RoleAssignment>, DbErr> {
        entity::prelude::DiscordRoleAssignment::find()
            .filter(entity::discord_role_assignment::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?
            .into_iter()
            .map(RoleAssignment::from_entity)
            .collect()
    }

    /// Returns the user's assignment with the highest stored rank.
    ///
    /// Ties are broken by row order.
    ///
    /// # Returns
    /// - `Ok(Some(RoleAssignment))` - Highest ranked assignment
    /// - `Ok(None)` - The user holds no stored roles in the guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_highest_by_username_and_guild(
        &self,
        username: &str,
        guild_id: u64,
    ) -> Result<Option<RoleAssignment>, DbErr> {
        entity::prelude::DiscordRoleAssignment::find()
            .filter(entity::discord_role_assignment::Column::Username.eq(username))
            .filter(entity::discord_role_assignment::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::discord_role_assignment::Column::RoleRank)
            .one(self.db)
            .await?
            .map(RoleAssignment::from_entity)
            .transpose()
    }

    /// Deletes every assignment stored for a guild.
    pub async fn delete_by_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::DiscordRoleAssignment::delete_many()
            .filter(entity::discord_role_assignment::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Replaces the guild's snapshot with `assignments`.
    ///
    /// Two-step operation: deletes every stored assignment of the guild, then
    /// inserts the new set. Duplicate `(role, guild, user)` entries in the input
    /// collapse into one row. Callers wanting readers to never observe the empty
    /// intermediate state run this inside a transaction.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows written
    /// - `Err(DbErr)` - Database error during deletion or insertion
    pub async fn replace_for_guild(
        &self,
        guild_id: u64,
        assignments: &[RoleAssignment],
    ) -> Result<u64, DbErr> {
        self.delete_by_guild(guild_id).await?;

        let now = Utc::now();
        let mut written = 0;

        for chunk in assignments.chunks(INSERT_CHUNK_SIZE) {
            let models = chunk
                .iter()
                .map(|a| entity::discord_role_assignment::ActiveModel {
                    role_id: ActiveValue::Set(a.role_id.to_string()),
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    username: ActiveValue::Set(a.username.clone()),
                    role_name: ActiveValue::Set(a.role_name.clone()),
                    role_rank: ActiveValue::Set(a.role_rank),
                    created_at: ActiveValue::Set(now),
                    modified_at: ActiveValue::Set(now),
                });

            written += entity::prelude::DiscordRoleAssignment::insert_many(models)
                .on_conflict(
                    OnConflict::columns([
                        entity::discord_role_assignment::Column::RoleId,
                        entity::discord_role_assignment::Column::GuildId,
                        entity::discord_role_assignment::Column::Username,
                    ])
                    .update_columns([
                        entity::discord_role_assignment::Column::RoleName,
                        entity::discord_role_assignment::Column::RoleRank,
                        entity::discord_role_assignment::Column::ModifiedAt,
                    ])
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(written)
    }
}
