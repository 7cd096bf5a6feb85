//! Allowed account repository for database operations.
//!
//! This module provides the `AllowedAccountRepository` for the `allowed_account` table:
//! lookups by guild, by owner and by friend code, the insert-or-ignore used by
//! self-registration, and the full replace of scan-derived rows used by the refresh job.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::account::{AccountSource, AllowedAccount, CreateAccountParams};

/// Repository for allowed account database operations.
pub struct AllowedAccountRepository<'a, C: ConnectionTrait> {
    /// Connection or transaction for executing queries.
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AllowedAccountRepository<'a, C> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or transaction for executing queries
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every stored account across all guilds.
    pub async fn get_all(&self) -> Result<Vec<AllowedAccount>, DbErr> {
        entity::prelude::AllowedAccount::find()
            .order_by_asc(entity::allowed_account::Column::GuildId)
            .order_by_asc(entity::allowed_account::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(AllowedAccount::from_entity)
            .collect()
    }

    /// Returns every account registered in a guild.
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<AllowedAccount>, DbErr> {
        entity::prelude::AllowedAccount::find()
            .filter(entity::allowed_account::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::allowed_account::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(AllowedAccount::from_entity)
            .collect()
    }

    /// Returns a user's accounts in a guild, mains first.
    ///
    /// # Arguments
    /// - `username` - Discord username owning the accounts
    /// - `guild_id` - Guild to search in
    /// - `is_main` - `Some` to restrict to mains or alts, `None` for both
    pub async fn get_by_username_and_guild(
        &self,
        username: &str,
        guild_id: u64,
        is_main: Option<bool>,
    ) -> Result<Vec<AllowedAccount>, DbErr> {
        let mut query = entity::prelude::AllowedAccount::find()
            .filter(entity::allowed_account::Column::DiscordUsername.eq(username))
            .filter(entity::allowed_account::Column::GuildId.eq(guild_id.to_string()));

        if let Some(is_main) = is_main {
            query = query.filter(entity::allowed_account::Column::IsMain.eq(is_main));
        }

        query
            .order_by_desc(entity::allowed_account::Column::IsMain)
            .order_by_asc(entity::allowed_account::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(AllowedAccount::from_entity)
            .collect()
    }

    /// Finds the account using `friendcode` in a guild, whoever owns it.
    pub async fn find_by_friendcode_and_guild(
        &self,
        friendcode: &str,
        guild_id: u64,
    ) -> Result<Option<AllowedAccount>, DbErr> {
        entity::prelude::AllowedAccount::find()
            .filter(entity::allowed_account::Column::Friendcode.eq(friendcode))
            .filter(entity::allowed_account::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(AllowedAccount::from_entity)
            .transpose()
    }

    /// Inserts an account unless `(friendcode, guild_id)` already exists.
    ///
    /// Both timestamps are set to the current time.
    ///
    /// # Returns
    /// - `Ok(true)` - Row inserted
    /// - `Ok(false)` - A row with the same key already existed, nothing written
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_ignore(&self, params: &CreateAccountParams) -> Result<bool, DbErr> {
        let now = Utc::now();

        let rows = entity::prelude::AllowedAccount::insert(entity::allowed_account::ActiveModel {
            friendcode: ActiveValue::Set(params.friendcode.clone()),
            guild_id: ActiveValue::Set(params.guild_id.to_string()),
            ign: ActiveValue::Set(params.ign.clone()),
            discord_username: ActiveValue::Set(params.discord_username.clone()),
            is_main: ActiveValue::Set(params.is_main),
            screenshot_id: ActiveValue::Set(params.screenshot_id.clone()),
            source: ActiveValue::Set(params.source.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            modified_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::allowed_account::Column::Friendcode,
                entity::allowed_account::Column::GuildId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(rows > 0)
    }

    /// Deletes every scan-derived account of a guild.
    ///
    /// Self-registered accounts are left untouched.
    pub async fn delete_scanned_by_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::AllowedAccount::delete_many()
            .filter(entity::allowed_account::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::allowed_account::Column::Source.eq(AccountSource::Scan.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Replaces the scan-derived accounts of a guild with `accounts`.
    ///
    /// Deletes the existing scan rows, then inserts each account with
    /// insert-or-ignore semantics, so a friend code that is already
    /// self-registered in the guild keeps its existing row.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows actually inserted
    /// - `Err(DbErr)` - Database error during deletion or insertion
    pub async fn replace_scanned(
        &self,
        guild_id: u64,
        accounts: &[CreateAccountParams],
    ) -> Result<u64, DbErr> {
        self.delete_scanned_by_guild(guild_id).await?;

        let mut inserted = 0;
        for account in accounts {
            if self.insert_ignore(account).await? {
                inserted += 1;
            }
        }

        Ok(inserted)
    }
}
