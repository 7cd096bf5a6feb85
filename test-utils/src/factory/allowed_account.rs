//! Allowed account factory for creating test account rows.

use crate::{factory::helpers::next_friendcode, fixture};
use entity::allowed_account;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inserting allowed accounts with customizable fields.
///
/// Defaults are sourced from `fixture::allowed_account::entity()`, except the
/// friend code which is unique per factory so several accounts can be created
/// in the same guild without tripping the primary key.
///
/// # Example
///
/// ```rust,ignore
/// let account = AllowedAccountFactory::new(&db)
///     .discord_username("misty")
///     .is_main(true)
///     .build()
///     .await?;
/// ```
pub struct AllowedAccountFactory<'a> {
    db: &'a DatabaseConnection,
    entity: allowed_account::Model,
}

impl<'a> AllowedAccountFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::allowed_account::entity_builder()
            .friendcode(next_friendcode())
            .build();

        Self { db, entity }
    }

    pub fn friendcode(mut self, friendcode: impl Into<String>) -> Self {
        self.entity.friendcode = friendcode.into();
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.entity.guild_id = guild_id.into();
        self
    }

    pub fn ign(mut self, ign: impl Into<String>) -> Self {
        self.entity.ign = ign.into();
        self
    }

    pub fn discord_username(mut self, username: impl Into<String>) -> Self {
        self.entity.discord_username = username.into();
        self
    }

    pub fn is_main(mut self, is_main: bool) -> Self {
        self.entity.is_main = is_main;
        self
    }

    /// Marks the account as derived from the roles channel scan.
    pub fn scanned(mut self) -> Self {
        self.entity.source = "scan".to_string();
        self.entity.screenshot_id = None;
        self
    }

    /// Builds and inserts the account.
    ///
    /// # Returns
    /// - `Ok(allowed_account::Model)` - Created account row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<allowed_account::Model, DbErr> {
        allowed_account::ActiveModel {
            friendcode: ActiveValue::Set(self.entity.friendcode),
            guild_id: ActiveValue::Set(self.entity.guild_id),
            ign: ActiveValue::Set(self.entity.ign),
            discord_username: ActiveValue::Set(self.entity.discord_username),
            is_main: ActiveValue::Set(self.entity.is_main),
            screenshot_id: ActiveValue::Set(self.entity.screenshot_id),
            source: ActiveValue::Set(self.entity.source),
            created_at: ActiveValue::Set(self.entity.created_at),
            modified_at: ActiveValue::Set(self.entity.modified_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an allowed account with default values.
pub async fn create_account(db: &DatabaseConnection) -> Result<allowed_account::Model, DbErr> {
    AllowedAccountFactory::new(db).build().await
}
