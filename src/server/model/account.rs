use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// Where an allowed account row came from.
///
/// The scheduled channel scan only ever replaces rows it created itself, so
/// self-registered accounts survive every refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSource {
    /// Created through the self-registration slash command.
    Command,
    /// Derived from a message in the guild's roles channel.
    Scan,
}

impl AccountSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Scan => "scan",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DbErr> {
        match value {
            "command" => Ok(Self::Command),
            "scan" => Ok(Self::Scan),
            other => Err(DbErr::Custom(format!("Unknown account source: {}", other))),
        }
    }
}

/// A game account registered to a Discord user within a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct AllowedAccount {
    /// 16 digit friend code, unique per guild.
    pub friendcode: String,
    pub guild_id: u64,
    pub ign: String,
    pub discord_username: String,
    pub is_main: bool,
    /// Attachment id of the screenshot proving ownership, absent for scanned rows.
    pub screenshot_id: Option<String>,
    pub source: AccountSource,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl AllowedAccount {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(AllowedAccount)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse guild_id or source
    pub fn from_entity(entity: entity::allowed_account::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            friendcode: entity.friendcode,
            guild_id,
            ign: entity.ign,
            discord_username: entity.discord_username,
            is_main: entity.is_main,
            screenshot_id: entity.screenshot_id,
            source: AccountSource::parse(&entity.source)?,
            created_at: entity.created_at,
            modified_at: entity.modified_at,
        })
    }
}

/// Parameters for inserting a new allowed account.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAccountParams {
    pub friendcode: String,
    pub guild_id: u64,
    pub ign: String,
    pub discord_username: String,
    pub is_main: bool,
    pub screenshot_id: Option<String>,
    pub source: AccountSource,
}

/// Raw self-registration input as received from the slash command.
///
/// Missing options arrive as empty strings (or `None` for `is_main`) and are
/// rejected by validation rather than by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterAccountParams {
    pub discord_username: String,
    pub guild_id: u64,
    pub ign: String,
    pub friendcode: String,
    pub is_main: Option<bool>,
    pub screenshot_id: String,
}

/// A user's accounts in one guild together with their highest stored role.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountListing {
    pub accounts: Vec<AllowedAccount>,
    pub highest_role: Option<super::role::RoleAssignment>,
}
