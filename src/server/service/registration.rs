//! Self-registration of game accounts.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::account::AllowedAccountRepository,
    error::{registration::RegistrationError, AppError},
    model::account::{AccountSource, CreateAccountParams, RegisterAccountParams},
    util::parse::is_valid_friendcode,
};

/// Maximum number of non-main accounts per user and guild.
pub const MAX_ALTS: usize = 3;

pub const REGISTERED_MESSAGE: &str = "Account registered correctly";

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a game account for the invoking user.
    ///
    /// Checks run in a fixed order so the user sees the most relevant message:
    /// input validation, then the main-account or alt limit, then friend code
    /// uniqueness within the guild.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation message for the user
    /// - `Err(AppError::RegistrationErr)` - Input or business rule rejected
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterAccountParams) -> Result<String, AppError> {
        tracing::info!(
            "Self registering {} in guild {}: ign={} main={:?}",
            params.discord_username,
            params.guild_id,
            params.ign,
            params.is_main
        );

        let is_main = validate(&params)?;
        let repo = AllowedAccountRepository::new(self.db);

        let same_kind = repo
            .get_by_username_and_guild(&params.discord_username, params.guild_id, Some(is_main))
            .await?;

        if is_main && !same_kind.is_empty() {
            return Err(RegistrationError::MainAlreadySet.into());
        }
        if !is_main && same_kind.len() >= MAX_ALTS {
            return Err(RegistrationError::TooManyAlts(MAX_ALTS).into());
        }

        if repo
            .find_by_friendcode_and_guild(&params.friendcode, params.guild_id)
            .await?
            .is_some()
        {
            return Err(RegistrationError::FriendcodeTaken.into());
        }

        let inserted = repo
            .insert_ignore(&CreateAccountParams {
                friendcode: params.friendcode.clone(),
                guild_id: params.guild_id,
                ign: params.ign.trim().to_string(),
                discord_username: params.discord_username.clone(),
                is_main,
                screenshot_id: Some(params.screenshot_id),
                source: AccountSource::Command,
            })
            .await?;

        if !inserted {
            tracing::warn!(
                "Friend code {} was registered concurrently in guild {}",
                params.friendcode,
                params.guild_id
            );
        }

        Ok(REGISTERED_MESSAGE.to_string())
    }
}

/// Validates raw registration input, returning the main-account flag.
pub fn validate(params: &RegisterAccountParams) -> Result<bool, RegistrationError> {
    let Some(is_main) = params.is_main else {
        return Err(RegistrationError::MissingFields);
    };

    if params.ign.trim().is_empty()
        || params.friendcode.is_empty()
        || params.screenshot_id.is_empty()
    {
        return Err(RegistrationError::MissingFields);
    }

    if !is_valid_friendcode(&params.friendcode) {
        return Err(RegistrationError::InvalidFriendcode);
    }

    Ok(is_main)
}
