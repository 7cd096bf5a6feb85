use sea_orm::DatabaseConnection;

use crate::server::{
    data::{AllowedAccountRepository, DiscordGuildRepository, RoleAssignmentRepository},
    error::AppError,
    model::{account::AccountListing, role_table::RoleTable},
    service::role_filter::has_valid_role,
};

/// Minimum role value that disables role filtering.
const ALL_ROLES: &str = "all";

pub const NO_ACCOUNTS_MESSAGE: &str = "No accounts registered.";
const NO_ROLE: &str = "No-role";

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a user's accounts in a guild along with their highest stored role.
    pub async fn list_for_user(
        &self,
        username: &str,
        guild_id: u64,
    ) -> Result<AccountListing, AppError> {
        tracing::debug!("Listing accounts of {} in guild {}", username, guild_id);

        let accounts = AllowedAccountRepository::new(self.db)
            .get_by_username_and_guild(username, guild_id, None)
            .await?;

        let highest_role = RoleAssignmentRepository::new(self.db)
            .get_highest_by_username_and_guild(username, guild_id)
            .await?;

        Ok(AccountListing {
            accounts,
            highest_role,
        })
    }

    /// Friend codes for the public whitelist.
    ///
    /// Without `server_name` every stored friend code is returned. With it, only
    /// the named guild's accounts are returned, filtered by `minimum_role` unless
    /// that is absent or `all`.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Friend codes passing the filter
    /// - `Err(AppError::NotFound)` - `server_name` matches no known guild
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn whitelist(
        &self,
        server_name: Option<&str>,
        minimum_role: Option<&str>,
        role_table: &RoleTable,
    ) -> Result<Vec<String>, AppError> {
        let account_repo = AllowedAccountRepository::new(self.db);

        let Some(server_name) = server_name else {
            let accounts = account_repo.get_all().await?;
            return Ok(accounts.into_iter().map(|a| a.friendcode).collect());
        };

        let guild = DiscordGuildRepository::new(self.db)
            .find_by_name(server_name)
            .await?
            .ok_or_else(|| AppError::NotFound("Discord server not found".to_string()))?;

        let accounts = account_repo.get_by_guild(guild.guild_id).await?;

        let minimum_role = match minimum_role {
            Some(role) if !role.eq_ignore_ascii_case(ALL_ROLES) => role,
            _ => return Ok(accounts.into_iter().map(|a| a.friendcode).collect()),
        };

        let roles = RoleAssignmentRepository::new(self.db)
            .get_by_guild(guild.guild_id)
            .await?;

        let total = accounts.len();
        let friendcodes: Vec<String> = accounts
            .into_iter()
            .filter(|a| {
                has_valid_role(
                    role_table,
                    guild.guild_id,
                    &a.discord_username,
                    &roles,
                    minimum_role,
                )
            })
            .map(|a| a.friendcode)
            .collect();

        tracing::debug!(
            "Whitelist for {} at minimum role {}: {} of {} accounts",
            guild.name,
            minimum_role,
            friendcodes.len(),
            total
        );

        Ok(friendcodes)
    }
}

/// Renders an account listing as the chat reply for the `list` command.
pub fn format_listing(listing: &AccountListing) -> String {
    if listing.accounts.is_empty() {
        return NO_ACCOUNTS_MESSAGE.to_string();
    }

    let role_name = listing
        .highest_role
        .as_ref()
        .map(|r| r.role_name.as_str())
        .unwrap_or(NO_ROLE);

    let mut lines = vec![format!(
        "Here are your active accounts, maximum role is: {}",
        role_name
    )];

    lines.extend(listing.accounts.iter().enumerate().map(|(i, account)| {
        format!(
            "{}. {} - IGN: {} | Friend code: {}",
            i + 1,
            if account.is_main { "Main" } else { "Alt" },
            account.ign,
            account.friendcode
        )
    }));

    lines.join("\n")
}
