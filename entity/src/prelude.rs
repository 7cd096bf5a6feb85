pub use super::allowed_account::Entity as AllowedAccount;
pub use super::discord_guild::Entity as DiscordGuild;
pub use super::discord_role_assignment::Entity as DiscordRoleAssignment;
