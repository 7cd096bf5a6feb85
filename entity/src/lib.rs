pub mod prelude;

pub mod allowed_account;
pub mod discord_guild;
pub mod discord_role_assignment;
