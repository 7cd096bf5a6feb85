use serenity::async_trait;

use crate::server::error::AppError;

/// A role defined in a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRoleInfo {
    pub id: u64,
    pub name: String,
}

/// A guild member and the ids of the roles they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildMemberInfo {
    pub user_id: u64,
    pub username: String,
    pub role_ids: Vec<u64>,
}

/// A message posted in a guild channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    pub id: u64,
    pub content: String,
    pub author_username: String,
}

/// Read access to the Discord guild resources used by the bot.
#[async_trait]
pub trait GuildApi: Send + Sync {
    /// Fetches the display name of a guild.
    async fn fetch_guild_name(&self, guild_id: u64) -> Result<String, AppError>;

    /// Fetches every role defined in a guild.
    async fn fetch_roles(&self, guild_id: u64) -> Result<Vec<GuildRoleInfo>, AppError>;

    /// Fetches every member of a guild, following pagination to the end.
    async fn fetch_members(&self, guild_id: u64) -> Result<Vec<GuildMemberInfo>, AppError>;

    /// Fetches up to `limit` messages of a channel with an id greater than `after`.
    ///
    /// Pages are not guaranteed to be ordered; see [`super::MessagePager`] for
    /// walking a whole channel.
    async fn fetch_messages(
        &self,
        channel_id: u64,
        after: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError>;
}
