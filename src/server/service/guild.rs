use sea_orm::DatabaseConnection;

use crate::server::{
    data::DiscordGuildRepository, discord::GuildApi, error::AppError, model::guild::DiscordGuild,
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
    api: &'a dyn GuildApi,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection, api: &'a dyn GuildApi) -> Self {
        Self { db, api }
    }

    /// Returns the stored guild, registering it first if it is unseen.
    ///
    /// The guild name is only fetched from Discord for unseen guilds.
    pub async fn ensure_registered(&self, guild_id: u64) -> Result<DiscordGuild, AppError> {
        let repo = DiscordGuildRepository::new(self.db);

        if let Some(guild) = repo.find_by_guild_id(guild_id).await? {
            return Ok(guild);
        }

        let name = self.api.fetch_guild_name(guild_id).await?;

        if repo.insert_if_missing(guild_id, &name).await? {
            tracing::info!("Registered guild {} ({})", name, guild_id);
        }

        repo.find_by_guild_id(guild_id).await?.ok_or_else(|| {
            AppError::InternalError(format!("Guild {} missing after registration", guild_id))
        })
    }

    /// Designates `channel_id` as the guild's roles channel.
    pub async fn set_roles_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<DiscordGuild, AppError> {
        let guild = self.ensure_registered(guild_id).await?;

        let guild = DiscordGuildRepository::new(self.db)
            .set_roles_channel(guild_id, &guild.name, channel_id)
            .await?;

        tracing::info!(
            "Guild {} ({}) now scans channel {}",
            guild.name,
            guild_id,
            channel_id
        );

        Ok(guild)
    }
}
