use sea_orm::DbErr;

/// A Discord guild known to the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuild {
    pub guild_id: u64,
    /// Guild display name, used by the public whitelist endpoint to select a guild.
    pub name: String,
    /// Channel scanned for `ID:`/`IGN:` messages, if one has been designated.
    pub roles_channel_id: Option<u64>,
}

impl DiscordGuild {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(DiscordGuild)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse guild_id or roles_channel_id as u64
    pub fn from_entity(entity: entity::discord_guild::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        let roles_channel_id = entity
            .roles_channel_id
            .map(|id| {
                id.parse::<u64>()
                    .map_err(|e| DbErr::Custom(format!("Failed to parse roles_channel_id: {}", e)))
            })
            .transpose()?;

        Ok(Self {
            guild_id,
            name: entity.name,
            roles_channel_id,
        })
    }
}
