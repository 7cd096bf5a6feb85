//! Fixture for Discord guild test data.

use entity::discord_guild;

/// Default test guild ID.
pub const DEFAULT_GUILD_ID: &str = "1310093045726969977";

/// Default test guild name.
pub const DEFAULT_GUILD_NAME: &str = "Pallet Town";

/// Default test roles channel ID.
pub const DEFAULT_ROLES_CHANNEL_ID: &str = "1320000000000000001";

/// Creates a Discord guild entity model with default values.
pub fn entity() -> discord_guild::Model {
    entity_builder().build()
}

/// Creates a customizable Discord guild entity builder.
pub fn entity_builder() -> DiscordGuildEntityBuilder {
    DiscordGuildEntityBuilder::default()
}

/// Builder for Discord guild entity models.
pub struct DiscordGuildEntityBuilder {
    guild_id: String,
    name: String,
    roles_channel_id: Option<String>,
}

impl Default for DiscordGuildEntityBuilder {
    fn default() -> Self {
        Self {
            guild_id: DEFAULT_GUILD_ID.to_string(),
            name: DEFAULT_GUILD_NAME.to_string(),
            roles_channel_id: Some(DEFAULT_ROLES_CHANNEL_ID.to_string()),
        }
    }
}

impl DiscordGuildEntityBuilder {
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn roles_channel_id(mut self, channel_id: Option<String>) -> Self {
        self.roles_channel_id = channel_id;
        self
    }

    pub fn build(self) -> discord_guild::Model {
        discord_guild::Model {
            guild_id: self.guild_id,
            name: self.name,
            roles_channel_id: self.roles_channel_id,
        }
    }
}
