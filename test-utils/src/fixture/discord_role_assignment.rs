//! Fixture for Discord role assignment test data.

use chrono::Utc;
use entity::discord_role_assignment;

/// Default test role ID.
pub const DEFAULT_ROLE_ID: &str = "987654321";

/// Default test guild ID.
pub const DEFAULT_GUILD_ID: &str = "1310093045726969977";

/// Default test username.
pub const DEFAULT_USERNAME: &str = "ash";

/// Creates a role assignment entity model with default values.
///
/// Defaults to the `great ball` role with rank 2.
pub fn entity() -> discord_role_assignment::Model {
    entity_builder().build()
}

/// Creates a customizable role assignment entity builder.
pub fn entity_builder() -> DiscordRoleAssignmentEntityBuilder {
    DiscordRoleAssignmentEntityBuilder::default()
}

/// Builder for role assignment entity models.
pub struct DiscordRoleAssignmentEntityBuilder {
    model: discord_role_assignment::Model,
}

impl Default for DiscordRoleAssignmentEntityBuilder {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            model: discord_role_assignment::Model {
                role_id: DEFAULT_ROLE_ID.to_string(),
                guild_id: DEFAULT_GUILD_ID.to_string(),
                username: DEFAULT_USERNAME.to_string(),
                role_name: "Great Ball".to_string(),
                role_rank: 2,
                created_at: now,
                modified_at: now,
            },
        }
    }
}

impl DiscordRoleAssignmentEntityBuilder {
    pub fn role_id(mut self, role_id: impl Into<String>) -> Self {
        self.model.role_id = role_id.into();
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.model.guild_id = guild_id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.model.username = username.into();
        self
    }

    pub fn role_name(mut self, role_name: impl Into<String>) -> Self {
        self.model.role_name = role_name.into();
        self
    }

    pub fn role_rank(mut self, role_rank: i32) -> Self {
        self.model.role_rank = role_rank;
        self
    }

    pub fn build(self) -> discord_role_assignment::Model {
        self.model
    }
}
