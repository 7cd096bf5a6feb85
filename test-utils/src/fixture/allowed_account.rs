//! Fixture for allowed account test data.

use chrono::Utc;
use entity::allowed_account;

/// Default test friend code (16 digits).
pub const DEFAULT_FRIENDCODE: &str = "1234567890123456";

/// Default test guild ID.
pub const DEFAULT_GUILD_ID: &str = "1310093045726969977";

/// Default test Discord username.
pub const DEFAULT_USERNAME: &str = "ash";

/// Creates an allowed account entity model with default values.
///
/// Returns a self-registered alt account owned by [`DEFAULT_USERNAME`].
pub fn entity() -> allowed_account::Model {
    entity_builder().build()
}

/// Creates a customizable allowed account entity builder.
///
/// # Example
/// ```rust,ignore
/// let entity = fixture::allowed_account::entity_builder()
///     .friendcode("6543210987654321")
///     .is_main(true)
///     .build();
/// ```
pub fn entity_builder() -> AllowedAccountEntityBuilder {
    AllowedAccountEntityBuilder::default()
}

/// Builder for allowed account entity models.
pub struct AllowedAccountEntityBuilder {
    model: allowed_account::Model,
}

impl Default for AllowedAccountEntityBuilder {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            model: allowed_account::Model {
                friendcode: DEFAULT_FRIENDCODE.to_string(),
                guild_id: DEFAULT_GUILD_ID.to_string(),
                ign: "Ash".to_string(),
                discord_username: DEFAULT_USERNAME.to_string(),
                is_main: false,
                screenshot_id: Some("1111111111111111111".to_string()),
                source: "command".to_string(),
                created_at: now,
                modified_at: now,
            },
        }
    }
}

impl AllowedAccountEntityBuilder {
    pub fn friendcode(mut self, friendcode: impl Into<String>) -> Self {
        self.model.friendcode = friendcode.into();
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.model.guild_id = guild_id.into();
        self
    }

    pub fn ign(mut self, ign: impl Into<String>) -> Self {
        self.model.ign = ign.into();
        self
    }

    pub fn discord_username(mut self, username: impl Into<String>) -> Self {
        self.model.discord_username = username.into();
        self
    }

    pub fn is_main(mut self, is_main: bool) -> Self {
        self.model.is_main = is_main;
        self
    }

    pub fn screenshot_id(mut self, screenshot_id: Option<String>) -> Self {
        self.model.screenshot_id = screenshot_id;
        self
    }

    /// Sets the row source, `command` or `scan`.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.model.source = source.into();
        self
    }

    pub fn build(self) -> allowed_account::Model {
        self.model
    }
}
