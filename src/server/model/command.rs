/// Slash commands understood by the interaction dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    /// Reply with the bot's invite link.
    Invite,
    /// Register a game account for the invoking user.
    SelfId,
    /// List the invoking user's registered accounts.
    List,
    /// Designate the invoking channel as the guild's roles channel.
    Channel,
}

impl SlashCommand {
    pub const ALL: [SlashCommand; 4] = [Self::Invite, Self::SelfId, Self::List, Self::Channel];

    /// Resolves a command by name, case-insensitively. `id` is accepted as an
    /// alias of `self-id`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "invite" => Some(Self::Invite),
            "id" | "self-id" => Some(Self::SelfId),
            "list" => Some(Self::List),
            "channel" => Some(Self::Channel),
            _ => None,
        }
    }

    /// Name the command is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Invite => "invite",
            Self::SelfId => "self-id",
            Self::List => "list",
            Self::Channel => "channel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Invite => "Get the invite link for the bot.",
            Self::SelfId => "Register one of your game accounts.",
            Self::List => "List your registered accounts.",
            Self::Channel => "Select this channel for the bot to listen to.",
        }
    }
}
