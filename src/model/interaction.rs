//! Discord interaction webhook payloads.
//!
//! Only the fields the dispatcher reads are modelled; everything else Discord
//! sends is ignored during deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Interaction type sent during the webhook handshake.
pub const INTERACTION_PING: u8 = 1;
/// Interaction type for a slash command invocation.
pub const INTERACTION_APPLICATION_COMMAND: u8 = 2;

/// Response type acknowledging a `PING`.
pub const RESPONSE_PONG: u8 = 1;
/// Response type replying with a chat message.
pub const RESPONSE_CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;

/// Message flag making a reply visible only to the invoking user.
pub const FLAG_EPHEMERAL: u64 = 1 << 6;

#[derive(Deserialize, Debug, Clone)]
pub struct InteractionDto {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub data: Option<CommandDataDto>,
    #[serde(default)]
    pub guild_id: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    /// Present when the command was invoked inside a guild.
    #[serde(default)]
    pub member: Option<InteractionMemberDto>,
    /// Present when the command was invoked in a DM.
    #[serde(default)]
    pub user: Option<InteractionUserDto>,
}

impl InteractionDto {
    /// Username of the invoking user, preferring the guild member payload.
    pub fn username(&self) -> Option<&str> {
        self.member
            .as_ref()
            .map(|m| m.user.username.as_str())
            .or_else(|| self.user.as_ref().map(|u| u.username.as_str()))
            .filter(|name| !name.is_empty())
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct InteractionMemberDto {
    pub user: InteractionUserDto,
}

#[derive(Deserialize, Debug, Clone)]
pub struct InteractionUserDto {
    pub username: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CommandDataDto {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOptionDto>,
}

impl CommandDataDto {
    fn option(&self, name: &str) -> Option<&Value> {
        self.options
            .iter()
            .find(|o| o.name == name)
            .and_then(|o| o.value.as_ref())
    }

    /// Returns a string option. Attachment options carry the attachment id
    /// as their value and are read through this method too.
    pub fn string_option(&self, name: &str) -> Option<String> {
        match self.option(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn bool_option(&self, name: &str) -> Option<bool> {
        self.option(name)?.as_bool()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CommandOptionDto {
    pub name: String,
    #[serde(default)]
    pub value: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct InteractionResponseDto {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<InteractionResponseDataDto>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct InteractionResponseDataDto {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub flags: Option<u64>,
}

impl InteractionResponseDto {
    pub fn pong() -> Self {
        Self {
            kind: RESPONSE_PONG,
            data: None,
        }
    }

    /// Builds a chat message reply, optionally visible only to the invoker.
    pub fn message(content: impl Into<String>, ephemeral: bool) -> Self {
        Self {
            kind: RESPONSE_CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(InteractionResponseDataDto {
                content: content.into(),
                flags: ephemeral.then_some(FLAG_EPHEMERAL),
            }),
        }
    }
}
