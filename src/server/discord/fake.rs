//! In-memory [`GuildApi`] for tests.

use std::{
    collections::{HashMap, HashSet},
    sync::atomic::{AtomicUsize, Ordering},
};

use serenity::async_trait;

use super::api::{ChannelMessage, GuildApi, GuildMemberInfo, GuildRoleInfo};
use crate::server::error::AppError;

#[derive(Default)]
pub struct FakeGuildApi {
    names: HashMap<u64, String>,
    roles: HashMap<u64, Vec<GuildRoleInfo>>,
    members: HashMap<u64, Vec<GuildMemberInfo>>,
    messages: HashMap<u64, Vec<ChannelMessage>>,
    failing_guilds: HashSet<u64>,
    repeat_pages: bool,
    name_requests: AtomicUsize,
    message_requests: AtomicUsize,
}

impl FakeGuildApi {
    pub fn with_guild(mut self, guild_id: u64, name: &str) -> Self {
        self.names.insert(guild_id, name.to_string());
        self
    }

    pub fn with_role(mut self, guild_id: u64, role_id: u64, name: &str) -> Self {
        self.roles.entry(guild_id).or_default().push(GuildRoleInfo {
            id: role_id,
            name: name.to_string(),
        });
        self
    }

    pub fn with_member(mut self, guild_id: u64, username: &str, role_ids: &[u64]) -> Self {
        let members = self.members.entry(guild_id).or_default();
        members.push(GuildMemberInfo {
            user_id: members.len() as u64 + 1,
            username: username.to_string(),
            role_ids: role_ids.to_vec(),
        });
        self
    }

    pub fn with_message(mut self, channel_id: u64, id: u64, content: &str, author: &str) -> Self {
        self.messages.entry(channel_id).or_default().push(ChannelMessage {
            id,
            content: content.to_string(),
            author_username: author.to_string(),
        });
        self
    }

    /// Every request touching `guild_id` fails.
    pub fn failing_guild(mut self, guild_id: u64) -> Self {
        self.failing_guilds.insert(guild_id);
        self
    }

    /// Ignores the `after` cursor and always serves the first page.
    pub fn repeating_pages(mut self) -> Self {
        self.repeat_pages = true;
        self
    }

    pub fn name_requests(&self) -> usize {
        self.name_requests.load(Ordering::SeqCst)
    }

    pub fn message_requests(&self) -> usize {
        self.message_requests.load(Ordering::SeqCst)
    }

    fn check(&self, guild_id: u64) -> Result<(), AppError> {
        if self.failing_guilds.contains(&guild_id) {
            return Err(AppError::InternalError(format!(
                "Guild {} unavailable",
                guild_id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl GuildApi for FakeGuildApi {
    async fn fetch_guild_name(&self, guild_id: u64) -> Result<String, AppError> {
        self.name_requests.fetch_add(1, Ordering::SeqCst);
        self.check(guild_id)?;

        self.names
            .get(&guild_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Unknown guild {}", guild_id)))
    }

    async fn fetch_roles(&self, guild_id: u64) -> Result<Vec<GuildRoleInfo>, AppError> {
        self.check(guild_id)?;
        Ok(self.roles.get(&guild_id).cloned().unwrap_or_default())
    }

    async fn fetch_members(&self, guild_id: u64) -> Result<Vec<GuildMemberInfo>, AppError> {
        self.check(guild_id)?;
        Ok(self.members.get(&guild_id).cloned().unwrap_or_default())
    }

    async fn fetch_messages(
        &self,
        channel_id: u64,
        after: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError> {
        self.message_requests.fetch_add(1, Ordering::SeqCst);

        let after = if self.repeat_pages { 0 } else { after };
        let mut page: Vec<ChannelMessage> = self
            .messages
            .get(&channel_id)
            .map(|all| all.iter().filter(|m| m.id > after).cloned().collect())
            .unwrap_or_default();

        // Oldest `limit` messages after the cursor, served newest first like Discord.
        page.sort_by_key(|m| m.id);
        page.truncate(limit as usize);
        page.reverse();

        Ok(page)
    }
}
