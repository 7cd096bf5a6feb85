use std::sync::Arc;

use serenity::{
    all::{ChannelId, GuildId, MessageId},
    async_trait,
    http::{Http, MessagePagination},
};

use super::api::{ChannelMessage, GuildApi, GuildMemberInfo, GuildRoleInfo};
use crate::server::error::AppError;

/// Maximum members Discord returns per request.
const MEMBERS_PER_REQUEST: u64 = 1000;

/// [`GuildApi`] backed by serenity's REST client.
#[derive(Clone)]
pub struct SerenityGuildApi {
    http: Arc<Http>,
}

impl SerenityGuildApi {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl GuildApi for SerenityGuildApi {
    async fn fetch_guild_name(&self, guild_id: u64) -> Result<String, AppError> {
        let guild = self.http.get_guild(GuildId::new(guild_id)).await?;

        Ok(guild.name)
    }

    async fn fetch_roles(&self, guild_id: u64) -> Result<Vec<GuildRoleInfo>, AppError> {
        let roles = self.http.get_guild_roles(GuildId::new(guild_id)).await?;

        Ok(roles
            .into_iter()
            .map(|role| GuildRoleInfo {
                id: role.id.get(),
                name: role.name,
            })
            .collect())
    }

    async fn fetch_members(&self, guild_id: u64) -> Result<Vec<GuildMemberInfo>, AppError> {
        let mut all_members = Vec::new();
        let mut after: Option<u64> = None;

        loop {
            let members = self
                .http
                .get_guild_members(GuildId::new(guild_id), Some(MEMBERS_PER_REQUEST), after)
                .await?;

            let fetched_count = members.len();
            after = members.last().map(|m| m.user.id.get());

            all_members.extend(members.into_iter().map(|member| GuildMemberInfo {
                user_id: member.user.id.get(),
                username: member.user.name,
                role_ids: member.roles.iter().map(|r| r.get()).collect(),
            }));

            if fetched_count < MEMBERS_PER_REQUEST as usize {
                break;
            }
        }

        tracing::debug!(
            "Fetched {} members for guild {}",
            all_members.len(),
            guild_id
        );

        Ok(all_members)
    }

    async fn fetch_messages(
        &self,
        channel_id: u64,
        after: u64,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError> {
        // Snowflakes are non-zero, so "after 1" is the start of the channel.
        let target = MessagePagination::After(MessageId::new(after.max(1)));

        let messages = self
            .http
            .get_messages(ChannelId::new(channel_id), Some(target), Some(limit))
            .await?;

        Ok(messages
            .into_iter()
            .map(|message| ChannelMessage {
                id: message.id.get(),
                content: message.content,
                author_username: message.author.name,
            })
            .collect())
    }
}
