//! Scheduled refresh of every registered guild.
//!
//! For each guild the role snapshot is rebuilt from the Guild API, then the
//! guild's roles channel (if any) is read from the start and every well-formed
//! `ID:`/`IGN:` message becomes a scan-derived allowed account. Each replace
//! runs in its own transaction so readers see either the old or the new set.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{AllowedAccountRepository, DiscordGuildRepository, RoleAssignmentRepository},
    discord::{GuildApi, GuildMemberInfo, GuildRoleInfo, MessagePager},
    error::AppError,
    model::{
        account::{AccountSource, CreateAccountParams},
        guild::DiscordGuild,
        role::RoleAssignment,
        role_table::RoleTable,
    },
    util::parse::parse_roles_message,
};

/// Rows written for one guild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuildRefreshSummary {
    pub roles_written: u64,
    pub accounts_written: u64,
}

/// Outcome of refreshing every guild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub guilds_refreshed: usize,
    pub guilds_failed: usize,
}

pub struct GuildRefreshService<'a> {
    db: &'a DatabaseConnection,
    api: &'a dyn GuildApi,
    role_table: &'a RoleTable,
}

impl<'a> GuildRefreshService<'a> {
    pub fn new(db: &'a DatabaseConnection, api: &'a dyn GuildApi, role_table: &'a RoleTable) -> Self {
        Self {
            db,
            api,
            role_table,
        }
    }

    /// Refreshes every registered guild, one at a time.
    ///
    /// A guild that fails is logged and skipped; the remaining guilds are still
    /// refreshed.
    ///
    /// # Returns
    /// - `Ok(RefreshSummary)` - Counts of refreshed and failed guilds
    /// - `Err(AppError)` - The guild list itself could not be loaded
    pub async fn refresh_all(&self) -> Result<RefreshSummary, AppError> {
        let guilds = DiscordGuildRepository::new(self.db).get_all().await?;
        let mut summary = RefreshSummary::default();

        for guild in guilds {
            match self.refresh_guild(&guild).await {
                Ok(result) => {
                    summary.guilds_refreshed += 1;
                    tracing::info!(
                        "Refreshed guild {} ({}): {} role assignments, {} scanned accounts",
                        guild.name,
                        guild.guild_id,
                        result.roles_written,
                        result.accounts_written
                    );
                }
                Err(e) => {
                    summary.guilds_failed += 1;
                    tracing::error!(
                        "Failed to refresh guild {} ({}): {}",
                        guild.name,
                        guild.guild_id,
                        e
                    );
                }
            }
        }

        Ok(summary)
    }

    /// Rebuilds the role snapshot of one guild and rescans its roles channel.
    pub async fn refresh_guild(&self, guild: &DiscordGuild) -> Result<GuildRefreshSummary, AppError> {
        let roles_written = self.sync_roles(guild.guild_id).await?;

        let accounts_written = match guild.roles_channel_id {
            Some(channel_id) => self.scan_channel(guild.guild_id, channel_id).await?,
            None => {
                tracing::debug!("Guild {} has no roles channel, skipping scan", guild.guild_id);
                0
            }
        };

        Ok(GuildRefreshSummary {
            roles_written,
            accounts_written,
        })
    }

    /// Replaces the guild's role assignments with the current Discord state.
    pub async fn sync_roles(&self, guild_id: u64) -> Result<u64, AppError> {
        let roles = self.api.fetch_roles(guild_id).await?;
        let members = self.api.fetch_members(guild_id).await?;

        let assignments = build_role_assignments(guild_id, &roles, &members, self.role_table);

        let txn = self.db.begin().await?;
        let written = RoleAssignmentRepository::new(&txn)
            .replace_for_guild(guild_id, &assignments)
            .await?;
        txn.commit().await?;

        Ok(written)
    }

    /// Replaces the guild's scan-derived accounts with those parsed from `channel_id`.
    ///
    /// Messages that do not parse are skipped. When two messages carry the same
    /// friend code, the older one wins.
    pub async fn scan_channel(&self, guild_id: u64, channel_id: u64) -> Result<u64, AppError> {
        let mut messages = MessagePager::new(self.api, channel_id).collect_all().await?;
        messages.sort_by_key(|m| m.id);

        let accounts: Vec<CreateAccountParams> = messages
            .into_iter()
            .filter_map(|message| {
                let entry = parse_roles_message(&message.content)?;

                Some(CreateAccountParams {
                    friendcode: entry.friendcode,
                    guild_id,
                    ign: entry.ign,
                    discord_username: message.author_username,
                    is_main: false,
                    screenshot_id: None,
                    source: AccountSource::Scan,
                })
            })
            .collect();

        tracing::debug!(
            "Parsed {} accounts from channel {} of guild {}",
            accounts.len(),
            channel_id,
            guild_id
        );

        let txn = self.db.begin().await?;
        let written = AllowedAccountRepository::new(&txn)
            .replace_scanned(guild_id, &accounts)
            .await?;
        txn.commit().await?;

        Ok(written)
    }
}

/// Expands guild members into one assignment per held role.
///
/// Role ids missing from `roles` are skipped. Ranks come from `role_table`.
pub fn build_role_assignments(
    guild_id: u64,
    roles: &[GuildRoleInfo],
    members: &[GuildMemberInfo],
    role_table: &RoleTable,
) -> Vec<RoleAssignment> {
    let names: HashMap<u64, &str> = roles.iter().map(|r| (r.id, r.name.as_str())).collect();

    members
        .iter()
        .flat_map(|member| {
            member.role_ids.iter().filter_map(|role_id| {
                let Some(role_name) = names.get(role_id) else {
                    tracing::debug!(
                        "Member {} holds unknown role {} in guild {}",
                        member.username,
                        role_id,
                        guild_id
                    );
                    return None;
                };

                Some(RoleAssignment {
                    role_id: *role_id,
                    guild_id,
                    username: member.username.clone(),
                    role_name: role_name.to_string(),
                    role_rank: role_table.rank(guild_id, role_name),
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::discord::fake::FakeGuildApi;
    use test_utils::{builder::TestBuilder, factory};

    const GUILD: u64 = 77;
    const CHANNEL: u64 = 900;

    fn table() -> RoleTable {
        RoleTable::new([(GUILD, "Great Ball", 2), (GUILD, "Ultra Ball", 3)])
    }

    fn api() -> FakeGuildApi {
        FakeGuildApi::default()
            .with_guild(GUILD, "Cerulean")
            .with_role(GUILD, 1, "Great Ball")
            .with_role(GUILD, 2, "Ultra Ball")
            .with_role(GUILD, 3, "Gym Leader")
            .with_member(GUILD, "misty", &[2, 3])
            .with_member(GUILD, "ash", &[1, 999])
            .with_message(CHANNEL, 10, "ID: 1000000000000001\nIGN: Misty", "misty")
            .with_message(CHANNEL, 20, "hello everyone", "brock")
            .with_message(CHANNEL, 30, "IGN: Ash\nID: 1000000000000002", "ash")
            .with_message(CHANNEL, 40, "ID: 1000000000000001\nIGN: Copycat", "gary")
    }

    #[test]
    fn builds_assignments_for_known_roles() {
        let roles = [
            GuildRoleInfo {
                id: 1,
                name: "Great Ball".to_string(),
            },
            GuildRoleInfo {
                id: 2,
                name: "Ultra Ball".to_string(),
            },
        ];
        let members = [GuildMemberInfo {
            user_id: 5,
            username: "ash".to_string(),
            role_ids: vec![2, 1, 999],
        }];

        let assignments = build_role_assignments(GUILD, &roles, &members, &table());

        assert_eq!(assignments.len(), 2);
        assert_eq!(assignments[0].role_name, "Ultra Ball");
        assert_eq!(assignments[0].role_rank, 3);
        assert_eq!(assignments[1].role_name, "Great Ball");
        assert_eq!(assignments[1].role_rank, 2);
        assert!(assignments.iter().all(|a| a.username == "ash"));
    }

    #[test]
    fn unranked_roles_default_to_zero() {
        let roles = [GuildRoleInfo {
            id: 3,
            name: "Gym Leader".to_string(),
        }];
        let members = [GuildMemberInfo {
            user_id: 5,
            username: "brock".to_string(),
            role_ids: vec![3],
        }];

        let assignments = build_role_assignments(GUILD, &roles, &members, &table());

        assert_eq!(assignments[0].role_rank, 0);
    }

    #[tokio::test]
    async fn refreshes_roles_and_scanned_accounts() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_whitelist_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        factory::discord_guild::DiscordGuildFactory::new(db)
            .guild_id(GUILD.to_string())
            .name("Cerulean")
            .roles_channel_id(Some(CHANNEL.to_string()))
            .build()
            .await?;
        factory::allowed_account::AllowedAccountFactory::new(db)
            .guild_id(GUILD.to_string())
            .friendcode("3000000000000003")
            .scanned()
            .build()
            .await?;

        let api = api();
        let table = table();
        let summary = GuildRefreshService::new(db, &api, &table)
            .refresh_all()
            .await?;

        assert_eq!(summary.guilds_refreshed, 1);
        assert_eq!(summary.guilds_failed, 0);

        let roles = RoleAssignmentRepository::new(db).get_by_guild(GUILD).await?;
        assert_eq!(roles.len(), 3);

        let accounts = AllowedAccountRepository::new(db).get_by_guild(GUILD).await?;
        assert_eq!(accounts.len(), 2);

        let misty = accounts
            .iter()
            .find(|a| a.friendcode == "1000000000000001")
            .unwrap();
        assert_eq!(misty.discord_username, "misty");
        assert_eq!(misty.ign, "Misty");
        assert_eq!(misty.source, AccountSource::Scan);
        assert!(!misty.is_main);

        let ash = accounts
            .iter()
            .find(|a| a.friendcode == "1000000000000002")
            .unwrap();
        assert_eq!(ash.ign, "Ash");

        Ok(())
    }

    #[tokio::test]
    async fn guild_without_channel_only_syncs_roles() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_whitelist_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        factory::discord_guild::DiscordGuildFactory::new(db)
            .guild_id(GUILD.to_string())
            .build()
            .await?;

        let api = api();
        let table = table();
        GuildRefreshService::new(db, &api, &table)
            .refresh_all()
            .await?;

        assert_eq!(api.message_requests(), 0);
        assert_eq!(
            RoleAssignmentRepository::new(db).get_by_guild(GUILD).await?.len(),
            3
        );

        Ok(())
    }

    #[tokio::test]
    async fn failing_guild_does_not_stop_others() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_whitelist_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        factory::discord_guild::DiscordGuildFactory::new(db)
            .guild_id("5")
            .build()
            .await?;
        factory::discord_guild::DiscordGuildFactory::new(db)
            .guild_id(GUILD.to_string())
            .build()
            .await?;
        factory::create_role_assignment(db, "5", "ash", 1, "Great Ball", 2).await?;

        let api = api().failing_guild(5);
        let table = table();
        let summary = GuildRefreshService::new(db, &api, &table)
            .refresh_all()
            .await?;

        assert_eq!(summary.guilds_refreshed, 1);
        assert_eq!(summary.guilds_failed, 1);
        // The failed guild keeps its previous snapshot.
        assert_eq!(RoleAssignmentRepository::new(db).get_by_guild(5).await?.len(), 1);
        assert_eq!(
            RoleAssignmentRepository::new(db).get_by_guild(GUILD).await?.len(),
            3
        );

        Ok(())
    }

    type AccountRow = (String, String, String, AccountSource);
    type RoleRow = (u64, String, String, i32);

    async fn snapshot(db: &DatabaseConnection) -> Result<(Vec<AccountRow>, Vec<RoleRow>), AppError> {
        let mut accounts: Vec<_> = AllowedAccountRepository::new(db)
            .get_by_guild(GUILD)
            .await?
            .into_iter()
            .map(|a| (a.friendcode, a.ign, a.discord_username, a.source))
            .collect();
        accounts.sort_by(|a, b| a.0.cmp(&b.0));

        let mut roles: Vec<_> = RoleAssignmentRepository::new(db)
            .get_by_guild(GUILD)
            .await?
            .into_iter()
            .map(|r| (r.role_id, r.username, r.role_name, r.role_rank))
            .collect();
        roles.sort();

        Ok((accounts, roles))
    }

    #[tokio::test]
    async fn repeated_refresh_leaves_snapshot_unchanged() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_whitelist_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        factory::discord_guild::DiscordGuildFactory::new(db)
            .guild_id(GUILD.to_string())
            .roles_channel_id(Some(CHANNEL.to_string()))
            .build()
            .await?;

        let api = api();
        let table = table();
        let service = GuildRefreshService::new(db, &api, &table);

        service.refresh_all().await?;
        let first = snapshot(db).await?;
        service.refresh_all().await?;
        let second = snapshot(db).await?;

        assert!(!first.0.is_empty());
        assert!(!first.1.is_empty());
        assert_eq!(first, second);

        Ok(())
    }
}
