use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::guild::DiscordGuild;

pub struct DiscordGuildRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiscordGuildRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a guild unless it is already known.
    ///
    /// # Returns
    /// - `Ok(true)` - Guild inserted
    /// - `Ok(false)` - Guild already existed, its row is unchanged
    pub async fn insert_if_missing(&self, guild_id: u64, name: &str) -> Result<bool, DbErr> {
        let rows = entity::prelude::DiscordGuild::insert(entity::discord_guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            roles_channel_id: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::column(entity::discord_guild::Column::GuildId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(rows > 0)
    }

    /// Sets the roles channel of a guild, registering the guild if needed.
    pub async fn set_roles_channel(
        &self,
        guild_id: u64,
        name: &str,
        channel_id: u64,
    ) -> Result<DiscordGuild, DbErr> {
        let entity = entity::prelude::DiscordGuild::insert(entity::discord_guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            roles_channel_id: ActiveValue::Set(Some(channel_id.to_string())),
        })
        .on_conflict(
            OnConflict::column(entity::discord_guild::Column::GuildId)
                .update_columns([entity::discord_guild::Column::RolesChannelId])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        DiscordGuild::from_entity(entity)
    }

    pub async fn get_all(&self) -> Result<Vec<DiscordGuild>, DbErr> {
        entity::prelude::DiscordGuild::find()
            .order_by_asc(entity::discord_guild::Column::GuildId)
            .all(self.db)
            .await?
            .into_iter()
            .map(DiscordGuild::from_entity)
            .collect()
    }

    /// Finds a guild by its Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(DiscordGuild))`: Guild found in database
    /// - `Ok(None)`: Guild not registered yet
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<DiscordGuild>, DbErr> {
        entity::prelude::DiscordGuild::find()
            .filter(entity::discord_guild::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(DiscordGuild::from_entity)
            .transpose()
    }

    /// Finds a guild by display name. If several guilds share the name, the
    /// one with the lowest id wins.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<DiscordGuild>, DbErr> {
        entity::prelude::DiscordGuild::find()
            .filter(entity::discord_guild::Column::Name.eq(name))
            .order_by_asc(entity::discord_guild::Column::GuildId)
            .one(self.db)
            .await?
            .map(DiscordGuild::from_entity)
            .transpose()
    }
}
