use sea_orm::DbErr;

/// One role held by one user in a guild, as of the last refresh.
///
/// `role_rank` is a snapshot of the role table at refresh time and may go stale
/// if the table changes between refreshes.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleAssignment {
    pub role_id: u64,
    pub guild_id: u64,
    pub username: String,
    pub role_name: String,
    pub role_rank: i32,
}

impl RoleAssignment {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(RoleAssignment)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse role_id or guild_id as u64
    pub fn from_entity(entity: entity::discord_role_assignment::Model) -> Result<Self, DbErr> {
        let role_id = entity
            .role_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse role_id: {}", e)))?;

        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            role_id,
            guild_id,
            username: entity.username,
            role_name: entity.role_name,
            role_rank: entity.role_rank,
        })
    }
}
