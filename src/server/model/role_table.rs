//! Static per-guild role rank configuration.
//!
//! The table maps a guild id to the ranks of its gating roles, e.g.
//!
//! ```json
//! {
//!   "1310093045726969977": {
//!     "poke ball": 1,
//!     "great ball": 2,
//!     "ultra ball": 3,
//!     "master ball": 4
//!   }
//! }
//! ```
//!
//! It is loaded once at startup and never mutated afterwards. Role names are
//! compared case-insensitively and any name not in the table ranks 0.

use std::collections::HashMap;

/// Rank of every role name not present in the table.
pub const UNRANKED: i32 = 0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleTable {
    guilds: HashMap<u64, HashMap<String, i32>>,
}

impl RoleTable {
    /// Builds a table from `(guild id, role name, rank)` entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u64, S, i32)>,
        S: AsRef<str>,
    {
        let mut guilds: HashMap<u64, HashMap<String, i32>> = HashMap::new();
        for (guild_id, role_name, rank) in entries {
            guilds
                .entry(guild_id)
                .or_default()
                .insert(role_name.as_ref().to_lowercase(), rank);
        }

        Self { guilds }
    }

    /// Parses the JSON representation shown in the module docs.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<u64, HashMap<String, i32>> = serde_json::from_str(json)?;

        Ok(Self::new(raw.into_iter().flat_map(|(guild_id, roles)| {
            roles
                .into_iter()
                .map(move |(name, rank)| (guild_id, name, rank))
        })))
    }

    /// Rank of `role_name` in `guild_id`, or [`UNRANKED`] when unknown.
    pub fn rank(&self, guild_id: u64, role_name: &str) -> i32 {
        self.guilds
            .get(&guild_id)
            .and_then(|roles| roles.get(&role_name.to_lowercase()))
            .copied()
            .unwrap_or(UNRANKED)
    }

    pub fn guild_count(&self) -> usize {
        self.guilds.len()
    }
}
