use crate::server::{data::role_assignment::RoleAssignmentRepository, model::role::RoleAssignment};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, fixture};

mod get_highest_by_username_and_guild;
mod replace_for_guild;

fn guild_id() -> u64 {
    fixture::allowed_account::DEFAULT_GUILD_ID.parse().unwrap()
}

fn assignment(role_id: u64, username: &str, role_name: &str, role_rank: i32) -> RoleAssignment {
    RoleAssignment {
        role_id,
        guild_id: guild_id(),
        username: username.to_string(),
        role_name: role_name.to_string(),
        role_rank,
    }
}
