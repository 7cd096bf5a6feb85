use crate::server::model::{role::RoleAssignment, role_table::RoleTable};

/// Decides whether `username` meets `minimum_role` in `guild_id`.
///
/// The user's rank is the highest table rank among their assignments in
/// `roles`; role names missing from the table rank 0, and so does an unknown
/// `minimum_role`. A user with no assignments never passes.
pub fn has_valid_role(
    table: &RoleTable,
    guild_id: u64,
    username: &str,
    roles: &[RoleAssignment],
    minimum_role: &str,
) -> bool {
    let Some(max_rank) = roles
        .iter()
        .filter(|r| r.username == username)
        .map(|r| table.rank(guild_id, &r.role_name))
        .max()
    else {
        return false;
    };

    max_rank >= table.rank(guild_id, minimum_role)
}
