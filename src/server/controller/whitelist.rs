use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::server::{error::AppError, service::account::AccountService, state::AppState};

#[derive(Deserialize, Debug, Default)]
pub struct WhitelistParams {
    /// Guild display name.
    pub discord_server: Option<String>,
    /// Role name to gate on, or `all`.
    pub minimum_role: Option<String>,
}

/// List whitelisted friend codes.
///
/// Public endpoint consumed by game servers. Empty query values are treated
/// as absent.
///
/// # Returns
/// - `200 OK` - JSON array of friend code strings
/// - `404 Not Found` - `discord_server` names no known guild
/// - `500 Internal Server Error` - Database error
pub async fn get_whitelist(
    State(state): State<AppState>,
    Query(params): Query<WhitelistParams>,
) -> Result<impl IntoResponse, AppError> {
    let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
    let discord_server = non_empty(&params.discord_server);
    let minimum_role = non_empty(&params.minimum_role);

    let friendcodes = AccountService::new(&state.db)
        .whitelist(
            discord_server.as_deref(),
            minimum_role.as_deref(),
            &state.role_table,
        )
        .await?;

    Ok((StatusCode::OK, Json(friendcodes)))
}
