//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone: the database handle
//! is a pool and the rest sit behind `Arc`s.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    discord::GuildApi, middleware::signature::SignatureVerifier, model::role_table::RoleTable,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Guild API used to resolve names of guilds seen for the first time.
    pub discord: Arc<dyn GuildApi>,

    /// Verifies the signatures Discord attaches to interaction webhooks.
    pub verifier: SignatureVerifier,

    /// Role ranks used by the whitelist's minimum-role filter.
    pub role_table: Arc<RoleTable>,

    /// Discord application id, used for the invite link and liveness reply.
    pub application_id: u64,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        discord: Arc<dyn GuildApi>,
        verifier: SignatureVerifier,
        role_table: Arc<RoleTable>,
        application_id: u64,
    ) -> Self {
        Self {
            db,
            discord,
            verifier,
            role_table,
            application_id,
        }
    }
}
