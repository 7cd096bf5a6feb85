//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let account = fixture::allowed_account::entity();
//!
//! // Create with custom fields
//! let main = fixture::allowed_account::entity_builder()
//!     .is_main(true)
//!     .build();
//! ```

pub mod allowed_account;
pub mod discord_guild;
pub mod discord_role_assignment;

pub use allowed_account::{
    entity as allowed_account_entity, entity_builder as allowed_account_entity_builder,
};
pub use discord_guild::{
    entity as discord_guild_entity, entity_builder as discord_guild_entity_builder,
};
pub use discord_role_assignment::{
    entity as discord_role_assignment_entity,
    entity_builder as discord_role_assignment_entity_builder,
};
