//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They implement the
//! self-registration rules, the account listing and whitelist queries, and the
//! scheduled guild refresh that combines the Guild API with the database.

pub mod account;
pub mod guild;
pub mod invite;
pub mod refresh;
pub mod registration;
pub mod role_filter;
