//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! table. Repositories use SeaORM entity models internally and return domain models to
//! maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait` so the same code runs against the
//! pooled connection or inside a transaction opened by the refresh job.

pub mod account;
pub mod guild;
pub mod role_assignment;

pub use account::AllowedAccountRepository;
pub use guild::DiscordGuildRepository;
pub use role_assignment::RoleAssignmentRepository;

#[cfg(test)]
mod test;
