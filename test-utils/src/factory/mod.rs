//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test rows with sensible defaults,
//! reducing boilerplate in tests. Defaults come from the matching `fixture` module so
//! in-memory and persisted test data agree.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let guild = factory::discord_guild::create_guild(&db).await?;
//!     let account = factory::allowed_account::AllowedAccountFactory::new(&db)
//!         .guild_id(&guild.guild_id)
//!         .is_main(true)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod allowed_account;
pub mod discord_guild;
pub mod discord_role_assignment;
pub mod helpers;

pub use allowed_account::create_account;
pub use discord_guild::create_guild;
pub use discord_role_assignment::create_role_assignment;
