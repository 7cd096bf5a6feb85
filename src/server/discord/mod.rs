//! Discord Guild API access.
//!
//! The rest of the server talks to Discord through the [`GuildApi`] trait, which
//! returns plain domain structs instead of serenity models. [`SerenityGuildApi`]
//! implements it on top of serenity's REST client; tests substitute
//! [`fake::FakeGuildApi`].

pub mod api;
pub mod client;
pub mod commands;
pub mod pager;

#[cfg(test)]
pub mod fake;

pub use api::{ChannelMessage, GuildApi, GuildMemberInfo, GuildRoleInfo};
pub use client::SerenityGuildApi;
pub use pager::MessagePager;
