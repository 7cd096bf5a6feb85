use crate::server::{
    data::account::AllowedAccountRepository,
    model::account::{AccountSource, CreateAccountParams},
};
use entity::prelude::*;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory, fixture};

mod get_by_username_and_guild;
mod insert_ignore;
mod replace_scanned;

fn guild_id() -> u64 {
    fixture::allowed_account::DEFAULT_GUILD_ID.parse().unwrap()
}

fn params(friendcode: &str, username: &str, is_main: bool, source: AccountSource) -> CreateAccountParams {
    CreateAccountParams {
        friendcode: friendcode.to_string(),
        guild_id: guild_id(),
        ign: format!("IGN {}", friendcode),
        discord_username: username.to_string(),
        is_main,
        screenshot_id: match source {
            AccountSource::Command => Some("1400000000000000001".to_string()),
            AccountSource::Scan => None,
        },
        source,
    }
}
