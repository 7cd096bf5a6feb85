use crate::server::data::guild::DiscordGuildRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_name;
mod insert_if_missing;
mod set_roles_channel;
