use crate::server::data::access::GuildAccessRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::builder::TestBuilder;

mod add_blacklisted_user;
mod grant_user_permission;
