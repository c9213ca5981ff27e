use crate::server::{
    data::guild_setting::GuildSettingRepository,
    model::guild_data::{AutoCloseSettings, NamingScheme},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::builder::TestBuilder;

mod set_autoclose;
mod set_custom_colour;
mod set_language;
