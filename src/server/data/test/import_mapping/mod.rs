use crate::server::data::import_mapping::ImportMappingRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_guild;
mod set;
