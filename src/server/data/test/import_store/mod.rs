use crate::server::{
    data::import_store::{SeaOrmImportStore, SeaOrmMappingStore},
    model::import::{CreatePanelParams, EntityClass},
    service::import::store::{ImportStore, MappingStore},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_mapping;
mod panel_batch;
