use crate::server::data::entitlement::GuildEntitlementRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_active_tiers;
