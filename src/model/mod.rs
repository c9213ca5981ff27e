//! API data transfer objects shared with dashboard clients.

pub mod api;
pub mod import;
