//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models and archive documents for unit tests and as
//! default values for factories. Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let panel = fixture::panel::entity_builder()
//!     .guild_id(123)
//!     .title("Support")
//!     .build();
//! ```

pub mod guild_data;
pub mod panel;
pub mod ticket;

pub use panel::{entity as panel_entity, entity_builder as panel_entity_builder};
pub use ticket::{entity as ticket_entity, entity_builder as ticket_entity_builder};
