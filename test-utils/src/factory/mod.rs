//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let form = factory::form::create_form(&db, 123).await?;
//! let panel = factory::panel::PanelFactory::new(&db, 123)
//!     .form_id(Some(form.id))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `form` - Create form and form input entities
//! - `panel` - Create panel entities
//! - `ticket` - Create ticket entities
//! - `import_mapping` - Seed identifier mappings
//! - `entitlement` - Create premium entitlements
//! - `helpers` - Shared id generation

pub mod entitlement;
pub mod form;
pub mod helpers;
pub mod import_mapping;
pub mod panel;
pub mod ticket;

pub use entitlement::create_entitlement;
pub use form::create_form;
pub use import_mapping::create_mapping;
pub use panel::create_panel;
pub use ticket::create_ticket;
