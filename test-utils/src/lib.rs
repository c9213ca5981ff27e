//! Ticketboard Test Utils
//!
//! Provides shared testing utilities for the ticketboard import service. This crate offers
//! a builder pattern for creating test contexts with in-memory SQLite databases, factories
//! for seeding records, and signed archive fixtures.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **SignedArchiveBuilder**: Zip archives signed like the dashboard exporter signs them
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_mapping_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(entity::prelude::ImportMapping)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
