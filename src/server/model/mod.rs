//! Server-side domain models and parameter types.
//!
//! `guild_data` mirrors the document inside an export archive. `import` holds the
//! parameter types the import passes to storage, and `premium` the guild tiers that gate
//! premium-only settings.

pub mod guild_data;
pub mod import;
pub mod premium;
