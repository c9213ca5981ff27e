//! Business logic layer.
//!
//! Services orchestrate the data layer and external collaborators. The import service
//! talks to its collaborators through the traits in `import::store`; the remaining
//! modules provide their production implementations.

pub mod guild_owner;
pub mod import;
pub mod premium;
pub mod transcript;
