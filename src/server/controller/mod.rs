//! HTTP request handlers.
//!
//! Controllers resolve the acting user, convert request payloads into parameter models,
//! call into the service layer and convert results back into DTOs.

pub mod import;
