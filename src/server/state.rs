//! Application state shared across all request handlers.

use std::{sync::Arc, time::Duration};

use crate::server::{service::import::ImportDependencies, validator::ArchiveValidator};

/// Application state containing shared resources and dependencies.
///
/// Cloned for each request via Axum's state extraction; every field is reference
/// counted or `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Verifies uploaded archives against the export signing key.
    pub validator: Arc<ArchiveValidator>,

    /// Storage, premium, Discord and transcript collaborators of the import.
    pub import: ImportDependencies,

    /// Deadline for a whole import request.
    pub import_timeout: Duration,
}

impl AppState {
    pub fn new(
        validator: Arc<ArchiveValidator>,
        import: ImportDependencies,
        import_timeout: Duration,
    ) -> Self {
        Self {
            validator,
            import,
            import_timeout,
        }
    }
}
