use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a guild import, one label per entity class.
///
/// Labels carry a ` (xN)` suffix with the number of affected records when a class
/// failed or was skipped, e.g. `"Tags (x3)"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImportResultDto {
    pub success: Vec<String>,
    pub failed: Vec<String>,
    pub skipped: Vec<String>,
}
