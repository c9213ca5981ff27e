use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, import::ImportResultDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::import::ImportRequest,
        service::import::ImportService, state::AppState,
    },
};

/// Tag for grouping import endpoints in OpenAPI documentation
pub static IMPORT_TAG: &str = "import";

/// Multipart part holding the signed guild data archive.
pub const DATA_FILE_FIELD: &str = "data_file";
/// Multipart part holding the signed transcripts archive.
pub const TRANSCRIPTS_FILE_FIELD: &str = "transcripts_file";

/// Import an exported guild into this installation.
///
/// Accepts a data archive, a transcripts archive, or both. Archives are verified against
/// the export signing key before anything is written. Records that cannot be imported
/// do not fail the request; they are listed under `failed` or `skipped`.
///
/// # Access Control
/// - Only the owner of the target guild may import into it
///
/// # Returns
/// - `200 OK` - Import finished, with per-class outcomes
/// - `400 Bad Request` - No archive, malformed archive, bad signature or guild mismatch
/// - `401 Unauthorized` - Acting user missing from the request
/// - `403 Forbidden` - Acting user does not own the guild
/// - `413 Payload Too Large` - Upload or decompressed archive exceeds the limits
/// - `504 Gateway Timeout` - Import did not finish within the configured deadline
/// - `500 Internal Server Error` - Database or Discord error
#[utoipa::path(
    post,
    path = "/api/{guild_id}/import",
    tag = IMPORT_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID to import into"),
        ("X-User-Id" = u64, Header, description = "Discord ID of the acting user")
    ),
    request_body(
        content_type = "multipart/form-data",
        description = "`data_file` and/or `transcripts_file` zip archives"
    ),
    responses(
        (status = 200, description = "Import finished", body = ImportResultDto),
        (status = 400, description = "Invalid or missing archive", body = ErrorDto),
        (status = 401, description = "Acting user missing", body = ErrorDto),
        (status = 403, description = "Acting user does not own the guild", body = ErrorDto),
        (status = 413, description = "Archive too large", body = ErrorDto),
        (status = 504, description = "Import deadline exceeded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_guild(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&headers).require_user()?;

    let mut data_archive = None;
    let mut transcripts_archive = None;
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(DATA_FILE_FIELD) => data_archive = Some(field.bytes().await?.to_vec()),
            Some(TRANSCRIPTS_FILE_FIELD) => {
                transcripts_archive = Some(field.bytes().await?.to_vec())
            }
            name => tracing::debug!("Ignoring unexpected multipart field {:?}", name),
        }
    }

    let service = ImportService::new(
        state.validator.clone(),
        state.import.clone(),
        state.import_timeout,
    );
    let report = service
        .import(ImportRequest {
            guild_id,
            user_id,
            data_archive,
            transcripts_archive,
        })
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
