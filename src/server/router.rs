use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{api::ErrorDto, import::ImportResultDto},
    server::{controller::import, state::AppState},
};

#[derive(OpenApi)]
#[openapi(
    paths(import::import_guild),
    components(schemas(ImportResultDto, ErrorDto)),
    tags((name = "import", description = "Guild data import"))
)]
pub struct ApiDoc;

/// Builds the API routes.
///
/// # Arguments
/// - `max_upload_size` - Request body limit of the import endpoint in bytes
pub fn router(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/api/{guild_id}/import",
            post(import::import_guild).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route("/api/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
