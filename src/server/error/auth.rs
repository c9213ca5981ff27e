use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no acting user identity.
    ///
    /// The dashboard gateway forwards the authenticated Discord user id in the
    /// `X-User-Id` header. Results in a 401 Unauthorized response.
    #[error("Request is missing the acting user header")]
    UserNotInRequest,

    /// The acting user header is present but is not a Discord snowflake.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Acting user header is not a valid user id: {0}")]
    InvalidUserId(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants map to 401 Unauthorized. Errors are logged at debug level while the
/// client-facing message stays generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
