use axum::http::HeaderMap;

use crate::server::error::{auth::AuthError, AppError};

/// Header the dashboard gateway forwards the authenticated Discord user id in.
pub const ACTING_USER_HEADER: &str = "x-user-id";

/// Resolves the user a request acts on behalf of.
///
/// Session handling lives in the dashboard gateway; requests reaching this service carry
/// the already authenticated user's Discord id.
pub struct AuthGuard<'a> {
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(headers: &'a HeaderMap) -> Self {
        Self { headers }
    }

    /// Returns the acting user's Discord id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Discord id of the acting user
    /// - `Err(AuthError::UserNotInRequest)` - Header is missing
    /// - `Err(AuthError::InvalidUserId)` - Header is not a Discord snowflake
    pub fn require_user(&self) -> Result<u64, AppError> {
        let Some(value) = self.headers.get(ACTING_USER_HEADER) else {
            return Err(AuthError::UserNotInRequest.into());
        };

        let value = value
            .to_str()
            .map_err(|_| AuthError::InvalidUserId(format!("{:?}", value)))?;

        match value.trim().parse::<u64>() {
            Ok(user_id) if user_id != 0 => Ok(user_id),
            _ => Err(AuthError::InvalidUserId(value.to_string()).into()),
        }
    }
}
