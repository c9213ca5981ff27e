use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, ACTING_USER_HEADER},
};
use axum::http::{HeaderMap, HeaderValue};

mod require_user;

fn headers(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACTING_USER_HEADER, HeaderValue::from_str(value).unwrap());
    headers
}
