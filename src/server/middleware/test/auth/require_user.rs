use super::*;

/// Tests resolving the acting user from the header.
///
/// Expected: Ok with the parsed Discord id
#[test]
fn returns_user_id() {
    let headers = headers("123456789012345678");

    let user_id = AuthGuard::new(&headers).require_user().unwrap();

    assert_eq!(user_id, 123456789012345678);
}

/// Tests a request without the header.
///
/// Expected: Err(AuthError::UserNotInRequest)
#[test]
fn rejects_missing_header() {
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&headers).require_user();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInRequest))
    ));
}

/// Tests header values that are not Discord ids.
///
/// Expected: Err(AuthError::InvalidUserId) for each value
#[test]
fn rejects_invalid_ids() {
    for value in ["abc", "-5", "0", ""] {
        let headers = headers(value);

        let result = AuthGuard::new(&headers).require_user();

        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::InvalidUserId(_)))),
            "accepted {:?}",
            value
        );
    }
}
