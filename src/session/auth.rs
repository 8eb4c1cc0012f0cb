//! Authentication header building for API requests.
//!
//! Builds the `Authorization: Bearer` header from the current session.
//! Protected resource calls attach this header; the session slice itself
//! never performs HTTP calls.

use super::state::SessionState;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the bearer header for the current session.
///
/// Returns `Some(("Authorization", "Bearer <token>"))` when an access
/// token is held, or `None` when the token is empty.
pub fn build_auth_header(session: &SessionState) -> Option<AuthHeader> {
    if session.access_token.is_empty() {
        return None;
    }
    Some((
        "Authorization".to_string(),
        format!("Bearer {}", session.access_token),
    ))
}
