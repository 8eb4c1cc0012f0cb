use crate::store::Intent;

/// Session transitions.
#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Wholesale session replace after a login attempt.
    ///
    /// `is_authenticated` defaults to `true` when absent — even for empty
    /// credentials. Input validation is the caller's responsibility; this
    /// layer accepts the payload as given.
    SetAuth {
        user_name: String,
        access_token: String,
        refresh_token: String,
        is_authenticated: Option<bool>,
    },
    /// Partial token merge for in-place refresh. Preserves `user_name`.
    UpdateTokens {
        access_token: Option<String>,
        refresh_token: Option<String>,
    },
    /// Unconditional reset to the empty/unauthenticated session.
    ClearAuth,
}

impl Intent for SessionIntent {}
