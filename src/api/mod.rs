//! Network caller feeding the session slice.
//!
//! The state core never performs HTTP calls from inside a reducer; this
//! module is the caller that runs the login request and dispatches the
//! outcome into the session store.

mod client;
mod types;

pub use client::ApiClient;
pub use types::{LoginRequest, LoginTokens};

use thiserror::Error;

use crate::session::{SessionIntent, SessionStore};

/// Errors from the API caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, send, body decode).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Login endpoint rejected the credentials.
    #[error("Login rejected with status {status}")]
    LoginRejected { status: u16 },

    /// Login response carried no usable token pair.
    #[error("Login response missing tokens")]
    MissingTokens,

    /// Authorized request attempted without an access token.
    #[error("No access token held for authorized request")]
    NotAuthenticated,

    /// Protected endpoint returned an error status.
    #[error("Request to '{path}' returned status {status}")]
    Status { path: String, status: u16 },
}

/// Run the login request and dispatch the outcome.
///
/// Success replaces the session wholesale; any failure (transport,
/// rejection, missing tokens) clears it. The error is returned so the
/// view layer can surface a message, but session state itself carries
/// no error field.
pub async fn sign_in(
    client: &ApiClient,
    store: &SessionStore,
    user_name: &str,
    password: &str,
) -> Result<(), ApiError> {
    let user_name = user_name.trim();
    match client.login(user_name, password).await {
        Ok(tokens) => {
            store.dispatch(SessionIntent::SetAuth {
                user_name: user_name.to_string(),
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
                is_authenticated: Some(true),
            });
            Ok(())
        }
        Err(err) => {
            tracing::warn!("Login failed: {}", err);
            store.dispatch(SessionIntent::ClearAuth);
            Err(err)
        }
    }
}
