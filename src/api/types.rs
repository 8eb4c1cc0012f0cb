//! Wire types for the authentication endpoint.
//!
//! The endpoint speaks camelCase JSON; field names here are the Rust
//! forms with serde handling the rename.

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// Raw login response. Either token may be absent on misbehaving
/// servers; the client treats that as a failed login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Validated token pair from a successful login.
#[derive(Debug, Clone)]
pub struct LoginTokens {
    pub access_token: String,
    pub refresh_token: String,
}
