//! HTTP client for the authentication and resource endpoints.

use std::time::Duration;

use reqwest::Client;

use super::types::{LoginRequest, LoginResponse, LoginTokens};
use super::ApiError;
use crate::session::{build_auth_header, SessionState};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("Failed to build API client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// `POST /login` with the supplied credentials.
    ///
    /// A non-success status or a response body missing either token is
    /// an error; the caller is expected to clear the session on any
    /// failure (see [`super::sign_in`]).
    pub async fn login(&self, name: &str, password: &str) -> Result<LoginTokens, ApiError> {
        let response = self
            .client
            .post(format!("{}/login", self.base_url))
            .json(&LoginRequest {
                name: name.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::LoginRejected {
                status: status.as_u16(),
            });
        }

        let body: LoginResponse = response.json().await?;
        match (body.access_token, body.refresh_token) {
            (Some(access_token), Some(refresh_token))
                if !access_token.is_empty() && !refresh_token.is_empty() =>
            {
                Ok(LoginTokens {
                    access_token,
                    refresh_token,
                })
            }
            _ => Err(ApiError::MissingTokens),
        }
    }

    /// GET a protected resource with the session's bearer header.
    ///
    /// Rejects before hitting the network when the session holds no
    /// access token.
    pub async fn get_authorized(
        &self,
        path: &str,
        session: &SessionState,
    ) -> Result<reqwest::Response, ApiError> {
        let (header_name, header_value) =
            build_auth_header(session).ok_or(ApiError::NotAuthenticated)?;

        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header(header_name, header_value)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}
