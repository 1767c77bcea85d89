//! `/auth` and identity endpoints

use crate::auth::types::{RegisterRequest, TokenResponse, User};
use crate::gateway::{ApiRequest, Gateway};
use crate::utils::error::Result;
use tracing::debug;

const TOKEN_PATH: &str = "/auth/token";
const REGISTER_PATH: &str = "/auth/register";
const ME_PATH: &str = "/users/me";

#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> AuthApi<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Exchange credentials for a bearer token (form-encoded)
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse> {
        debug!(username, "requesting token");
        let request = ApiRequest::post_form(
            TOKEN_PATH,
            &[("username", username), ("password", password)],
        )
        .authentication();
        self.gateway.send_json(request).await
    }

    /// Create an account.
    ///
    /// The backend is not required to return a body; the new user is
    /// returned when it does.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Option<User>> {
        debug!(username = %request.username, "registering");
        let request = ApiRequest::post_json(REGISTER_PATH, request)?.authentication();
        let response = self.gateway.send(request).await?;
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(response.json().ok())
    }

    /// Identity behind the stored credential
    pub async fn me(&self) -> Result<User> {
        self.gateway.send_json(ApiRequest::get(ME_PATH)).await
    }

    /// Identity behind a token that has not been persisted yet.
    ///
    /// Part of the login flow, so a rejection is reported to the caller
    /// instead of tearing down whatever session is active.
    pub async fn me_with_token(&self, token: &str) -> Result<User> {
        let request = ApiRequest::get(ME_PATH).with_bearer(token).authentication();
        self.gateway.send_json(request).await
    }
}
