//! Auth Calls
//!
//! Login is the one call that skips the bearer header and the one call
//! with a side effect: it persists the issued token.

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{Credentials, Token, User};

impl ApiClient {
    /// Exchange credentials for a token and store it in the session
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Token> {
        let form = [("username", username), ("password", password)];
        let request = self.anonymous(Method::POST, "/token").form(&form);
        let token: Token = self.fetch_json(request, "Failed to login").await?;

        self.session().store_token(&token.access_token)?;
        log::info!("[API] Logged in as {}", username);
        Ok(token)
    }

    pub async fn register(&self, username: &str, password: &str) -> ApiResult<User> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let request = self.request(Method::POST, "/register")?.json(&credentials);
        self.fetch_json(request, "Failed to register").await
    }
}
