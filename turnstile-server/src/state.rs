use crate::auth::{Authenticator, SingleAccount};
use crate::config::Config;
use crate::handlers::login::LoginRouter;
use axum::extract::FromRef;
use std::sync::Arc;

/// Shared state needed by requests.
#[derive(Clone, Debug, FromRef)]
pub struct State {
    /// Validates login requests and forwards them to the authenticator.
    login_router: LoginRouter,
}

impl State {
    /// Create a new state around any authenticator.
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            login_router: LoginRouter::new(authenticator),
        }
    }

    /// Create state that authenticates the single account in `config`.
    ///
    /// ## Errors
    ///
    /// If the JWT secret is not valid base64.
    pub fn from_config(config: &Config) -> Result<Self, jsonwebtoken::errors::Error> {
        let account = SingleAccount::new(
            config.login_email.clone(),
            config.login_password.clone(),
            &config.jwt_secret,
            config.token_ttl,
        )?;

        Ok(Self::new(Arc::new(account)))
    }

    /// State for a server with no way to check credentials.
    pub fn unconfigured() -> Self {
        Self {
            login_router: LoginRouter::unconfigured(),
        }
    }
}
