use axum::async_trait;

/// Check credentials against one account given in configuration.
pub mod single_account;
pub use single_account::SingleAccount;

/// Verifies credentials and issues tokens for the login endpoint.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Check `email` and `password`.
    ///
    /// Returns `Ok(Some(token))` for good credentials and `Ok(None)` for bad
    /// ones. An empty token counts as a rejection.
    ///
    /// ## Errors
    ///
    /// Anything that prevents the check from completing. Callers must not
    /// treat this as a rejection of the credentials.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<String>, Error>;
}

/// Things that can go wrong while authenticating.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// We could not sign a token for an account that logged in successfully.
    #[error("could not issue token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// The configured token lifetime puts the expiry past the last timestamp
    /// we can represent.
    #[error("token lifetime {0} is out of range")]
    TtlOutOfRange(chrono::Duration),

    /// Some other failure inside the authenticator.
    #[error("authenticator failed: {0}")]
    Failed(String),
}
