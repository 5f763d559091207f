use super::{Authenticator, Error};
use crate::jwt::Claims;
use axum::async_trait;
use chrono::Duration;
use jsonwebtoken::EncodingKey;

/// An authenticator that knows about exactly one account.
pub struct SingleAccount {
    email: String,
    password: String,
    encoding_key: EncodingKey,
    token_ttl: Duration,
}

impl SingleAccount {
    /// Create a new authenticator for one account. Tokens are signed with
    /// `jwt_base64_secret` and expire after `token_ttl`.
    ///
    /// ## Errors
    ///
    /// If the secret is not valid base64.
    pub fn new(
        email: String,
        password: String,
        jwt_base64_secret: &str,
        token_ttl: Duration,
    ) -> Result<Self, jsonwebtoken::errors::Error> {
        Ok(Self {
            email,
            password,
            encoding_key: EncodingKey::from_base64_secret(jwt_base64_secret)?,
            token_ttl,
        })
    }
}

impl std::fmt::Debug for SingleAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingleAccount")
            .field("email", &self.email)
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Authenticator for SingleAccount {
    #[tracing::instrument(skip(password))]
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<String>, Error> {
        if email != self.email || password != self.password {
            tracing::debug!("credentials did not match");
            return Ok(None);
        }

        let claims = Claims::new(self.email.clone(), self.token_ttl)
            .ok_or(Error::TtlOutOfRange(self.token_ttl))?;
        let token = claims.encode(&self.encoding_key)?;

        Ok(Some(token))
    }
}
