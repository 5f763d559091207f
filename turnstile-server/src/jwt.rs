use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// What we put in the tokens we issue.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// The email of the account that logged in.
    pub sub: String,

    /// Issued at, in seconds since the Unix epoch.
    pub iat: i64,

    /// Expiry, in seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Claims for `sub`, issued now and valid for `ttl`. `None` if the expiry
    /// would fall outside the range of representable timestamps.
    pub fn new(sub: String, ttl: Duration) -> Option<Self> {
        let now = Utc::now();
        let exp = now.checked_add_signed(ttl)?;

        Some(Self {
            sub,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        })
    }

    /// Sign these claims with HS256.
    ///
    /// ## Errors
    ///
    /// If `jsonwebtoken` can't encode the token.
    pub fn encode(&self, key: &EncodingKey) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::default(), self, key)
    }
}
