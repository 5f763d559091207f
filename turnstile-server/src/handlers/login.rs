use crate::auth::Authenticator;
use crate::error::Error;
use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;
use turnstile_core::login::{Req, Resp};

/// A login request as the router sees it. The body is absent when the client
/// sent nothing we could decode as a login payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// The decoded payload, if there was one.
    pub body: Option<Req>,
}

impl Request {
    /// Decode a raw HTTP body. Empty bodies, `null`, and anything that isn't
    /// shaped like a login payload all become an absent body.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Self { body: None };
        }

        match serde_json::from_slice::<Option<Req>>(bytes) {
            Ok(body) => Self { body },
            Err(err) => {
                tracing::debug!(?err, "could not decode login body");
                Self { body: None }
            }
        }
    }
}

/// Validates login requests and hands the credentials to an `Authenticator`.
#[derive(Clone, Default)]
pub struct LoginRouter {
    authenticator: Option<Arc<dyn Authenticator>>,
}

impl LoginRouter {
    /// A router that checks credentials with `authenticator`.
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            authenticator: Some(authenticator),
        }
    }

    /// A router with nothing to check credentials against. Every well-formed
    /// request fails with `Error::ServerFault`.
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Whether there is an authenticator to check credentials against.
    pub fn is_configured(&self) -> bool {
        self.authenticator.is_some()
    }

    /// Handle one login request.
    ///
    /// ## Errors
    ///
    /// - `ServerFault` if there is no request or body, no authenticator, or
    ///   the authenticator fails
    /// - `MissingParameter` if `email` or `password` is absent or empty
    /// - `Unauthorized` if the authenticator rejects the credentials
    pub async fn route(&self, request: Option<Request>) -> Result<Resp, Error> {
        let body = request
            .and_then(|request| request.body)
            .ok_or(Error::ServerFault)?;

        let email = required(body.email, "email")?;
        let password = required(body.password, "password")?;

        let Some(authenticator) = &self.authenticator else {
            tracing::error!("login router has no authenticator");
            return Err(Error::ServerFault);
        };

        match authenticator.authenticate(&email, &password).await? {
            Some(token) if !token.is_empty() => Ok(Resp { token }),
            _ => Err(Error::Unauthorized),
        }
    }
}

impl std::fmt::Debug for LoginRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRouter")
            .field("configured", &self.is_configured())
            .finish()
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, Error> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(Error::MissingParameter(name))
}

/// `POST` handler for `turnstile_core::login::PATH`.
#[tracing::instrument(skip_all)]
pub async fn handler(State(router): State<LoginRouter>, body: Bytes) -> Result<Json<Resp>, Error> {
    router
        .route(Some(Request::from_bytes(&body)))
        .await
        .map(Json)
}
