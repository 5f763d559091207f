use super::login::LoginRouter;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// What the health check reports.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resp {
    /// Whether logins can succeed at all. A server without an authenticator
    /// is up but answers every login with a 500.
    pub authenticator_configured: bool,
}

/// Where the health check lives.
pub const PATH: &str = "/api/v1/health";

/// `GET` handler for `PATH`.
#[tracing::instrument(skip_all)]
pub async fn handler(State(router): State<LoginRouter>) -> Json<Resp> {
    Json(Resp {
        authenticator_configured: router.is_configured(),
    })
}
