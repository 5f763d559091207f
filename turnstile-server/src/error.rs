use crate::auth;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use turnstile_core::error::ErrorResp;

/// An error from the API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required field was absent from the request body. Holds the field
    /// name.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// The credentials were checked and rejected.
    #[error("unauthorized")]
    Unauthorized,

    /// Something went wrong which we should log but not expose to clients,
    /// including a misconfigured server.
    #[error("internal server error")]
    ServerFault,
}

impl Error {
    /// The HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::ServerFault => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<auth::Error> for Error {
    fn from(err: auth::Error) -> Self {
        tracing::error!(?err, "authenticator error");
        Self::ServerFault
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(ErrorResp {
            error: self.to_string(),
        });

        (self.status_code(), body).into_response()
    }
}
