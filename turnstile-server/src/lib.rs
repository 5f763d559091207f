//! A login server: validates credentials and hands out tokens.

/// Checking credentials.
pub mod auth;

/// Configuration and argument parsing
pub mod config;

/// How the API reports errors.
pub mod error;

/// Request handlers, one module per endpoint.
pub mod handlers;

/// Tokens we issue.
pub mod jwt;

/// Shared state for handlers.
pub mod state;

use axum::{
    http::header::AUTHORIZATION,
    routing::{get, post},
    Router,
};
use std::iter::once;
use tower_http::{compression, decompression, limit, sensitive_headers, timeout, trace};

/// All the routes we serve, without any middleware.
pub fn routes(state: state::State) -> Router {
    Router::new()
        .route(turnstile_core::login::PATH, post(handlers::login::handler))
        .route(handlers::health::PATH, get(handlers::health::handler))
        .with_state(state)
}

/// The full application: routes plus the middleware stack described by
/// `config`.
pub fn app(state: state::State, config: &config::Config) -> Router {
    routes(state)
        .layer(trace::TraceLayer::new_for_http())
        .layer(compression::CompressionLayer::new())
        .layer(decompression::RequestDecompressionLayer::new())
        .layer(limit::RequestBodyLimitLayer::new(config.body_limit))
        .layer(sensitive_headers::SetSensitiveHeadersLayer::new(once(
            AUTHORIZATION,
        )))
        .layer(timeout::TimeoutLayer::new(config.request_timeout))
}
