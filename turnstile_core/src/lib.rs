//! Types shared between the turnstile server and its clients.

/// Call the login API from Rust.
pub mod client;
pub use client::Client;

/// Things that can go wrong talking to the API, and how the API reports them.
pub mod error;
pub use error::Error;

/// Request and response shapes for the login endpoint.
pub mod login;
