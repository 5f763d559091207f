/// Liveness probe.
pub mod health;

/// Check credentials and hand out tokens.
pub mod login;
