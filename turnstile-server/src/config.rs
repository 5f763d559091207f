use clap::Parser;
use std::time::Duration;

/// A login server for a single account
#[derive(Parser)]
#[clap(version)]
pub struct Config {
    /// Address to listen on
    #[clap(long, env, default_value = "127.0.0.1:3000")]
    pub address: String,

    /// Request body size limit, in bytes
    #[clap(long, env, default_value = "5242880")]
    pub body_limit: usize,

    /// Request timeout, in seconds
    #[clap(long, env, default_value = "5", value_parser = duration_parser)]
    pub request_timeout: Duration,

    /// Base64-encoded secret for signing tokens
    #[clap(long, env, hide_env_values = true)]
    pub jwt_secret: String,

    /// Email of the account allowed to log in
    #[clap(long, env)]
    pub login_email: String,

    /// Password of the account allowed to log in
    #[clap(long, env, hide_env_values = true)]
    pub login_password: String,

    /// How long issued tokens stay valid, in seconds
    #[clap(long, env, default_value = "2592000", value_parser = ttl_parser)]
    pub token_ttl: chrono::Duration,
}

fn duration_parser(s: &str) -> Result<Duration, std::num::ParseIntError> {
    s.parse().map(Duration::from_secs)
}

fn ttl_parser(s: &str) -> Result<chrono::Duration, String> {
    let secs: i64 = s.parse().map_err(|err: std::num::ParseIntError| err.to_string())?;

    if secs <= 0 {
        return Err("token TTL must be positive".to_string());
    }

    chrono::Duration::try_seconds(secs)
        .filter(|ttl| chrono::Utc::now().checked_add_signed(*ttl).is_some())
        .ok_or_else(|| format!("{secs} seconds is too long"))
}
