//! A login server for a single account.

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use turnstile_server::{app, config::Config, state::State};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = State::from_config(&config).wrap_err("could not set up authentication")?;

    let listener = TcpListener::bind(&config.address)
        .await
        .wrap_err_with(|| format!("could not bind to {}", config.address))?;
    tracing::info!(address = ?listener.local_addr(), "listening");

    axum::serve(listener, app(state, &config)).await?;

    Ok(())
}
