//! Account signup, email verification, and login for Business Boost.

use bizboost_server::{notifier::LogNotifier, store, Config, State};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = store::open(&config.database_url).await?;

    let notifier = Arc::new(LogNotifier::new(config.base_url.clone()));
    let app = bizboost_server::app(State::new(pool, notifier), &config);

    let listener = TcpListener::bind(&config.address).await?;
    tracing::info!(address = ?listener.local_addr(), "listening");
    tracing::info!(base_url = %config.base_url, "verification links will be written to the log");

    axum::serve(listener, app).await?;

    Ok(())
}
