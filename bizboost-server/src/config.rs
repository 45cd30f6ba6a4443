use clap::Parser;
use std::{path::PathBuf, time::Duration};
use url::Url;

/// Account signup, email verification, and login for Business Boost
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// Address to listen on
    #[clap(long, env, default_value = "127.0.0.1:5000")]
    pub address: String,

    /// SQLite database to keep accounts in. Created if missing.
    #[clap(long, env, default_value = "sqlite://business_boost.db?mode=rwc")]
    pub database_url: String,

    /// Public URL of this server, used to build verification links
    #[clap(long, env, default_value = "http://localhost:5000")]
    pub base_url: Url,

    /// Landing page served at `/`
    #[clap(long, env, default_value = "index.html")]
    pub index_file: PathBuf,

    /// Request body size limit, in bytes
    #[clap(long, env, default_value = "65536")]
    pub body_limit: usize,

    /// Request timeout, in seconds
    #[clap(long, env, default_value = "5", value_parser = duration_parser)]
    pub request_timeout: Duration,
}

/// Parse a number of seconds.
fn duration_parser(s: &str) -> Result<Duration, std::num::ParseIntError> {
    s.parse().map(Duration::from_secs)
}
