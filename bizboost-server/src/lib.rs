//! The Business Boost accounts server: signup, email verification, and login.

/// Register, verify, authenticate
pub mod accounts;

/// Command-line and environment configuration
pub mod config;
pub use config::Config;

/// Per-request database connections
pub mod conn;

/// Errors as HTTP responses
pub mod error;

/// One module per endpoint
pub mod handlers;

/// Delivering verification links
pub mod notifier;

/// Password hashing
pub mod password;

/// Shared request state
pub mod state;
pub use state::State;

/// Account persistence
pub mod store;

/// Verification tokens
pub mod token;

use axum::{
    routing::{get, post},
    Router,
};
use bizboost_core::api::{login, signup, verify};
use tower_http::{compression, limit, services::ServeFile, timeout, trace};

/// Build the application: routes, middleware, and state.
pub fn app(state: State, config: &Config) -> Router {
    Router::new()
        // ROUTES
        .route_service("/", ServeFile::new(&config.index_file))
        .route("/health", get(handlers::health::handler))
        .route(signup::PATH, post(handlers::signup::handler))
        .route(verify::PATH, get(handlers::verify::handler))
        .route(login::PATH, post(handlers::login::handler))
        // MIDDLEWARE
        .layer(trace::TraceLayer::new_for_http())
        .layer(compression::CompressionLayer::new())
        .layer(limit::RequestBodyLimitLayer::new(config.body_limit))
        .layer(timeout::TimeoutLayer::new(config.request_timeout))
        // STATE
        .with_state(state)
}
