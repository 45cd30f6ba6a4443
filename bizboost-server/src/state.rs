use crate::notifier::Notifier;
use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared state needed by requests.
#[derive(Clone, FromRef)]
pub struct State {
    /// Database connection pool.
    pool: SqlitePool,

    /// Delivers verification links after signup.
    notifier: Arc<dyn Notifier>,
}

impl State {
    /// Create a new state.
    pub fn new(pool: SqlitePool, notifier: Arc<dyn Notifier>) -> Self {
        Self { pool, notifier }
    }
}
