//! Persistence for accounts.
//!
//! The `Store` trait is what the account service talks to. `SqliteStore` is
//! the real implementation: it wraps a single pooled connection, which the
//! `Conn` extractor acquires at the start of a request and which goes back to
//! the pool when the store is dropped.

use chrono::{DateTime, Utc};
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    FromRow, Sqlite, SqlitePool,
};
use std::{future::Future, str::FromStr};

#[cfg(test)]
pub mod memory;

/// An account as stored.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct Account {
    /// Assigned by the store on insert.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Unique across all accounts.
    pub email: String,

    /// PHC-format password hash.
    pub password_hash: String,

    /// Present until the account is verified, then cleared for good.
    pub verification_token: Option<String>,

    /// Whether the owner has followed their verification link.
    pub is_verified: bool,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Everything needed to insert a new, unverified account.
#[derive(Debug)]
pub struct NewAccount<'a> {
    /// Display name.
    pub name: &'a str,

    /// Email address; must not already be registered.
    pub email: &'a str,

    /// Already-hashed password.
    pub password_hash: &'a str,

    /// Freshly generated verification token.
    pub verification_token: &'a str,

    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Things that can go wrong in the store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The email is already taken.
    #[error("an account with this email already exists")]
    Duplicate,

    /// Anything else the database reports.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Storage operations needed by the account service.
pub trait Store {
    /// Insert an unverified account, returning its new ID.
    ///
    /// ## Errors
    ///
    /// `Error::Duplicate` if the email is already registered.
    fn insert(
        &mut self,
        account: &NewAccount<'_>,
    ) -> impl Future<Output = Result<i64, Error>> + Send;

    /// Mark the account holding `token` as verified and clear the token, in a
    /// single step. Returns whether exactly one account was updated.
    fn consume_token(&mut self, token: &str) -> impl Future<Output = Result<bool, Error>> + Send;

    /// Look up an account by exact email.
    fn find_by_email(
        &mut self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Account>, Error>> + Send;
}

/// A store backed by one SQLite connection.
#[derive(Debug)]
pub struct SqliteStore(pub PoolConnection<Sqlite>);

impl Store for SqliteStore {
    async fn insert(&mut self, account: &NewAccount<'_>) -> Result<i64, Error> {
        let result = sqlx::query(
            "INSERT INTO users \
            (name, email, password_hash, verification_token, is_verified, created_at) \
            VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(account.name)
        .bind(account.email)
        .bind(account.password_hash)
        .bind(account.verification_token)
        .bind(false)
        .bind(account.created_at)
        .execute(&mut *self.0)
        .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            // Email is the only unique column we write, so concurrent signups
            // for the same address land here.
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => Err(Error::Duplicate),
            Err(err) => Err(err.into()),
        }
    }

    async fn consume_token(&mut self, token: &str) -> Result<bool, Error> {
        let done = sqlx::query(
            "UPDATE users SET is_verified = TRUE, verification_token = NULL \
            WHERE verification_token = ?",
        )
        .bind(token)
        .execute(&mut *self.0)
        .await?;

        Ok(done.rows_affected() == 1)
    }

    async fn find_by_email(&mut self, email: &str) -> Result<Option<Account>, Error> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, password_hash, verification_token, is_verified, created_at \
            FROM users WHERE email = ? LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&mut *self.0)
        .await?;

        Ok(account)
    }
}

/// Things that can go wrong opening the database.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    /// Bad URL or unreachable database.
    #[error("could not connect to database: {0}")]
    Connect(#[from] sqlx::Error),

    /// The schema could not be brought up to date.
    #[error("could not migrate database: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connect to the database at `url`, creating it if needed, and apply any
/// pending migrations.
///
/// ## Errors
///
/// See `OpenError`.
pub async fn open(url: &str) -> Result<SqlitePool, OpenError> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}
