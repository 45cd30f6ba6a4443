use crate::error::Error;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use sqlx::{pool::PoolConnection, Sqlite, SqlitePool};

/// A connection to the database, held for the length of one request and
/// returned to the pool when dropped.
#[derive(Debug)]
pub struct Conn(pub PoolConnection<Sqlite>);

#[async_trait]
impl<State> FromRequestParts<State> for Conn
where
    SqlitePool: FromRef<State>,
    State: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &State,
    ) -> Result<Self, Self::Rejection> {
        let pool = SqlitePool::from_ref(state);

        let conn = pool.acquire().await?;

        Ok(Self(conn))
    }
}
