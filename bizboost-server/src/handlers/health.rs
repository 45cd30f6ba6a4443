use crate::conn::Conn;
use crate::error::Error;

/// Report that the server is up and can reach its database.
#[tracing::instrument]
pub async fn handler(Conn(mut conn): Conn) -> Result<&'static str, Error> {
    sqlx::query("SELECT 1").execute(&mut *conn).await?;

    Ok("OK")
}
