use crate::accounts::{self, Accounts};
use crate::conn::Conn;
use crate::error::Error;
use crate::notifier::Notifier;
use crate::store::SqliteStore;
use axum::extract::{rejection::JsonRejection, State};
use axum::http::StatusCode;
use axum::Json;
use bizboost_core::api::login::{Req, Resp};
use std::sync::Arc;

/// What callers see when login fails for reasons they can't fix.
static LOGIN_FAILED: &str = "An error occurred during login";

#[tracing::instrument(skip_all)]
pub async fn handler(
    conn: Result<Conn, Error>,
    State(notifier): State<Arc<dyn Notifier>>,
    payload: Result<Json<Req>, JsonRejection>,
) -> Result<Json<Resp>, Error> {
    // `Conn` already logged the reason.
    let Conn(conn) = conn.map_err(|_| {
        Error::custom_with_status(LOGIN_FAILED, StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable login body");
        Error::custom(accounts::CREDENTIALS_REQUIRED)
    })?;

    let user = Accounts::new(SqliteStore(conn), notifier)
        .authenticate(&req.email, &req.password)
        .await
        .map_err(|err| Error::from_account(&err, LOGIN_FAILED))?;

    Ok(Json(Resp {
        success: true,
        message: "Login successful".to_string(),
        user,
    }))
}
