use crate::accounts::{self, Accounts};
use crate::conn::Conn;
use crate::error::Error;
use crate::notifier::Notifier;
use crate::store::SqliteStore;
use axum::extract::{rejection::JsonRejection, State};
use axum::http::StatusCode;
use axum::Json;
use bizboost_core::api::signup::{Req, Resp};
use std::sync::Arc;

/// What callers see when signup fails for reasons they can't fix.
static SIGNUP_FAILED: &str = "An error occurred during signup";

#[tracing::instrument(skip_all)]
pub async fn handler(
    conn: Result<Conn, Error>,
    State(notifier): State<Arc<dyn Notifier>>,
    payload: Result<Json<Req>, JsonRejection>,
) -> Result<Json<Resp>, Error> {
    // `Conn` already logged the reason.
    let Conn(conn) = conn.map_err(|_| {
        Error::custom_with_status(SIGNUP_FAILED, StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    // A body we can't read is as good as a body with nothing in it.
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable signup body");
        Error::custom(accounts::ALL_FIELDS_REQUIRED)
    })?;

    Accounts::new(SqliteStore(conn), notifier)
        .register(&req.name, &req.email, &req.password)
        .await
        .map_err(|err| Error::from_account(&err, SIGNUP_FAILED))?;

    Ok(Json(Resp {
        success: true,
        message: accounts::CHECK_EMAIL.to_string(),
    }))
}
