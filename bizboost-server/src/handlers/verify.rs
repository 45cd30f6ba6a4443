use crate::accounts::{self, Accounts};
use crate::conn::Conn;
use crate::error::Error;
use crate::notifier::Notifier;
use crate::store::SqliteStore;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use std::sync::Arc;

/// Shown after a successful verification.
const VERIFIED_PAGE: &str = r#"<!doctype html>
<html>
  <head><title>Email Verified!</title></head>
  <body>
    <h1>Email Verified!</h1>
    <p>Your account has been successfully verified.<br>You can now log in to your account.</p>
    <a href="/">Go to Login</a>
  </body>
</html>
"#;

/// Shown for unknown or already-used tokens.
const INVALID_TOKEN_PAGE: &str = r#"<!doctype html>
<html>
  <head><title>Verification Failed</title></head>
  <body>
    <h1>Invalid Token</h1>
    <p>This verification link is invalid or has already been used.</p>
  </body>
</html>
"#;

/// Shown when we couldn't check the token at all.
const FAILED_PAGE: &str = r#"<!doctype html>
<html>
  <head><title>Verification Failed</title></head>
  <body>
    <h1>Something Went Wrong</h1>
    <p>We couldn't verify your email right now. Please try the link again later.</p>
  </body>
</html>
"#;

/// Follow a verification link. People land here from their inbox, so this
/// responds with a page instead of JSON.
#[tracing::instrument(skip_all)]
pub async fn handler(
    conn: Result<Conn, Error>,
    State(notifier): State<Arc<dyn Notifier>>,
    Path(token): Path<String>,
) -> (StatusCode, Html<&'static str>) {
    // `Conn` already logged the reason.
    let Ok(Conn(conn)) = conn else {
        return (StatusCode::INTERNAL_SERVER_ERROR, Html(FAILED_PAGE));
    };

    match Accounts::new(SqliteStore(conn), notifier)
        .verify(&token)
        .await
    {
        Ok(()) => (StatusCode::OK, Html(VERIFIED_PAGE)),
        Err(accounts::Error::Internal) => (StatusCode::INTERNAL_SERVER_ERROR, Html(FAILED_PAGE)),
        Err(err) => {
            tracing::debug!(%err, "rejected verification");
            (StatusCode::BAD_REQUEST, Html(INVALID_TOKEN_PAGE))
        }
    }
}
