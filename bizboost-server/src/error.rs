use crate::accounts;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bizboost_core::api::error::ErrorResp;

/// An error from the API
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Something went wrong which we should log but not expose to clients.
    Internal,

    /// Some handler-specific error
    Custom(StatusCode, String),
}

/// Return early with an error if the condition holds.
#[macro_export]
macro_rules! bail_if {
    ($cond:expr, $err:expr) => {
        if $cond {
            return Err($err.into());
        }
    };
}

impl Error {
    /// Construct a custom error
    pub fn custom(message: &str) -> Self {
        Self::custom_with_status(message, StatusCode::BAD_REQUEST)
    }

    /// Construct a custom error with a specific status code
    pub fn custom_with_status(message: &str, status: StatusCode) -> Self {
        Self::Custom(status, message.to_string())
    }

    /// Convert an account error for a specific endpoint. Internal errors get
    /// `internal_message` so callers see which operation failed but nothing
    /// about why.
    pub fn from_account(err: &accounts::Error, internal_message: &str) -> Self {
        let status = match err {
            accounts::Error::Validation(_)
            | accounts::Error::DuplicateAccount
            | accounts::Error::InvalidToken => StatusCode::BAD_REQUEST,
            accounts::Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            accounts::Error::UnverifiedAccount => StatusCode::FORBIDDEN,
            accounts::Error::Internal => {
                return Self::custom_with_status(
                    internal_message,
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
            }
        };

        Self::custom_with_status(&err.to_string(), status)
    }

    /// Unwrap a handler-specific error
    #[cfg(test)]
    pub fn unwrap_custom(self) -> (StatusCode, String) {
        match self {
            Self::Custom(status_code, message) => (status_code, message),
            Self::Internal => panic!("called `Error::unwrap_custom` on an `Internal`"),
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(?err, "sqlx error");
        Self::Internal
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            Self::Custom(status_code, message) => (status_code, message),
        };

        (status, Json(ErrorResp::new(message))).into_response()
    }
}
