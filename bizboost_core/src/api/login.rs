use serde::{Deserialize, Serialize};

/// The request to log into the server.
#[derive(Debug, Serialize, Deserialize)]
pub struct Req {
    /// Email used at signup.
    #[serde(default)]
    pub email: String,

    /// Plaintext password used at signup.
    #[serde(default)]
    pub password: String,
}

/// Result of logging in.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resp {
    /// Always `true`.
    pub success: bool,

    /// Human-readable confirmation.
    pub message: String,

    /// Who just logged in.
    pub user: User,
}

/// The public view of an account. Never includes credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Account ID.
    pub id: i64,

    /// Display name given at signup.
    pub name: String,
}

/// Where the login endpoint lives.
pub const PATH: &str = "/api/login";
