use serde::{Deserialize, Serialize};

/// The request to register a new account.
///
/// Missing fields deserialize as empty strings so the server can reject them
/// with a single validation message.
#[derive(Debug, Serialize, Deserialize)]
pub struct Req {
    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Email to use for contact and login.
    #[serde(default)]
    pub email: String,

    /// Plaintext password to use for login.
    #[serde(default)]
    pub password: String,
}

/// Result of registering a new account.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resp {
    /// Always `true`.
    pub success: bool,

    /// What to do next (check your email.)
    pub message: String,
}

/// Where the signup endpoint lives.
pub const PATH: &str = "/api/signup";
