/// Liveness and database check
pub mod health;

/// `POST /api/login`
pub mod login;

/// `POST /api/signup`
pub mod signup;

/// `GET /verify/:token`
pub mod verify;
