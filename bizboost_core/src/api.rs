/// Things that can go wrong when talking to the server
pub mod error;
pub use error::Error;

/// A typed client for the accounts API
pub mod client;
pub use client::Client;

/// Create a new account
pub mod signup;

/// Log into an existing, verified account
pub mod login;

/// Confirm control of an email address
pub mod verify;
