//! Types shared between the Business Boost accounts server and its clients.

/// Request and response bodies for every endpoint, plus a typed client.
pub mod api;
pub use api::Client;
