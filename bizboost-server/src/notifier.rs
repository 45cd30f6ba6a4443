//! Delivering verification links.

use bizboost_core::api::verify;
use url::Url;

/// Subject line for verification messages.
pub const SUBJECT: &str = "Verify Your ByteSized Business Boost Account";

/// Something that can get a verification link to the owner of an email
/// address.
pub trait Notifier: Send + Sync {
    /// Send `name` at `email` a link containing `token`. Returns whether the
    /// message was handed off successfully.
    fn send_verification(&self, email: &str, name: &str, token: &str) -> bool;
}

/// Writes verification messages to the log instead of sending email. Someone
/// with access to the server logs has to pass the link along.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    /// Prefix for links, e.g. `https://boost.example.com`.
    base_url: Url,
}

impl LogNotifier {
    /// Construct a notifier that builds links under `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// The link a user follows to verify their account.
    pub fn link(&self, token: &str) -> String {
        format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            verify::path(token)
        )
    }
}

impl Notifier for LogNotifier {
    fn send_verification(&self, email: &str, name: &str, token: &str) -> bool {
        tracing::info!(
            to = email,
            subject = SUBJECT,
            link = %self.link(token),
            "Hi {name}, thank you for signing up! Please verify your email by following the link."
        );

        true
    }
}
