//! Signup, verification, and login.
//!
//! An account starts out unverified with a token. Following the link with that
//! token verifies the account and clears the token, so every link works
//! exactly once. Only verified accounts can log in.

use crate::notifier::Notifier;
use crate::store::{self, NewAccount, Store};
use crate::{bail_if, password, token};
use argon2::password_hash;
use bizboost_core::api::login::User;
use chrono::Utc;
use std::sync::Arc;

/// Validation message for signup.
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Validation message for login.
pub const CREDENTIALS_REQUIRED: &str = "Email and password are required";

/// What we tell someone who just signed up.
pub const CHECK_EMAIL: &str = "Account created! Please check your email for verification.";

/// Ways an account operation can fail.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A required field was missing or empty.
    #[error("{0}")]
    Validation(&'static str),

    /// Someone already signed up with this email.
    #[error("An account with this email already exists")]
    DuplicateAccount,

    /// The verification token never existed or was already used.
    #[error("This verification link is invalid or has already been used.")]
    InvalidToken,

    /// This should be the same for both missing accounts and incorrect
    /// passwords so as not to give additional information about what
    /// accounts exist to someone probing the system.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Right credentials, but the email hasn't been verified yet.
    #[error("Please verify your email before logging in")]
    UnverifiedAccount,

    /// Something went wrong which we should log but not expose to clients.
    #[error("internal error")]
    Internal,
}

impl From<store::Error> for Error {
    fn from(err: store::Error) -> Self {
        match err {
            store::Error::Duplicate => Self::DuplicateAccount,
            store::Error::Sqlx(err) => {
                tracing::error!(?err, "sqlx error");
                Self::Internal
            }
        }
    }
}

impl From<password_hash::Error> for Error {
    fn from(err: password_hash::Error) -> Self {
        tracing::error!(?err, "password hashing error");
        Self::Internal
    }
}

/// A successful signup.
#[derive(Debug, PartialEq, Eq)]
pub struct Registered {
    /// ID of the new account.
    pub id: i64,

    /// Whether the notifier accepted the verification message.
    pub notified: bool,
}

/// The account service. Build one per request around that request's store
/// handle.
pub struct Accounts<S> {
    /// Where accounts live.
    store: S,

    /// Where verification links go.
    notifier: Arc<dyn Notifier>,
}

impl<S: Store> Accounts<S> {
    /// Construct a service over `store`.
    pub fn new(store: S, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Give the store back, e.g. to inspect it in tests.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Create an unverified account and send its verification link.
    ///
    /// The account is committed before the notifier runs. If delivery fails
    /// we log it and still report success, since the account exists either
    /// way.
    ///
    /// ## Errors
    ///
    /// `Validation` for a blank field, `DuplicateAccount` if the email is
    /// taken, `Internal` for anything else.
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Registered, Error> {
        bail_if!(
            name.is_empty() || email.is_empty() || password.is_empty(),
            Error::Validation(ALL_FIELDS_REQUIRED)
        );

        let verification_token = token::generate();
        let password_hash = password::hash(password)?;

        let id = self
            .store
            .insert(&NewAccount {
                name,
                email,
                password_hash: &password_hash,
                verification_token: &verification_token,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(id, "created account");

        let notified = self
            .notifier
            .send_verification(email, name, &verification_token);
        if !notified {
            tracing::warn!(id, "could not send verification message");
        }

        Ok(Registered { id, notified })
    }

    /// Verify the account holding `token`, consuming the token.
    ///
    /// ## Errors
    ///
    /// `InvalidToken` if no account holds the token (including when it was
    /// already used), `Internal` for storage failures.
    pub async fn verify(&mut self, token: &str) -> Result<(), Error> {
        bail_if!(token.is_empty(), Error::InvalidToken);

        bail_if!(
            !self.store.consume_token(token).await?,
            Error::InvalidToken
        );

        Ok(())
    }

    /// Check credentials for a verified account.
    ///
    /// ## Errors
    ///
    /// `Validation` for a blank field, `InvalidCredentials` if the email is
    /// unknown or the password is wrong, `UnverifiedAccount` if the
    /// credentials are right but the account isn't verified yet, and
    /// `Internal` for anything else.
    pub async fn authenticate(&mut self, email: &str, password: &str) -> Result<User, Error> {
        bail_if!(
            email.is_empty() || password.is_empty(),
            Error::Validation(CREDENTIALS_REQUIRED)
        );

        let Some(account) = self.store.find_by_email(email).await? else {
            // unknown emails have to cost as much as wrong passwords
            password::verify_dummy(password);
            return Err(Error::InvalidCredentials);
        };

        bail_if!(
            !password::verify(password, &account.password_hash)?,
            Error::InvalidCredentials
        );

        bail_if!(!account.is_verified, Error::UnverifiedAccount);

        Ok(User {
            id: account.id,
            name: account.name,
        })
    }
}
