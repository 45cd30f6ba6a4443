//! An in-memory `Store` for exercising the account service without a
//! database.

use super::{Account, Error, NewAccount, Store};

/// Accounts kept in a `Vec`, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Everything inserted so far.
    pub accounts: Vec<Account>,
}

impl Store for MemoryStore {
    async fn insert(&mut self, account: &NewAccount<'_>) -> Result<i64, Error> {
        if self.accounts.iter().any(|a| a.email == account.email) {
            return Err(Error::Duplicate);
        }

        let id = i64::try_from(self.accounts.len()).expect("fewer than i64::MAX accounts") + 1;

        self.accounts.push(Account {
            id,
            name: account.name.to_string(),
            email: account.email.to_string(),
            password_hash: account.password_hash.to_string(),
            verification_token: Some(account.verification_token.to_string()),
            is_verified: false,
            created_at: account.created_at,
        });

        Ok(id)
    }

    async fn consume_token(&mut self, token: &str) -> Result<bool, Error> {
        let mut matching = self
            .accounts
            .iter_mut()
            .filter(|a| a.verification_token.as_deref() == Some(token));

        match (matching.next(), matching.next()) {
            (Some(account), None) => {
                account.is_verified = true;
                account.verification_token = None;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn find_by_email(&mut self, email: &str) -> Result<Option<Account>, Error> {
        Ok(self.accounts.iter().find(|a| a.email == email).cloned())
    }
}
