//! Access token storage.

use eyre::{Context, Result, bail};
use keyring::{Entry, Error as KeyringError};

const SERVICE_NAME: &str = "dbdraw";
const ACCOUNT_NAME: &str = "dbdraw_user_account";

/// Where the access token lives between runs.
pub trait CredentialStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    /// Removing a missing token is not an error.
    fn delete(&self) -> Result<()>;
}

/// Fails with the login hint when no token is stored.
pub fn require_token(store: &dyn CredentialStore) -> Result<String> {
    match store.load()? {
        Some(token) => Ok(token),
        None => bail!("You are not authenticated. Please log in first using: dbdraw login"),
    }
}

/// The OS keyring.
pub struct KeyringStore;

impl KeyringStore {
    fn entry(&self) -> Result<Entry> {
        Entry::new(SERVICE_NAME, ACCOUNT_NAME).wrap_err("Failed to open the system keyring")
    }
}

impl CredentialStore for KeyringStore {
    fn load(&self) -> Result<Option<String>> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(KeyringError::NoEntry) => Ok(None),
            Err(e) => Err(e).wrap_err("Failed to read the stored token"),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        self.entry()?
            .set_password(token)
            .wrap_err("Failed to store the token")?;
        tracing::debug!("stored access token");
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(KeyringError::NoEntry) => Ok(()),
            Err(e) => Err(e).wrap_err("Failed to remove the stored token"),
        }
    }
}
