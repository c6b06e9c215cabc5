use clap::Args;
use eyre::Result;

use crate::credentials::CredentialStore;

#[derive(Args)]
pub struct LogoutCommand {}

impl LogoutCommand {
    pub fn run(&self, store: &dyn CredentialStore) -> Result<()> {
        store.delete()?;
        println!("You have been logged out.");
        Ok(())
    }
}
