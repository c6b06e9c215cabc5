use clap::Args;
use eyre::{Result, bail};

use crate::{api::ApiClient, credentials::CredentialStore, prompt};

#[derive(Args)]
pub struct LoginCommand {
    /// Access token (prompted for when omitted)
    #[arg(long, env = "DBDRAW_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl LoginCommand {
    pub fn run(&self, api: &ApiClient, store: &dyn CredentialStore) -> Result<()> {
        if let Some(existing) = store.load()? {
            match api.validate_token(&existing)? {
                Some(user) => return Self::already_authenticated(&user.username, store),
                None => {
                    store.delete()?;
                    eprintln!("Your previous session has expired. Please log in again.");
                }
            }
        }

        let token = match &self.token {
            Some(token) => token.trim().to_string(),
            None => prompt::text(
                "Enter your access token",
                None,
                prompt::required("Token cannot be empty"),
            )?,
        };
        if token.is_empty() {
            bail!("Token cannot be empty");
        }

        match api.validate_token(&token)? {
            Some(user) => {
                store.save(&token)?;
                println!("✓ Authenticated as {}", user.username);
                Ok(())
            }
            None => {
                store.delete()?;
                bail!("Invalid or revoked token")
            }
        }
    }

    fn already_authenticated(username: &str, store: &dyn CredentialStore) -> Result<()> {
        println!("You are already authenticated as {}.", username);
        if prompt::confirm("Do you want to log out?")? {
            store.delete()?;
            println!("You have been logged out.");
        } else {
            println!("You are still logged in.");
        }
        Ok(())
    }
}
