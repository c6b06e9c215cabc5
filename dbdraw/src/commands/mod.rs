mod completions;
mod generate;
mod link;
mod login;
mod logout;
mod sync;

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use link::LinkCommand;
use login::LoginCommand;
use logout::LogoutCommand;
use sync::SyncCommand;

use crate::{
    api::{ApiClient, DEFAULT_API_URL},
    credentials::KeyringStore,
};

/// Extension trait for exiting on graph and link errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for dbdraw_graph::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "dbdraw")]
#[command(version)]
#[command(about = "Generate Express + Mongoose backends from dbdraw schema diagrams")]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Base URL of the dbdraw service
    #[arg(long, global = true, env = "DBDRAW_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.global.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Login(cmd) => cmd.run(&self.api()?, &KeyringStore),
            Commands::Logout(cmd) => cmd.run(&KeyringStore),
            Commands::Link(cmd) => cmd.run(&self.api()?, &KeyringStore),
            Commands::Sync(cmd) => cmd.run(&self.api()?, &KeyringStore),
            Commands::Generate(cmd) => cmd.run(&self.api()?, &KeyringStore),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    fn api(&self) -> Result<ApiClient> {
        ApiClient::new(&self.global.api_url)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the access token securely
    Login(LoginCommand),

    /// Remove the stored access token
    Logout(LogoutCommand),

    /// Link this backend folder to a dbdraw project
    Link(LinkCommand),

    /// Write Mongoose schema files for the linked project
    Sync(SyncCommand),

    /// Generate a complete Express + Mongoose API project
    Generate(GenerateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "dbdraw",
            "sync",
            "--models",
            "User,Post",
            "--api-url",
            "http://localhost:3000",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose());
        assert_eq!(cli.global.api_url, "http://localhost:3000");
        match cli.command {
            Commands::Sync(cmd) => assert_eq!(cmd.models, ["User", "Post"]),
            _ => panic!("expected sync"),
        }
    }
}
