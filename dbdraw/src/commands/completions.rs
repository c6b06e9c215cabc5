use std::io;

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::Result;

use super::Cli;

/// Print a shell completion script to stdout.
#[derive(Args)]
pub struct CompletionsCommand {
    shell: Shell,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        let mut cli = Cli::command();
        let name = cli.get_name().to_string();
        clap_complete::generate(self.shell, &mut cli, name, &mut io::stdout().lock());
        Ok(())
    }
}
