mod api;
mod commands;
mod credentials;
mod ops;
mod prompt;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

const VERBOSE_FILTER: &str =
    "warn,dbdraw=debug,dbdraw_graph=debug,dbdraw_codegen=debug,dbdraw_codegen_mongoose=debug";

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose());
    cli.run()
}

/// Logs go to stderr; reports own stdout.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
