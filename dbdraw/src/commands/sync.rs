use std::{env, path::PathBuf};

use clap::Args;
use dbdraw_codegen_mongoose::ModelSelection;
use dbdraw_graph::{Collection, LINK_PATH, ProjectLink, collections_from_file, collections_from_value};
use eyre::{Context, Result, bail};

use super::UnwrapOrExit;
use crate::{
    api::ApiClient,
    credentials::{CredentialStore, require_token},
    ops::{self, sync::SyncOptions},
    prompt,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct SyncCommand {
    /// Models to sync by name, or `all` (chosen interactively when omitted)
    #[arg(short, long, value_delimiter = ',')]
    pub models: Vec<String>,

    /// Read the schema graph from a file instead of the linked project
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Overwrite an existing target folder without asking
    #[arg(short, long)]
    pub yes: bool,
}

impl SyncCommand {
    pub fn run(&self, api: &ApiClient, store: &dyn CredentialStore) -> Result<()> {
        let cwd = env::current_dir().wrap_err("Failed to get current directory")?;
        let link = ProjectLink::load(cwd.join(LINK_PATH)).unwrap_or_exit();

        let (title, collections) = match &self.input {
            Some(path) => (
                path.display().to_string(),
                collections_from_file(path).unwrap_or_exit(),
            ),
            None => {
                let token = require_token(store)?;
                let project = api.fetch_project(&token, &link.project_id)?;
                (project.title, collections_from_value(project.flow).unwrap_or_exit())
            }
        };

        let selection = if self.models.is_empty() {
            Self::prompt_selection(&collections)?
        } else {
            ModelSelection::parse(&self.models.join(","))
        };

        let models_dir = link.models_dir(&cwd);
        if models_dir.exists()
            && !self.yes
            && !prompt::confirm("Target folder already exists. Do you want to overwrite it?")?
        {
            println!("Operation canceled.");
            return Ok(());
        }

        let report = ops::sync(
            &collections,
            &link,
            SyncOptions {
                base_dir: &cwd,
                selection,
                project_title: title,
            },
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn prompt_selection(collections: &[Collection]) -> Result<ModelSelection> {
        let mut items = vec!["All Models".to_string()];
        items.extend(collections.iter().map(|c| c.name.clone()));

        let chosen = prompt::multi_select("Select models to sync", &items)?;
        if chosen.is_empty() {
            bail!("No models selected");
        }
        if chosen.contains(&0) {
            return Ok(ModelSelection::All);
        }
        Ok(ModelSelection::Named(
            chosen.into_iter().map(|i| items[i].clone()).collect(),
        ))
    }
}
