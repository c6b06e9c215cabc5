use std::env;

use clap::Args;
use dbdraw_core::{Language, ModuleType};
use dbdraw_graph::{LINK_PATH, PROJECT_ID_PREFIX, ProjectLink};
use eyre::{Context, Result, bail};

use super::UnwrapOrExit;
use crate::{
    api::ApiClient,
    credentials::{CredentialStore, require_token},
    prompt,
};

const DEFAULT_MODELS_PATH: &str = "./models";

#[derive(Args)]
pub struct LinkCommand {
    /// Project id to link (chosen from your projects when omitted)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Directory the schema files are written to
    #[arg(long)]
    pub path: Option<String>,

    /// Project language
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Module system of a JavaScript project
    #[arg(short, long)]
    pub module_type: Option<ModuleType>,

    /// Overwrite an existing link without asking
    #[arg(long)]
    pub force: bool,
}

impl LinkCommand {
    pub fn run(&self, api: &ApiClient, store: &dyn CredentialStore) -> Result<()> {
        let cwd = env::current_dir().wrap_err("Failed to get current directory")?;
        if !cwd.join("package.json").exists() {
            bail!("This is not a backend folder. Please navigate to a valid backend folder.");
        }

        let project_id = match &self.project {
            Some(id) => id.trim_start_matches(PROJECT_ID_PREFIX).to_string(),
            None => Self::pick_project(api, &require_token(store)?)?,
        };

        let path = match &self.path {
            Some(path) => path.clone(),
            None => prompt::text(
                "Where should the files be saved?",
                Some(DEFAULT_MODELS_PATH),
                |_| Ok(()),
            )?,
        };
        let language = match self.language {
            Some(language) => language,
            None => prompt::language()?,
        };
        let module_type = match (language, self.module_type) {
            (Language::TypeScript, _) => ModuleType::Module,
            (Language::JavaScript, Some(module_type)) => module_type,
            (Language::JavaScript, None) => prompt::module_type()?,
        };

        let link = ProjectLink::new(&project_id, path, language, module_type);
        if !link.is_valid() {
            bail!("'{}' is not a valid project id", project_id);
        }

        let link_path = cwd.join(LINK_PATH);
        if link_path.exists()
            && !self.force
            && !prompt::confirm("Config file already exists. Do you want to overwrite it?")?
        {
            println!("Operation canceled.");
            return Ok(());
        }

        link.save(&link_path).unwrap_or_exit();
        tracing::info!(project = %link.project_id, path = %link.path, "linked project");
        println!("✓ Project linked successfully!");
        Ok(())
    }

    fn pick_project(api: &ApiClient, token: &str) -> Result<String> {
        let projects = api.list_projects(token)?;
        if projects.is_empty() {
            bail!("No projects found for this account");
        }

        let labels: Vec<String> = projects.iter().map(|p| p.label()).collect();
        let index = prompt::select("Select a project", &labels, 0)?;
        Ok(projects[index].id.clone())
    }
}
