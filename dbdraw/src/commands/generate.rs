use std::path::PathBuf;

use clap::Args;
use dbdraw_codegen::{Feature, FeatureSet, GenerationConfig, is_valid_project_name};
use dbdraw_core::Language;
use dbdraw_graph::{
    Collection, PROJECT_ID_PREFIX, collections_from_file, collections_from_value,
};
use eyre::{Result, bail};

use super::UnwrapOrExit;
use crate::{
    api::ApiClient,
    credentials::{CredentialStore, require_token},
    ops::{self, generate::GenerateOptions},
    prompt,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Read the schema graph from a file instead of a dbdraw project
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Project name: lowercase letters, numbers and hyphens
    #[arg(short, long)]
    pub name: Option<String>,

    /// Project language
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Optional features (auth, swagger, docker, tests); prompted for when --name is omitted
    #[arg(short, long = "feature", value_delimiter = ',')]
    pub features: Vec<Feature>,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self, api: &ApiClient, store: &dyn CredentialStore) -> Result<()> {
        let collections = self.load_collections(api, store)?;
        let config = self.gather_config()?;

        let report = ops::generate(
            &collections,
            &config,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn load_collections(
        &self,
        api: &ApiClient,
        store: &dyn CredentialStore,
    ) -> Result<Vec<Collection>> {
        if let Some(path) = &self.input {
            return Ok(collections_from_file(path).unwrap_or_exit());
        }

        let token = require_token(store)?;
        let projects = api.list_projects(&token)?;
        if projects.is_empty() {
            bail!("No projects found for this account");
        }
        let labels: Vec<String> = projects.iter().map(|p| p.label()).collect();
        let selected = &projects[prompt::select("Select a project", &labels, 0)?];

        let flow = match &selected.flow {
            Some(flow) => flow.clone(),
            None => {
                let id = format!("{}{}", PROJECT_ID_PREFIX, selected.id);
                api.fetch_project(&token, &id)?.flow
            }
        };
        Ok(collections_from_value(flow).unwrap_or_exit())
    }

    fn gather_config(&self) -> Result<GenerationConfig> {
        let interactive = self.name.is_none();

        let name = match &self.name {
            Some(name) if is_valid_project_name(name) => name.clone(),
            Some(name) => bail!(
                "Invalid project name '{}': use lowercase letters, numbers and hyphens",
                name
            ),
            None => prompt::text("Enter your project name", Some("my-api"), |value| {
                if is_valid_project_name(value) {
                    Ok(())
                } else {
                    Err("Project name can only contain lowercase letters, numbers, and hyphens"
                        .to_string())
                }
            })?,
        };

        let language = match self.language {
            Some(language) => language,
            None => prompt::language()?,
        };

        let features: FeatureSet = if interactive && self.features.is_empty() {
            let labels: Vec<String> = Feature::ALL.iter().map(|f| f.label().to_string()).collect();
            prompt::multi_select("Select additional features", &labels)?
                .into_iter()
                .map(|i| Feature::ALL[i])
                .collect()
        } else {
            self.features.iter().copied().collect()
        };

        let output = match &self.output {
            Some(output) => output.clone(),
            None if interactive => {
                let default = format!("./{}", name);
                PathBuf::from(prompt::text(
                    "Where should the project be generated?",
                    Some(&default),
                    prompt::required("Output directory is required"),
                )?)
            }
            None => PathBuf::from(&name),
        };

        Ok(GenerationConfig::new(name, language)
            .with_features(features)
            .with_output_dir(output))
    }
}
