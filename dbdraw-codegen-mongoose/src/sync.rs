//! Inline schema sync into an existing project.

use std::{fmt, path::Path};

use dbdraw_codegen::{
    Emission, Emitter, GenerationConfig, SkippedCollection,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
};
use dbdraw_core::{File, Language, ModuleType, WriteResult, to_pascal_case};
use dbdraw_graph::{Collection, ProjectLink};
use eyre::Result;

use crate::emitters::InlineSchemaEmitter;

/// Which collections a sync writes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModelSelection {
    #[default]
    All,
    /// Collections named by label or capitalized name
    Named(Vec<String>),
}

impl ModelSelection {
    /// Parses `all` or a comma separated list of names.
    ///
    /// Names are trimmed but may contain inner spaces, so a label such as
    /// `Order Item` can be selected as drawn.
    pub fn parse(input: &str) -> Self {
        let names: Vec<String> = input
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        if names.is_empty() || names.iter().any(|n| n.eq_ignore_ascii_case("all")) {
            ModelSelection::All
        } else {
            ModelSelection::Named(names)
        }
    }

    pub fn includes(&self, collection: &Collection) -> bool {
        match self {
            ModelSelection::All => true,
            ModelSelection::Named(names) => names.iter().any(|name| matches(name, collection)),
        }
    }

    /// Requested names that match no collection.
    pub fn unknown<'s>(&'s self, collections: &[Collection]) -> Vec<&'s str> {
        match self {
            ModelSelection::All => Vec::new(),
            ModelSelection::Named(names) => names
                .iter()
                .filter(|name| !collections.iter().any(|c| matches(name, c)))
                .map(String::as_str)
                .collect(),
        }
    }
}

impl fmt::Display for ModelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSelection::All => write!(f, "all"),
            ModelSelection::Named(names) => write!(f, "{}", names.join(", ")),
        }
    }
}

fn matches(name: &str, collection: &Collection) -> bool {
    name == collection.name || name == to_pascal_case(&collection.name)
}

/// Writes one inline schema file per selected collection.
///
/// Files land directly in the output directory, named `<Pascal>.<ext>`.
pub struct SchemaSync<'a> {
    collections: &'a [Collection],
    language: Language,
    emitter: InlineSchemaEmitter,
    selection: ModelSelection,
}

impl LanguageCodegen for SchemaSync<'_> {
    fn preview(&self) -> Vec<PreviewFile> {
        self.emissions()
            .into_iter()
            .filter_map(Emission::into_artifact)
            .map(|artifact| PreviewFile {
                path: artifact.file_name,
                content: artifact.content,
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for emission in self.emissions() {
            match emission {
                Emission::File(artifact) => {
                    let file = File::new(output_dir.join(&artifact.file_name), artifact.content);
                    if file.write()? == WriteResult::Written {
                        result.written.push(artifact.file_name);
                    }
                }
                Emission::Skipped(skipped) => result.skipped.push(skipped),
            }
        }

        tracing::info!(
            dir = %output_dir.display(),
            written = result.written.len(),
            skipped = result.skipped.len(),
            "synced schemas"
        );
        Ok(result)
    }
}

impl<'a> SchemaSync<'a> {
    pub fn new(collections: &'a [Collection], language: Language, module_type: ModuleType) -> Self {
        let module_type = match language {
            Language::TypeScript => ModuleType::Module,
            Language::JavaScript => module_type,
        };
        Self {
            collections,
            language,
            emitter: InlineSchemaEmitter::new(module_type),
            selection: ModelSelection::All,
        }
    }

    /// Sync settings taken from a project link.
    pub fn from_link(collections: &'a [Collection], link: &ProjectLink) -> Self {
        Self::new(collections, link.language, link.effective_module_type())
    }

    pub fn with_selection(mut self, selection: ModelSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Selected collections in graph order.
    pub fn selected(&self) -> impl Iterator<Item = &'a Collection> + '_ {
        self.collections
            .iter()
            .filter(|collection| self.selection.includes(collection))
    }

    /// Selected collections that would produce no file.
    pub fn skipped(&self) -> Vec<SkippedCollection> {
        self.emissions()
            .into_iter()
            .filter_map(|emission| match emission {
                Emission::Skipped(skipped) => Some(skipped),
                Emission::File(_) => None,
            })
            .collect()
    }

    fn emissions(&self) -> Vec<Emission> {
        // The emitters only read the language from the config
        let config = GenerationConfig::new("sync", self.language);
        self.selected()
            .map(|collection| self.emitter.emit(collection, &config))
            .collect()
    }
}
