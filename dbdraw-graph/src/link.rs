//! The `.dbdraw/config.json` file that links a backend folder to a project.

use std::{
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use dbdraw_core::{Language, ModuleType};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, error::SourceContext};

/// Location of the link file, relative to the working directory.
pub const LINK_PATH: &str = ".dbdraw/config.json";

/// Prefix added to the remote project id.
pub const PROJECT_ID_PREFIX: &str = "prj-";

/// Total length of a valid prefixed project id.
pub const PROJECT_ID_LEN: usize = 28;

const DEFAULT_MODELS_PATH: &str = "./models";

/// Persisted link between a local folder and a remote project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectLink {
    #[serde(rename = "projectID")]
    pub project_id: String,
    /// Directory the schema files are synced into
    #[serde(default = "default_models_path")]
    pub path: String,
    #[serde(default)]
    pub language: Language,
    #[serde(rename = "type", default)]
    pub module_type: ModuleType,
    /// Epoch milliseconds of the last link
    #[serde(rename = "updatedAt", default)]
    pub updated_at: u64,
}

fn default_models_path() -> String {
    DEFAULT_MODELS_PATH.to_string()
}

/// Whether `id` looks like a prefixed project id.
pub fn is_valid_project_id(id: &str) -> bool {
    id.starts_with(PROJECT_ID_PREFIX) && id.len() == PROJECT_ID_LEN
}

impl ProjectLink {
    /// Create a link for the remote project `remote_id` (without prefix).
    ///
    /// TypeScript links always use ES modules.
    pub fn new(
        remote_id: &str,
        path: impl Into<String>,
        language: Language,
        module_type: ModuleType,
    ) -> Self {
        let module_type = if language.is_typed() {
            ModuleType::Module
        } else {
            module_type
        };
        let path = path.into();
        let path = if path.trim().is_empty() {
            default_models_path()
        } else {
            path.trim().to_string()
        };

        Self {
            project_id: format!("{PROJECT_ID_PREFIX}{remote_id}"),
            path,
            language,
            module_type,
            updated_at: now_millis(),
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_project_id(&self.project_id)
    }

    /// Module system the schema files are written for.
    pub fn effective_module_type(&self) -> ModuleType {
        if self.language.is_typed() {
            ModuleType::Module
        } else {
            self.module_type
        }
    }

    /// Load and validate a link file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Box::new(Error::NotLinked {
                path: path.to_path_buf(),
            }));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_json(&content, &path.display().to_string())
    }

    /// Parse and validate link JSON.
    pub fn from_json(src: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(src, filename);
        let link: Self = serde_json::from_str(src).map_err(|e| ctx.link_error(e))?;

        if !link.is_valid() {
            return Err(ctx.invalid_link(format!(
                "project id '{}' must start with '{PROJECT_ID_PREFIX}' and be {PROJECT_ID_LEN} characters long",
                link.project_id
            )));
        }
        Ok(link)
    }

    /// Write the link as pretty JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let write_err = |source: std::io::Error| {
            Box::new(Error::Write {
                path: path.to_path_buf(),
                source,
            })
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| write_err(std::io::Error::other(e)))?;
        std::fs::write(path, json).map_err(write_err)?;

        tracing::debug!(path = %path.display(), project = %self.project_id, "saved project link");
        Ok(())
    }

    /// The models directory resolved against `base`.
    pub fn models_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
