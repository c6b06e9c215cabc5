//! Writing generated files to disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// How an existing file at the target path is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Generated sources are replaced on every run.
    #[default]
    Always,
    /// Files the user is expected to edit, such as `.env`, are created once.
    IfMissing,
}

/// Outcome of writing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// An existing file was kept.
    Skipped,
}

/// A project file rendered on demand.
pub trait GeneratedFile {
    /// Location below the project root.
    fn path(&self, base: &Path) -> PathBuf;

    fn render(&self) -> String;

    fn overwrite(&self) -> Overwrite {
        Overwrite::Always
    }

    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        if self.overwrite() == Overwrite::IfMissing && path.exists() {
            tracing::debug!(path = %path.display(), "keeping existing file");
            return Ok(WriteResult::Skipped);
        }
        write_file(&path, &self.render())?;
        Ok(WriteResult::Written)
    }
}

/// Content already rendered for a fixed path. Always overwrites.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn write(&self) -> Result<WriteResult> {
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

/// Writes `content`, creating missing parent directories.
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    struct EnvStub;

    impl GeneratedFile for EnvStub {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("config").join(".env")
        }

        fn render(&self) -> String {
            "PORT=5000\n".to_string()
        }

        fn overwrite(&self) -> Overwrite {
            Overwrite::IfMissing
        }
    }

    #[test]
    fn test_create_once_keeps_user_edits() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config/.env");

        assert_eq!(EnvStub.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "PORT=5000\n");

        fs::write(&path, "PORT=8080\n").unwrap();
        assert_eq!(EnvStub.write(temp.path()).unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "PORT=8080\n");
    }

    #[test]
    fn test_file_replaces_stale_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models").join("User.js");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale").unwrap();

        let result = File::new(&path, "module.exports = {};\n").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "module.exports = {};\n");
    }

    #[test]
    fn test_nested_directories_are_created() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src/routes/v1/user.routes.ts");

        File::new(&path, "export {};\n").write().unwrap();

        assert!(path.exists());
    }
}
