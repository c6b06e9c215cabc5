//! `.env` and `.env.example` generators.

use std::path::{Path, PathBuf};

use dbdraw_codegen::{Feature, GenerationConfig};
use dbdraw_core::{GeneratedFile, Overwrite};

/// Environment file read by `dotenv` at start-up.
///
/// The example variant carries placeholders and is meant to be committed.
pub struct EnvFile {
    database: String,
    auth: bool,
    example: bool,
}

impl EnvFile {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            database: config.project_name.clone(),
            auth: config.has(Feature::Auth),
            example: false,
        }
    }

    pub fn example(config: &GenerationConfig) -> Self {
        Self {
            example: true,
            ..Self::new(config)
        }
    }
}

impl GeneratedFile for EnvFile {
    fn path(&self, base: &Path) -> PathBuf {
        if self.example {
            base.join(".env.example")
        } else {
            base.join(".env")
        }
    }

    fn overwrite(&self) -> Overwrite {
        Overwrite::IfMissing
    }

    fn render(&self) -> String {
        let mut vars = vec![
            ("PORT", "5000".to_string()),
            ("NODE_ENV", "development".to_string()),
            (
                "MONGODB_URI",
                format!("mongodb://localhost:27017/{}", self.database),
            ),
        ];
        if self.auth {
            let secret = if self.example {
                "your-jwt-secret"
            } else {
                "change-this-secret"
            };
            vars.push(("JWT_SECRET", secret.to_string()));
            vars.push(("JWT_EXPIRES_IN", "30d".to_string()));
        }

        vars.iter()
            .map(|(key, value)| format!("{}={}\n", key, value))
            .collect()
    }
}
