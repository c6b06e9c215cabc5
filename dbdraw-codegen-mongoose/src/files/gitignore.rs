//! `.gitignore` for the generated project.

use std::path::{Path, PathBuf};

use dbdraw_codegen::{Feature, GenerationConfig};
use dbdraw_core::GeneratedFile;

/// Ignores dependencies, secrets and logs; build output and coverage
/// only when the project produces them.
pub struct GitIgnore {
    typed: bool,
    tests: bool,
}

impl GitIgnore {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            typed: config.is_typed(),
            tests: config.has(Feature::Tests),
        }
    }
}

impl GeneratedFile for GitIgnore {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(".gitignore")
    }

    fn render(&self) -> String {
        let mut out = String::from("node_modules/\n.env\n*.log\nnpm-debug.log*\n.DS_Store\n");
        if self.typed {
            out.push_str("dist/\n");
        }
        if self.tests {
            out.push_str("coverage/\n");
        }
        out
    }
}
