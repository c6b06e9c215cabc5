//! README.md generator.

use std::path::{Path, PathBuf};

use dbdraw_codegen::{Feature, GenerationConfig};
use dbdraw_core::{GeneratedFile, Language, Overwrite};

/// Project README listing enabled features and the generated endpoints.
pub struct Readme {
    config: GenerationConfig,
    /// Mounted route prefixes, e.g. `/api/users`
    routes: Vec<String>,
}

impl Readme {
    pub fn new(config: &GenerationConfig, routes: Vec<String>) -> Self {
        Self {
            config: config.clone(),
            routes,
        }
    }
}

impl GeneratedFile for Readme {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("README.md")
    }

    fn overwrite(&self) -> Overwrite {
        Overwrite::IfMissing
    }

    fn render(&self) -> String {
        let mut out = format!(
            "# {}\n\nExpress + Mongoose API written in {}.\n\n## Features\n\n",
            self.config.project_name,
            match self.config.language {
                Language::TypeScript => "TypeScript",
                Language::JavaScript => "JavaScript",
            }
        );

        out.push_str("- CRUD endpoints for every collection\n");
        for feature in Feature::ALL {
            if self.config.has(feature) {
                out.push_str(&format!("- {}\n", feature.label()));
            }
        }

        out.push_str("\n## Getting started\n\n```bash\nnpm install\ncp .env.example .env\nnpm run dev\n```\n");
        if self.config.has(Feature::Tests) {
            out.push_str("\nRun the test suite with `npm test`.\n");
        }
        if self.config.has(Feature::Docker) {
            out.push_str("\nOr start the API with MongoDB using `docker compose up --build`.\n");
        }
        if self.config.has(Feature::Swagger) {
            out.push_str("\nAPI docs are served at `/api-docs`.\n");
        }

        out.push_str("\n## Endpoints\n\n| Method | Path |\n|---|---|\n");
        for route in &self.routes {
            for (method, suffix) in [
                ("GET", ""),
                ("POST", ""),
                ("GET", "/:id"),
                ("PUT", "/:id"),
                ("DELETE", "/:id"),
            ] {
                out.push_str(&format!("| {} | `{}{}` |\n", method, route, suffix));
            }
        }
        out
    }
}
