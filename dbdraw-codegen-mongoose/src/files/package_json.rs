//! package.json generator for Express projects.

use std::path::{Path, PathBuf};

use dbdraw_codegen::{Feature, GenerationConfig};
use dbdraw_core::{GeneratedFile, Language};

const DEFAULT_VERSION: &str = "1.0.0";
const DEFAULT_DESCRIPTION: &str = "Express + Mongoose API";
const JEST_ESM: &str = "node --experimental-vm-modules node_modules/jest/bin/jest.js";

/// The package.json of a generated project.
pub struct PackageJson {
    pub name: String,
    pub version: String,
    pub description: String,
    pub scripts: Vec<(String, String)>,
    pub dependencies: Vec<Dependency>,
    pub dev_dependencies: Vec<Dependency>,
}

impl PackageJson {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: DEFAULT_VERSION.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            scripts: Vec::new(),
            dependencies: vec![
                Dependency::new("express", "^4.18.2"),
                Dependency::new("mongoose", "^7.5.0"),
                Dependency::new("cors", "^2.8.5"),
                Dependency::new("dotenv", "^16.3.1"),
                Dependency::new("helmet", "^7.0.0"),
                Dependency::new("morgan", "^1.10.0"),
            ],
            dev_dependencies: Vec::new(),
        }
    }

    /// Scripts and dependencies for `config`'s language and features.
    pub fn for_config(config: &GenerationConfig) -> Self {
        let typed = config.is_typed();
        let mut package = Self::new(&config.project_name);

        package = match config.language {
            Language::TypeScript => package
                .with_script("start", "node dist/index.js")
                .with_script("dev", "ts-node-dev --respawn --transpile-only src/index.ts")
                .with_script("build", "tsc")
                .with_dev_dependencies([
                    ("typescript", "^5.2.2"),
                    ("ts-node-dev", "^2.0.0"),
                    ("@types/node", "^20.5.9"),
                    ("@types/express", "^4.17.17"),
                    ("@types/cors", "^2.8.14"),
                    ("@types/morgan", "^1.9.5"),
                ]),
            Language::JavaScript => package
                .with_script("start", "node src/index.js")
                .with_script("dev", "nodemon src/index.js")
                .with_dev_dependency(("nodemon", "^3.0.1")),
        };

        if config.has(Feature::Auth) {
            package = package.with_dependencies([("jsonwebtoken", "^9.0.2"), ("bcryptjs", "^2.4.3")]);
            if typed {
                package = package.with_dev_dependencies([
                    ("@types/jsonwebtoken", "^9.0.2"),
                    ("@types/bcryptjs", "^2.4.3"),
                ]);
            }
        }

        if config.has(Feature::Swagger) {
            package = package.with_dependencies([
                ("swagger-ui-express", "^5.0.0"),
                ("swagger-jsdoc", "^6.2.8"),
            ]);
            if typed {
                package = package.with_dev_dependencies([
                    ("@types/swagger-ui-express", "^4.1.3"),
                    ("@types/swagger-jsdoc", "^6.0.1"),
                ]);
            }
        }

        if config.has(Feature::Tests) {
            package = package
                .with_script("test", JEST_ESM)
                .with_dev_dependencies([("jest", "^29.6.4"), ("supertest", "^6.3.3")]);
            if typed {
                package = package.with_dev_dependencies([
                    ("@types/jest", "^29.5.4"),
                    ("@types/supertest", "^2.0.12"),
                    ("ts-jest", "^29.1.1"),
                ]);
            }
        }

        package
    }

    pub fn with_script(mut self, name: impl Into<String>, command: impl Into<String>) -> Self {
        self.scripts.push((name.into(), command.into()));
        self
    }

    pub fn with_dependencies(
        mut self,
        deps: impl IntoIterator<Item = impl Into<Dependency>>,
    ) -> Self {
        self.dependencies.extend(deps.into_iter().map(Into::into));
        self
    }

    pub fn with_dev_dependency(mut self, dep: impl Into<Dependency>) -> Self {
        self.dev_dependencies.push(dep.into());
        self
    }

    pub fn with_dev_dependencies(
        mut self,
        deps: impl IntoIterator<Item = impl Into<Dependency>>,
    ) -> Self {
        self.dev_dependencies
            .extend(deps.into_iter().map(Into::into));
        self
    }

    fn render_entries<'a>(entries: impl Iterator<Item = (&'a str, &'a str)>) -> String {
        entries
            .map(|(key, value)| format!("    \"{}\": \"{}\"", key, value))
            .collect::<Vec<_>>()
            .join(",\n")
    }
}

impl GeneratedFile for PackageJson {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("package.json")
    }

    fn render(&self) -> String {
        let scripts = Self::render_entries(
            self.scripts
                .iter()
                .map(|(name, command)| (name.as_str(), command.as_str())),
        );
        let dependencies = Self::render_entries(
            self.dependencies
                .iter()
                .map(|d| (d.name.as_str(), d.version.as_str())),
        );
        let dev_dependencies = Self::render_entries(
            self.dev_dependencies
                .iter()
                .map(|d| (d.name.as_str(), d.version.as_str())),
        );

        format!(
            r#"{{
  "name": "{}",
  "version": "{}",
  "description": "{}",
  "type": "module",
  "scripts": {{
{}
  }},
  "dependencies": {{
{}
  }},
  "devDependencies": {{
{}
  }}
}}
"#,
            self.name, self.version, self.description, scripts, dependencies, dev_dependencies
        )
    }
}

/// A dependency with name and version.
#[derive(Debug, Clone)]
pub struct Dependency {
    name: String,
    version: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Dependency {
    fn from((name, version): (N, V)) -> Self {
        Self::new(name, version)
    }
}

#[cfg(test)]
mod tests {
    use dbdraw_codegen::FeatureSet;

    use super::*;

    fn parse(package: &PackageJson) -> serde_json::Value {
        serde_json::from_str(&package.render()).unwrap()
    }

    #[test]
    fn test_renders_valid_json() {
        let config = GenerationConfig::new("shop-api", Language::JavaScript);
        let json = parse(&PackageJson::for_config(&config));

        assert_eq!(json["name"], "shop-api");
        assert_eq!(json["type"], "module");
        assert_eq!(json["scripts"]["dev"], "nodemon src/index.js");
        assert_eq!(json["dependencies"]["express"], "^4.18.2");
        assert!(json["dependencies"].get("jsonwebtoken").is_none());
        assert!(json["scripts"].get("test").is_none());
    }

    #[test]
    fn test_typescript_with_all_features() {
        let features: FeatureSet = Feature::ALL.into_iter().collect();
        let config =
            GenerationConfig::new("shop-api", Language::TypeScript).with_features(features);
        let json = parse(&PackageJson::for_config(&config));

        assert_eq!(json["scripts"]["build"], "tsc");
        assert_eq!(json["dependencies"]["jsonwebtoken"], "^9.0.2");
        assert_eq!(json["dependencies"]["swagger-jsdoc"], "^6.2.8");
        assert_eq!(json["devDependencies"]["ts-jest"], "^29.1.1");
        assert_eq!(json["devDependencies"]["@types/jsonwebtoken"], "^9.0.2");
        assert_eq!(json["scripts"]["test"], JEST_ESM);
    }
}
