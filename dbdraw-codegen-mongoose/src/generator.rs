//! Multi-file Express project generator.

use std::path::{Path, PathBuf};

use dbdraw_codegen::{
    Artifact, Emission, Emitter, Feature, GenerationConfig, SkippedCollection,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
};
use dbdraw_core::{GeneratedFile, WriteResult};
use dbdraw_graph::Collection;
use eyre::{Context, Result};

use crate::{
    emitters::{ControllerEmitter, ModelEmitter, RouteEmitter},
    files::{
        App, AppTest, AuthMiddleware, DbConfig, DockerCompose, Dockerfile, EnvFile,
        ErrorMiddleware, GitIgnore, IndexFile, JestConfig, PackageJson, Readme, RouteMount,
        TsConfig, UnitTestsDir,
    },
};

/// An emitted artifact placed under `src/<dir>/`.
struct SourceFile {
    dir: &'static str,
    artifact: Artifact,
}

impl GeneratedFile for SourceFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join(self.dir).join(&self.artifact.file_name)
    }

    fn render(&self) -> String {
        self.artifact.content.clone()
    }
}

/// Everything one run would write.
struct Plan {
    files: Vec<Box<dyn GeneratedFile>>,
    skipped: Vec<SkippedCollection>,
}

/// Generates a complete Express + Mongoose project from a collection list.
///
/// ```ignore
/// use dbdraw_codegen::{GenerationConfig, language::LanguageCodegen};
/// use dbdraw_codegen_mongoose::ProjectGenerator;
///
/// let config = GenerationConfig::new("shop-api", Language::TypeScript);
/// let generator = ProjectGenerator::new(&collections, &config);
///
/// // Preview files without writing
/// let files = generator.preview();
///
/// // Generate files to disk
/// let result = generator.generate(&config.output_dir)?;
/// ```
pub struct ProjectGenerator<'a> {
    collections: &'a [Collection],
    config: &'a GenerationConfig,
}

impl LanguageCodegen for ProjectGenerator<'_> {
    fn preview(&self) -> Vec<PreviewFile> {
        self.plan()
            .files
            .iter()
            .map(|file| PreviewFile {
                path: relative_path(&**file),
                content: file.render(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let plan = self.plan();
        let mut result = GenerateResult {
            skipped: plan.skipped,
            ..Default::default()
        };

        for file in &plan.files {
            let relative = relative_path(&**file);
            let outcome = file
                .write(output_dir)
                .wrap_err_with(|| format!("failed to generate '{}'", relative))?;
            match outcome {
                WriteResult::Written => result.written.push(relative),
                WriteResult::Skipped => result.kept.push(relative),
            }
        }

        tracing::info!(
            dir = %output_dir.display(),
            written = result.written.len(),
            skipped = result.skipped.len(),
            "generated project"
        );
        Ok(result)
    }
}

impl<'a> ProjectGenerator<'a> {
    pub fn new(collections: &'a [Collection], config: &'a GenerationConfig) -> Self {
        Self {
            collections,
            config,
        }
    }

    fn plan(&self) -> Plan {
        let config = self.config;
        let mut files: Vec<Box<dyn GeneratedFile>> = Vec::new();
        let mut skipped = Vec::new();
        let mut mounts: Vec<RouteMount> = Vec::new();

        for collection in self.collections {
            // Controllers and routes import the model, so a skipped model skips all three
            let model = match ModelEmitter.emit(collection, config) {
                Emission::File(artifact) => artifact,
                Emission::Skipped(skip) => {
                    skipped.push(skip);
                    continue;
                }
            };
            files.push(Box::new(SourceFile {
                dir: "models",
                artifact: model,
            }));

            let siblings = [
                ("controllers", ControllerEmitter.emit(collection, config)),
                ("routes", RouteEmitter.emit(collection, config)),
            ];
            for (dir, emission) in siblings {
                if let Some(artifact) = emission.into_artifact() {
                    files.push(Box::new(SourceFile { dir, artifact }));
                }
            }

            let mount = RouteMount::for_collection(collection);
            if mounts.contains(&mount) {
                tracing::warn!(collection = %collection, "route already mounted, later files overwrite earlier ones");
            } else {
                mounts.push(mount);
            }
        }

        let language = config.language;
        let routes: Vec<String> = mounts.iter().map(|m| m.path.clone()).collect();

        files.push(Box::new(DbConfig::new(language)));
        files.push(Box::new(ErrorMiddleware::new(language)));
        if config.has(Feature::Auth) {
            files.push(Box::new(AuthMiddleware::new(language)));
        }
        files.push(Box::new(App::new(config, mounts)));
        files.push(Box::new(IndexFile::new(language)));

        files.push(Box::new(PackageJson::for_config(config)));
        files.push(Box::new(EnvFile::new(config)));
        files.push(Box::new(EnvFile::example(config)));
        files.push(Box::new(GitIgnore::new(config)));
        files.push(Box::new(Readme::new(config, routes)));
        if config.is_typed() {
            files.push(Box::new(TsConfig));
        }
        if config.has(Feature::Tests) {
            files.push(Box::new(JestConfig::new(language)));
            files.push(Box::new(AppTest::new(language)));
            files.push(Box::new(UnitTestsDir));
        }
        if config.has(Feature::Docker) {
            files.push(Box::new(Dockerfile::new(language)));
            files.push(Box::new(DockerCompose::new(&config.project_name)));
        }

        Plan { files, skipped }
    }

    /// Collections the model emitter would skip.
    pub fn skipped(&self) -> Vec<SkippedCollection> {
        self.plan().skipped
    }
}

/// Path relative to the project root, with `/` separators.
fn relative_path(file: &dyn GeneratedFile) -> String {
    file.path(Path::new(""))
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use dbdraw_codegen::FeatureSet;
    use dbdraw_core::Language;
    use dbdraw_graph::Field;

    use super::*;

    fn collections() -> Vec<Collection> {
        vec![
            Collection::new("User").field(Field::new("email", "string").required()),
            Collection::new("Audit").field(Field::new("_id", "primary")),
        ]
    }

    fn paths(generator: &ProjectGenerator<'_>) -> Vec<String> {
        generator.preview().into_iter().map(|f| f.path).collect()
    }

    #[test]
    fn test_minimal_javascript_project() {
        let collections = collections();
        let config = GenerationConfig::new("api", Language::JavaScript);
        let generator = ProjectGenerator::new(&collections, &config);

        assert_eq!(
            paths(&generator),
            [
                "src/models/user.model.js",
                "src/controllers/user.controller.js",
                "src/routes/user.routes.js",
                "src/config/db.js",
                "src/middleware/error.js",
                "src/app.js",
                "src/index.js",
                "package.json",
                ".env",
                ".env.example",
                ".gitignore",
                "README.md",
            ]
        );
        assert_eq!(generator.skipped().len(), 1);
        assert_eq!(generator.skipped()[0].collection, "Audit");
    }

    #[test]
    fn test_feature_files() {
        let collections = collections();
        let features: FeatureSet = Feature::ALL.into_iter().collect();
        let config = GenerationConfig::new("api", Language::TypeScript).with_features(features);
        let paths = paths(&ProjectGenerator::new(&collections, &config));

        for expected in [
            "src/middleware/auth.ts",
            "tsconfig.json",
            "jest.config.js",
            "tests/integration/app.test.ts",
            "tests/unit/.gitkeep",
            "Dockerfile",
            "docker-compose.yml",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {expected}");
        }
        assert!(!paths.iter().any(|p| p.contains("audit")));
    }
}
