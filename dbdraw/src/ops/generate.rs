//! Generate operation - multi-file project output.

use dbdraw_codegen::{GenerationConfig, language::LanguageCodegen};
use dbdraw_codegen_mongoose::ProjectGenerator;
use dbdraw_graph::Collection;
use eyre::{Context, Result, bail};

use super::duplicate_warnings;
use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Refuses to write into an existing directory.
pub fn generate(
    collections: &[Collection],
    config: &GenerationConfig,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let generator = ProjectGenerator::new(collections, config);
    let warnings = duplicate_warnings(collections);

    let (result, skipped) = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        (
            GenerationResult::Preview(PreviewResult { files }),
            generator.skipped(),
        )
    } else {
        if config.output_dir.exists() {
            bail!(
                "Directory '{}' already exists",
                config.output_dir.display()
            );
        }
        let generated = generator
            .generate(&config.output_dir)
            .wrap_err("Failed to generate project")?;
        (
            GenerationResult::Written(WrittenResult {
                output_dir: config.output_dir.clone(),
                written: generated.written,
                kept: generated.kept,
            }),
            generated.skipped,
        )
    };

    Ok(GenerateReport {
        project_name: config.project_name.clone(),
        language: config.language.to_string(),
        features: config.features.to_string(),
        warnings,
        skipped,
        result,
    })
}

#[cfg(test)]
mod tests {
    use dbdraw_codegen::{Feature, FeatureSet};
    use dbdraw_core::Language;
    use dbdraw_graph::Field;
    use tempfile::TempDir;

    use super::*;
    use crate::reports::RecordedOutput;

    fn collections() -> Vec<Collection> {
        vec![
            Collection::new("Product").field(Field::new("price", "number").required()),
            Collection::new("Audit"),
            Collection::new("Product").field(Field::new("sku", "string")),
        ]
    }

    #[test]
    fn test_writes_project_and_reports_skips() {
        let dir = TempDir::new().unwrap();
        let config = GenerationConfig::new("shop", Language::TypeScript)
            .with_features(FeatureSet::new().with(Feature::Docker))
            .with_output_dir(dir.path().join("shop"));

        let report = generate(&collections(), &config, GenerateOptions { dry_run: false }).unwrap();

        assert!(dir.path().join("shop/src/models/product.model.ts").exists());
        assert!(dir.path().join("shop/Dockerfile").exists());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.warnings.len(), 1);

        let lines = RecordedOutput::render(&report);
        assert!(lines.contains(&"Features: docker".to_string()));
        assert!(lines.contains(&"  - Audit (no fields besides _id)".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("✓ API project generated in")));
    }

    #[test]
    fn test_refuses_existing_directory() {
        let dir = TempDir::new().unwrap();
        let config =
            GenerationConfig::new("shop", Language::JavaScript).with_output_dir(dir.path());

        let err = generate(&collections(), &config, GenerateOptions { dry_run: false }).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("shop");
        let config = GenerationConfig::new("shop", Language::JavaScript).with_output_dir(&output);

        let report = generate(&collections(), &config, GenerateOptions { dry_run: true }).unwrap();

        assert!(!output.exists());
        match &report.result {
            GenerationResult::Preview(preview) => {
                assert!(preview.files.iter().any(|f| f.path == "src/app.js"));
            }
            GenerationResult::Written(_) => panic!("expected a preview"),
        }
        let lines = RecordedOutput::render(&report);
        assert!(lines.contains(&"── src/app.js ──".to_string()));
    }
}
