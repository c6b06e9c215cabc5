//! Regenerating into an existing directory must keep user-edited env files.

use std::fs;

use dbdraw_codegen::GenerationConfig;
use dbdraw_codegen_mongoose::{LanguageCodegen, ProjectGenerator};
use dbdraw_core::Language;
use dbdraw_graph::{Collection, Field};
use tempfile::TempDir;

#[test]
fn test_env_not_overwritten_during_generation() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_dir = temp_dir.path();

    let custom_env = "PORT=8080\nMONGODB_URI=mongodb://db.internal/prod\n";
    fs::write(output_dir.join(".env"), custom_env).expect("Failed to write .env");

    let collections =
        vec![Collection::new("Order").field(Field::new("total", "number").required())];
    let config = GenerationConfig::new("orders", Language::JavaScript);
    let result = ProjectGenerator::new(&collections, &config)
        .generate(output_dir)
        .expect("Generation failed");

    let env = fs::read_to_string(output_dir.join(".env")).expect("Failed to read .env");
    assert_eq!(env, custom_env, ".env was overwritten");
    assert!(result.kept.contains(&".env".to_string()));
    assert!(result.written.contains(&"src/models/order.model.js".to_string()));
    assert!(output_dir.join(".env.example").exists());
}

#[test]
fn test_generated_sources_are_rewritten() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_dir = temp_dir.path();
    let collections =
        vec![Collection::new("Order").field(Field::new("total", "number").required())];
    let config = GenerationConfig::new("orders", Language::TypeScript);

    let model = output_dir.join("src/models/order.model.ts");
    fs::create_dir_all(model.parent().unwrap()).unwrap();
    fs::write(&model, "stale").unwrap();

    ProjectGenerator::new(&collections, &config)
        .generate(output_dir)
        .expect("Generation failed");

    let content = fs::read_to_string(&model).unwrap();
    assert!(content.contains("export interface IOrder extends Document {"));
}
