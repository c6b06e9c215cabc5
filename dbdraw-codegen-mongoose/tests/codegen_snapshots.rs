//! End-to-end tests from graph JSON to generated sources.
//!
//! Small artifacts are pinned with inline snapshots; run `cargo insta review`
//! after intentional changes.

use dbdraw_codegen::{Emitter, Feature, FeatureSet, GenerationConfig};
use dbdraw_codegen_mongoose::{
    InlineSchemaEmitter, LanguageCodegen, ModelEmitter, ProjectGenerator, SchemaSync,
};
use dbdraw_core::{Language, ModuleType};
use dbdraw_graph::{Collection, collections_from_json};

const BLOG_GRAPH: &str = r#"{
  "nodes": [
    {
      "id": "n1",
      "data": {
        "label": "User",
        "fields": [
          { "name": "_id", "type": "primary", "id": "f1" },
          { "name": "name", "type": "string", "required": true, "id": "f2" }
        ]
      }
    },
    {
      "id": "n2",
      "data": {
        "label": "Blog_Post",
        "fields": [
          { "name": "_id", "type": "primary", "id": "f3" },
          { "name": "title", "type": "string", "required": true, "id": "f4" },
          { "name": "author", "type": "ref", "required": false, "id": "f5" },
          { "name": "views", "type": "number", "default": 0, "id": "f6" }
        ]
      }
    },
    {
      "id": "n3",
      "data": { "label": "Audit", "fields": [{ "name": "_id", "type": "primary", "id": "f7" }] }
    }
  ],
  "edges": [{ "source": "n1", "target": "n2", "targetHandle": "target-2" }]
}"#;

fn blog() -> Vec<Collection> {
    collections_from_json(BLOG_GRAPH, "blog.json").expect("graph should parse")
}

/// Generate a project and return files sorted by path.
fn generate_files(config: &GenerationConfig) -> Vec<(String, String)> {
    let collections = blog();
    let mut files: Vec<(String, String)> = ProjectGenerator::new(&collections, config)
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_blog_post_typescript_model() {
    let files = generate_files(&GenerationConfig::new("blog", Language::TypeScript));
    let model = get_file(&files, "src/models/blogPost.model.ts").expect("model file not found");

    assert!(model.contains("export interface IBlogPost extends Document {"));
    assert!(model.contains("  title: string;\n"));
    assert!(model.contains("  author?: Types.ObjectId | User;\n"));
    assert!(model.contains("    title: { type: String, required: true },\n"));
    assert!(model.contains("    author: { type: Types.ObjectId, ref: \"User\" },\n"));
    assert!(model.contains("    views: { type: Number, default: 0 },\n"));
    assert!(model.contains("for (const field of [\"author\"]) {"));
}

#[test]
fn test_identity_only_collection_is_reported_not_written() {
    let collections = blog();
    let config = GenerationConfig::new("blog", Language::JavaScript);
    let generator = ProjectGenerator::new(&collections, &config);

    let skipped = generator.skipped();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].to_string(), "Audit (no fields besides _id)");
    assert!(
        generator
            .preview()
            .iter()
            .all(|f| !f.path.to_lowercase().contains("audit"))
    );
}

#[test]
fn test_javascript_model_snapshot() {
    let tag = Collection::new("Tag").field(dbdraw_graph::Field::new("name", "string").required());
    let config = GenerationConfig::new("blog", Language::JavaScript);
    let artifact = ModelEmitter
        .emit(&tag, &config)
        .into_artifact()
        .expect("tag has fields");

    assert_eq!(artifact.file_name, "tag.model.js");
    insta::assert_snapshot!(artifact.content, @r#"
    import mongoose from "mongoose";

    const { Schema } = mongoose;

    const TagSchema = new Schema(
      {
        name: { type: String, required: true },
      },
      { timestamps: true },
    );

    // Forms submit empty selects as ""; store those references as null
    TagSchema.pre("save", function (next) {
      const doc = this;
      for (const field of []) {
        if (doc[field] === "") {
          doc[field] = null;
        }
      }
      next();
    });

    export const Tag = mongoose.model("Tag", TagSchema);
    "#);
}

#[test]
fn test_dynamic_ref_field() {
    let collections = blog();
    let code = InlineSchemaEmitter::new(ModuleType::CommonJs)
        .render(&collections[1], Language::JavaScript);

    assert!(code.contains("author: { type: mongoose.Schema.Types.ObjectId, ref: \"User\" },"));
    assert!(code.contains("views: { type: Number, default: 0 },"));
    assert!(code.contains("module.exports = mongoose.model(\"blog_post\", BlogPostSchema);"));
}

#[test]
fn test_app_mounts_every_emitted_collection() {
    let files = generate_files(&GenerationConfig::new("blog", Language::JavaScript));
    let app = get_file(&files, "src/app.js").expect("app not found");

    assert!(app.contains("app.use(\"/api/users\", userRoutes);"));
    assert!(app.contains("app.use(\"/api/blogPosts\", blogPostRoutes);"));
    assert!(!app.contains("audit"));
}

#[test]
fn test_auth_feature_wires_middleware() {
    let config = GenerationConfig::new("blog", Language::TypeScript)
        .with_features(FeatureSet::new().with(Feature::Auth));
    let files = generate_files(&config);

    let routes = get_file(&files, "src/routes/user.routes.ts").expect("routes not found");
    assert!(routes.contains(".get(protect, getAllUsers)"));

    let auth = get_file(&files, "src/middleware/auth.ts").expect("auth middleware not found");
    assert!(auth.contains("Not authorized to access this route"));

    let env = get_file(&files, ".env").expect("env not found");
    assert!(env.contains("JWT_SECRET="));
}

#[test]
fn test_sync_preview_names() {
    let collections = blog();
    let paths: Vec<String> = SchemaSync::new(&collections, Language::JavaScript, ModuleType::Module)
        .preview()
        .into_iter()
        .map(|f| f.path)
        .collect();

    assert_eq!(paths, ["User.js", "BlogPost.js"]);
}
