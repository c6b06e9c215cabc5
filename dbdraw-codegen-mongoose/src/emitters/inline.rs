//! Single-file `<Pascal>.<ext>` schemas written by `dbdraw sync`.

use dbdraw_codegen::{Artifact, Emission, Emitter, GenerationConfig, SkipReason};
use dbdraw_core::{Language, ModuleType, to_pascal_case};
use dbdraw_graph::Collection;

use super::schema::{self, RefName};
use crate::{
    ast::{Const, Export, Import},
    code_file::{CodeFile, RawCode},
    type_mapper::{InterfaceTypeMapper, SchemaTypeMapper},
};

/// Emits a self-contained schema file for an existing project.
///
/// JavaScript output follows the linked project's module system; TypeScript
/// output is always an ES module. Models register under the lower-cased
/// collection name and `ref` options keep the target's label as drawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineSchemaEmitter {
    module_type: ModuleType,
}

impl InlineSchemaEmitter {
    pub fn new(module_type: ModuleType) -> Self {
        Self { module_type }
    }

    pub fn file_name(collection: &Collection, language: Language) -> String {
        format!(
            "{}.{}",
            to_pascal_case(&collection.name),
            language.extension()
        )
    }

    pub fn render(&self, collection: &Collection, language: Language) -> String {
        let pascal = to_pascal_case(&collection.name);
        let schema_var = format!("{}Schema", pascal);
        let storage = collection.storage_name();
        let typed = language.is_typed();

        let mapper = SchemaTypeMapper::for_inline(language);
        let lines: Vec<String> = collection
            .emittable_fields()
            .map(|field| schema::field_line(field, &mapper, RefName::Label))
            .collect();
        let hook = RawCode::new(schema::normalize_hook(&schema_var, collection, typed));

        if typed {
            let interface_mapper = InterfaceTypeMapper::for_collection(&pascal, &pascal);
            let file = CodeFile::new().import(
                Import::new("mongoose")
                    .default("mongoose")
                    .named_all(["Document", "Schema", "Types"]),
            );
            return schema::foreign_targets(collection)
                .iter()
                .fold(file, |file, target| {
                    let target = to_pascal_case(target);
                    file.import(
                        Import::new(format!("./{}.js", target))
                            .named(target)
                            .type_only(),
                    )
                })
                .add(schema::interface(collection, &pascal, &interface_mapper))
                .add(RawCode::new(schema::schema_declaration(
                    &schema_var,
                    &format!("Schema<{}>", pascal),
                    &lines,
                    None,
                )))
                .add(hook)
                .add(
                    Const::new(
                        &pascal,
                        format!(
                            "mongoose.model<{}>({}, {})",
                            pascal,
                            schema::string_literal(&storage),
                            schema_var
                        ),
                    )
                    .ty(format!("mongoose.Model<{}>", pascal))
                    .export(),
                )
                .render();
        }

        let registration = format!(
            "mongoose.model({}, {})",
            schema::string_literal(&storage),
            schema_var
        );
        let export = match self.module_type {
            ModuleType::CommonJs => Export::new().module_exports(registration),
            ModuleType::Module => Export::new().default(registration),
        };

        CodeFile::new()
            .import(
                Import::new("mongoose")
                    .default("mongoose")
                    .module_type(self.module_type),
            )
            .add(RawCode::new(schema::schema_declaration(
                &schema_var,
                "mongoose.Schema",
                &lines,
                None,
            )))
            .add(hook)
            .export(export)
            .render()
    }
}

impl Emitter for InlineSchemaEmitter {
    fn emit(&self, collection: &Collection, config: &GenerationConfig) -> Emission {
        if !collection.has_emittable_fields() {
            return Emission::skipped(collection, SkipReason::NoFields);
        }
        Emission::File(Artifact::new(
            Self::file_name(collection, config.language),
            self.render(collection, config.language),
        ))
    }
}

#[cfg(test)]
mod tests {
    use dbdraw_graph::Field;
    use serde_json::json;

    use super::*;

    fn tag() -> Collection {
        Collection::new("Tag")
            .field(Field::new("_id", "primary"))
            .field(Field::new("name", "string").required().unique())
            .field(Field::new("weight", "number").with_default(json!(0)))
    }

    #[test]
    fn test_file_name_is_capitalized() {
        assert_eq!(
            InlineSchemaEmitter::file_name(&Collection::new("blog_post"), Language::JavaScript),
            "BlogPost.js"
        );
    }

    #[test]
    fn test_commonjs_schema() {
        let code = InlineSchemaEmitter::new(ModuleType::CommonJs).render(&tag(), Language::JavaScript);

        insta::assert_snapshot!(code, @r#"
        const mongoose = require("mongoose");

        const TagSchema = new mongoose.Schema({
          name: { type: String, required: true, unique: true },
          weight: { type: Number, default: 0 },
        });

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

        module.exports = mongoose.model("tag", TagSchema);
        "#);
    }

    #[test]
    fn test_esm_schema_exports_default() {
        let code = InlineSchemaEmitter::new(ModuleType::Module).render(&tag(), Language::JavaScript);

        assert!(code.starts_with("import mongoose from \"mongoose\";\n"));
        assert!(code.ends_with("export default mongoose.model(\"tag\", TagSchema);\n"));
    }

    #[test]
    fn test_typescript_schema() {
        let post = Collection::new("Post")
            .field(Field::new("title", "string").required())
            .field(Field::new("tags", "ref").references("Tag").list());
        let code = InlineSchemaEmitter::new(ModuleType::CommonJs).render(&post, Language::TypeScript);

        assert!(code.contains("import mongoose, { Document, Schema, Types } from \"mongoose\";"));
        assert!(code.contains("import type { Tag } from \"./Tag.js\";"));
        assert!(code.contains("export interface Post extends Document {"));
        assert!(code.contains("tags?: (Types.ObjectId | Tag)[];"));
        assert!(code.contains("const PostSchema = new Schema<Post>({"));
        assert!(code.contains("tags: { type: [Schema.Types.ObjectId], ref: \"Tag\" },"));
        assert!(code.contains("const doc: any = this;"));
        assert!(code.contains(
            "export const Post: mongoose.Model<Post> = mongoose.model<Post>(\"post\", PostSchema);"
        ));
        assert!(!code.contains("require("));
    }

    #[test]
    fn test_default_literals_keep_json_types() {
        let code = InlineSchemaEmitter::default().render(&tag(), Language::JavaScript);
        assert!(code.contains("default: 0 }"));
        assert!(!code.contains("default: \"0\""));
    }

    #[test]
    fn test_registration_name_is_escaped() {
        let quoted = Collection::new(r#"Quote"d\Tag"#).field(Field::new("name", "string"));

        let js = InlineSchemaEmitter::default().render(&quoted, Language::JavaScript);
        assert!(js.contains(r#"mongoose.model("quote\"d\\tag", "#));

        let ts = InlineSchemaEmitter::default().render(&quoted, Language::TypeScript);
        assert!(ts.contains(r#"("quote\"d\\tag", "#));
    }
}
