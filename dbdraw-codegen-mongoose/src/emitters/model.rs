//! `<camel>.model.<ext>` files of a generated project.

use dbdraw_codegen::{Artifact, Emission, Emitter, GenerationConfig, SkipReason};
use dbdraw_core::{Language, to_camel_case, to_pascal_case};
use dbdraw_graph::Collection;

use super::schema::{self, RefName};
use crate::{
    ast::{Const, Import},
    code_file::{CodeFile, RawCode},
    type_mapper::{InterfaceTypeMapper, SchemaTypeMapper},
};

/// Emits the Mongoose model of one collection for the multi-file layout.
///
/// The model is registered under the capitalized name and exported as a
/// named binding, which controllers import.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelEmitter;

impl ModelEmitter {
    pub fn file_name(collection: &Collection, language: Language) -> String {
        format!(
            "{}.model.{}",
            to_camel_case(&collection.name),
            language.extension()
        )
    }

    pub fn render(&self, collection: &Collection, language: Language) -> String {
        let pascal = to_pascal_case(&collection.name);
        let interface_name = format!("I{}", pascal);
        let schema_var = format!("{}Schema", pascal);
        let typed = language.is_typed();

        let mapper = SchemaTypeMapper::for_model(language);
        let lines: Vec<String> = collection
            .emittable_fields()
            .map(|field| schema::field_line(field, &mapper, RefName::Pascal))
            .collect();

        let file = if typed {
            let constructor = format!("Schema<{}>", interface_name);
            let interface_mapper = InterfaceTypeMapper::for_collection(&pascal, &interface_name);
            let file = CodeFile::new()
                .import(Import::new("mongoose").named_all(["Schema", "model", "Document", "Types"]));
            schema::foreign_targets(collection)
                .iter()
                .fold(file, |file, target| {
                    file.import(
                        Import::new(format!("./{}.model.js", to_camel_case(target)))
                            .named(format!("I{} as {}", to_pascal_case(target), to_pascal_case(target)))
                            .type_only(),
                    )
                })
                .add(schema::interface(collection, &interface_name, &interface_mapper))
                .add(RawCode::new(schema::schema_declaration(
                    &schema_var,
                    &constructor,
                    &lines,
                    Some("{ timestamps: true }"),
                )))
        } else {
            CodeFile::new()
                .import(Import::new("mongoose").default("mongoose"))
                .add(RawCode::new("const { Schema } = mongoose;"))
                .add(RawCode::new(schema::schema_declaration(
                    &schema_var,
                    "Schema",
                    &lines,
                    Some("{ timestamps: true }"),
                )))
        };

        let registration = if typed {
            format!(
                "model<{}>({}, {})",
                interface_name,
                schema::string_literal(&pascal),
                schema_var
            )
        } else {
            format!(
                "mongoose.model({}, {})",
                schema::string_literal(&pascal),
                schema_var
            )
        };

        file.add(RawCode::new(schema::normalize_hook(&schema_var, collection, typed)))
            .add(Const::new(&pascal, registration).export())
            .render()
    }
}

impl Emitter for ModelEmitter {
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

    use super::*;

    fn post() -> Collection {
        Collection::new("post")
            .field(Field::new("_id", "primary"))
            .field(Field::new("title", "string").required())
            .field(Field::new("author", "ref").references("User"))
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            ModelEmitter::file_name(&Collection::new("Blog_Post"), Language::TypeScript),
            "blogPost.model.ts"
        );
        assert_eq!(
            ModelEmitter::file_name(&Collection::new("user"), Language::JavaScript),
            "user.model.js"
        );
    }

    #[test]
    fn test_typescript_model_sections_in_order() {
        let code = ModelEmitter.render(&post(), Language::TypeScript);

        let positions: Vec<usize> = [
            "import { Schema, model, Document, Types } from \"mongoose\";",
            "import type { IUser as User } from \"./user.model.js\";",
            "export interface IPost extends Document {",
            "const PostSchema = new Schema<IPost>(",
            "PostSchema.pre(\"save\", function (next) {",
            "export const Post = model<IPost>(\"Post\", PostSchema);",
        ]
        .iter()
        .map(|needle| code.find(needle).unwrap_or_else(|| panic!("missing {needle}\n{code}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{code}");
        assert!(!code.contains("_id"));
    }

    #[test]
    fn test_javascript_model() {
        let code = ModelEmitter.render(&post(), Language::JavaScript);

        assert!(code.starts_with("import mongoose from \"mongoose\";\n\nconst { Schema } = mongoose;\n"));
        assert!(code.contains("author: { type: Schema.Types.ObjectId, ref: \"User\" },"));
        assert!(code.contains("const doc = this;"));
        assert!(code.contains("export const Post = mongoose.model(\"Post\", PostSchema);"));
        assert!(!code.contains("interface"));
    }

    #[test]
    fn test_self_reference_uses_interface_name() {
        let user = Collection::new("User").field(Field::new("manager", "ref").references("User"));
        let code = ModelEmitter.render(&user, Language::TypeScript);

        assert!(code.contains("manager?: Types.ObjectId | IUser;"));
        assert!(!code.contains("import type"));
    }

    #[test]
    fn test_identity_only_collection_is_skipped() {
        let config = GenerationConfig::new("demo", Language::TypeScript);
        let empty = Collection::new("Empty").field(Field::new("_id", "primary"));

        match ModelEmitter.emit(&empty, &config) {
            Emission::Skipped(skipped) => {
                assert_eq!(skipped.collection, "Empty");
                assert_eq!(skipped.reason, SkipReason::NoFields);
            }
            Emission::File(artifact) => panic!("expected skip, got {}", artifact.file_name),
        }
    }
}
