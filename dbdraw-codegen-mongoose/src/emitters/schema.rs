//! Pieces shared by the model and inline schema emitters.

use dbdraw_codegen::{builder::CodeBuilder, language::TypeMapper};
use dbdraw_core::to_pascal_case;
use dbdraw_graph::{Collection, Field};

use crate::{
    ast::Interface,
    type_mapper::{InterfaceTypeMapper, SchemaTypeMapper},
};

/// How a resolved reference is spelled in the schema's `ref` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RefName {
    /// The target's capitalized name, matching `model("<Name>")` registrations.
    Pascal,
    /// The target's label as drawn.
    Label,
}

impl RefName {
    fn apply(self, target: &str) -> String {
        match self {
            RefName::Pascal => to_pascal_case(target),
            RefName::Label => target.to_string(),
        }
    }
}

/// One schema field declaration, e.g. `title: { type: String, required: true },`.
pub(crate) fn field_line(field: &Field, mapper: &SchemaTypeMapper, ref_name: RefName) -> String {
    let mut options = vec![format!("type: {}", mapper.map_field(field))];
    if let Some(target) = field.ref_target() {
        options.push(format!("ref: {}", string_literal(&ref_name.apply(target))));
    }
    if field.required {
        options.push("required: true".to_string());
    }
    if field.unique {
        options.push("unique: true".to_string());
    }
    if let Some(default) = field.default_literal() {
        options.push(format!("default: {}", default));
    }
    format!("{}: {{ {} }},", field.name, options.join(", "))
}

/// The `const <Name>Schema = new Schema(...)` declaration.
///
/// `options` is a second constructor argument such as `{ timestamps: true }`.
pub(crate) fn schema_declaration(
    var: &str,
    constructor: &str,
    lines: &[String],
    options: Option<&str>,
) -> String {
    let header = format!("const {} = new {}(", var, constructor);
    match options {
        Some(options) => CodeBuilder::js()
            .block_with_close(&header, ");", |b| {
                b.block_with_close("{", "},", |b| {
                    b.each(lines.iter(), |b, line| b.line(line))
                })
                .line(&format!("{},", options))
            })
            .build(),
        None => CodeBuilder::js()
            .block_with_close(&format!("{}{{", header), "});", |b| {
                b.each(lines.iter(), |b, line| b.line(line))
            })
            .build(),
    }
}

/// Interface listing every emittable field, `?` marking optional ones.
pub(crate) fn interface(
    collection: &Collection,
    name: &str,
    mapper: &InterfaceTypeMapper,
) -> Interface {
    collection
        .emittable_fields()
        .fold(Interface::new(name).extends("Document"), |iface, field| {
            iface.member(&field.name, mapper.map_field(field), field.required)
        })
}

/// Pre-save hook storing empty-string references as null.
pub(crate) fn normalize_hook(schema_var: &str, collection: &Collection, typed: bool) -> String {
    let fields = quoted_list(&collection.object_id_fields());
    let doc = if typed {
        "const doc: any = this;"
    } else {
        "const doc = this;"
    };

    CodeBuilder::js()
        .comment("Forms submit empty selects as \"\"; store those references as null")
        .block_with_close(
            &format!("{}.pre(\"save\", function (next) {{", schema_var),
            "});",
            |b| {
                b.line(doc)
                    .block_with_close(&format!("for (const field of {}) {{", fields), "}", |b| {
                        b.block_with_close("if (doc[field] === \"\") {", "}", |b| {
                            b.line("doc[field] = null;")
                        })
                    })
                    .line("next();")
            },
        )
        .build()
}

/// Distinct reference targets other than `collection` itself, in field order.
pub(crate) fn foreign_targets(collection: &Collection) -> Vec<String> {
    let own = to_pascal_case(&collection.name);
    let mut targets: Vec<String> = Vec::new();
    for target in collection.emittable_fields().filter_map(Field::ref_target) {
        let pascal = to_pascal_case(target);
        if pascal != own && !targets.iter().any(|t| to_pascal_case(t) == pascal) {
            targets.push(target.to_string());
        }
    }
    targets
}

/// A double-quoted JS string literal with quotes and backslashes escaped.
pub(crate) fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// `["a", "b"]`
pub(crate) fn quoted_list(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| string_literal(n)).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use dbdraw_core::Language;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_field_line_options_order() {
        let mapper = SchemaTypeMapper::for_model(Language::JavaScript);
        let field = Field::new("email", "string")
            .required()
            .unique()
            .with_default(json!("a@b.c"));

        assert_eq!(
            field_line(&field, &mapper, RefName::Pascal),
            r#"email: { type: String, required: true, unique: true, default: "a@b.c" },"#
        );
    }

    #[test]
    fn test_field_line_ref_spelling() {
        let mapper = SchemaTypeMapper::for_inline(Language::JavaScript);
        let field = Field::new("post", "ref").references("blog_post");

        assert_eq!(
            field_line(&field, &mapper, RefName::Pascal),
            r#"post: { type: mongoose.Schema.Types.ObjectId, ref: "BlogPost" },"#
        );
        assert_eq!(
            field_line(&field, &mapper, RefName::Label),
            r#"post: { type: mongoose.Schema.Types.ObjectId, ref: "blog_post" },"#
        );
    }

    #[test]
    fn test_ref_target_is_escaped() {
        let mapper = SchemaTypeMapper::for_inline(Language::JavaScript);
        let field = Field::new("owner", "ref").references(r#"my "team"\x"#);

        assert_eq!(
            field_line(&field, &mapper, RefName::Label),
            r#"owner: { type: mongoose.Schema.Types.ObjectId, ref: "my \"team\"\\x" },"#
        );
        assert_eq!(string_literal("plain"), "\"plain\"");
        assert_eq!(quoted_list(&["a", "b"]), r#"["a", "b"]"#);
    }

    #[test]
    fn test_unresolved_ref_has_no_ref_option() {
        let mapper = SchemaTypeMapper::for_model(Language::TypeScript);
        let line = field_line(&Field::new("owner", "ref"), &mapper, RefName::Pascal);
        assert_eq!(line, "owner: { type: Types.ObjectId },");
    }

    #[test]
    fn test_schema_declaration_with_options() {
        let code = schema_declaration(
            "TagSchema",
            "Schema",
            &["name: { type: String },".to_string()],
            Some("{ timestamps: true }"),
        );
        assert_eq!(
            code,
            "const TagSchema = new Schema(\n  {\n    name: { type: String },\n  },\n  { timestamps: true },\n);\n"
        );
    }

    #[test]
    fn test_schema_declaration_inline() {
        let code = schema_declaration(
            "TagSchema",
            "mongoose.Schema",
            &["name: { type: String },".to_string()],
            None,
        );
        assert_eq!(
            code,
            "const TagSchema = new mongoose.Schema({\n  name: { type: String },\n});\n"
        );
    }

    #[test]
    fn test_normalize_hook_lists_reference_fields() {
        let collection = Collection::new("Post")
            .field(Field::new("_id", "primary"))
            .field(Field::new("title", "string"))
            .field(Field::new("author", "ref").references("User"));

        let hook = normalize_hook("PostSchema", &collection, false);
        assert!(hook.contains("PostSchema.pre(\"save\", function (next) {"));
        assert!(hook.contains("for (const field of [\"author\"]) {"));
        assert!(hook.contains("const doc = this;"));
        assert!(hook.ends_with("});\n"));
    }

    #[test]
    fn test_foreign_targets_skip_self_and_duplicates() {
        let collection = Collection::new("user")
            .field(Field::new("manager", "ref").references("User"))
            .field(Field::new("team", "ref").references("Team"))
            .field(Field::new("backup", "ref").references("team"))
            .field(Field::new("loose", "ref"));

        assert_eq!(foreign_targets(&collection), vec!["Team".to_string()]);
    }
}
