//! `<camel>.controller.<ext>` CRUD handlers.

use dbdraw_codegen::{Artifact, Emission, Emitter, GenerationConfig, SkipReason, builder::CodeBuilder};
use dbdraw_core::{Language, route_segment, to_camel_case, to_pascal_case};
use dbdraw_graph::Collection;

use super::{ModelEmitter, schema::quoted_list};
use crate::{
    ast::{ArrowFn, Const, Import, Param},
    code_file::CodeFile,
};

/// Names of the five CRUD handlers of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handlers {
    pub list_all: String,
    pub get_one: String,
    pub create: String,
    pub update: String,
    pub delete: String,
}

impl Handlers {
    pub fn for_collection(collection: &Collection) -> Self {
        let pascal = to_pascal_case(&collection.name);
        Self {
            list_all: format!("getAll{}s", pascal),
            get_one: format!("get{}", pascal),
            create: format!("create{}", pascal),
            update: format!("update{}", pascal),
            delete: format!("delete{}", pascal),
        }
    }

    /// Handler names in declaration order.
    pub fn all(&self) -> [&str; 5] {
        [
            self.list_all.as_str(),
            self.get_one.as_str(),
            self.create.as_str(),
            self.update.as_str(),
            self.delete.as_str(),
        ]
    }
}

/// Failure classes a handler maps to a 400 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    /// Malformed ObjectId
    Cast,
    Validation,
    /// Unique index violation
    Duplicate,
}

/// Emits five Express handlers over the collection's model.
///
/// Every response is either `{ success: true, data }` or
/// `{ success: false, error }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerEmitter;

impl ControllerEmitter {
    pub fn file_name(collection: &Collection, language: Language) -> String {
        format!(
            "{}.controller.{}",
            to_camel_case(&collection.name),
            language.extension()
        )
    }

    pub fn render(&self, collection: &Collection, language: Language) -> String {
        let typed = language.is_typed();
        let pascal = to_pascal_case(&collection.name);
        let camel = to_camel_case(&collection.name);
        let route = format!("/api/{}", route_segment(&collection.name));
        let handlers = Handlers::for_collection(collection);
        let model_module = ModelEmitter::file_name(collection, Language::JavaScript);

        let ctx = HandlerContext {
            typed,
            model: &pascal,
            record: &camel,
        };

        CodeFile::new()
            .import_if(typed, || {
                Import::new("express").named_all(["Request", "Response"])
            })
            .import(Import::new(format!("../models/{}", model_module)).named(&pascal))
            .add(
                Const::new("referenceFields", quoted_list(&collection.object_id_fields()))
                    .ty_if(typed, "string[]"),
            )
            .add(normalize_references(typed))
            .add(ctx.handler(
                &handlers.list_all,
                [format!("Get all {}s", camel), format!("@route GET {}", route)],
                ctx.list_all_body(),
            ))
            .add(ctx.handler(
                &handlers.get_one,
                [
                    format!("Get a single {}", camel),
                    format!("@route GET {}/:id", route),
                ],
                ctx.get_one_body(),
            ))
            .add(ctx.handler(
                &handlers.create,
                [
                    format!("Create a new {}", camel),
                    format!("@route POST {}", route),
                ],
                ctx.create_body(),
            ))
            .add(ctx.handler(
                &handlers.update,
                [
                    format!("Update a {}", camel),
                    format!("@route PUT {}/:id", route),
                ],
                ctx.update_body(),
            ))
            .add(ctx.handler(
                &handlers.delete,
                [
                    format!("Delete a {}", camel),
                    format!("@route DELETE {}/:id", route),
                ],
                ctx.delete_body(),
            ))
            .render()
    }
}

impl Emitter for ControllerEmitter {
    fn emit(&self, collection: &Collection, config: &GenerationConfig) -> Emission {
        // Without a model file there is nothing to import
        if !collection.has_emittable_fields() {
            return Emission::skipped(collection, SkipReason::NoFields);
        }
        Emission::File(Artifact::new(
            Self::file_name(collection, config.language),
            self.render(collection, config.language),
        ))
    }
}

fn normalize_references(typed: bool) -> ArrowFn {
    let body = CodeBuilder::js()
        .line("const payload = { ...body };")
        .block_with_close("for (const field of referenceFields) {", "}", |b| {
            b.block_with_close("if (payload[field] === \"\") {", "}", |b| {
                b.line("payload[field] = null;")
            })
        })
        .line("return payload;")
        .build();

    ArrowFn::new("normalizeReferences")
        .private()
        .doc("Empty-string references are stored as null")
        .param(Param::new("body").ty_if(typed, "Record<string, any>"))
        .body(&body)
}

struct HandlerContext<'a> {
    typed: bool,
    model: &'a str,
    record: &'a str,
}

impl HandlerContext<'_> {
    fn handler(&self, name: &str, doc: [String; 2], body: String) -> ArrowFn {
        let [summary, route] = doc;
        ArrowFn::new(name)
            .doc(summary)
            .doc(route)
            .async_()
            .param(Param::new("req").ty_if(self.typed, "Request"))
            .param(Param::new("res").ty_if(self.typed, "Response"))
            .body(&body)
    }

    fn catch_header(&self) -> &'static str {
        if self.typed {
            "} catch (error: any) {"
        } else {
            "} catch (error) {"
        }
    }

    fn not_found(&self, b: CodeBuilder) -> CodeBuilder {
        b.block_with_close(&format!("if (!{}) {{", self.record), "}", |b| {
            b.line(&format!(
                "return res.status(404).json({{ success: false, error: \"{} not found\" }});",
                self.model
            ))
        })
    }

    fn failure(&self, b: CodeBuilder, failure: Failure) -> CodeBuilder {
        match failure {
            Failure::Cast => b.block_with_close(
                "if (error.name === \"CastError\" && error.kind === \"ObjectId\") {",
                "}",
                |b| b.line("return res.status(400).json({ success: false, error: \"Invalid ID format\" });"),
            ),
            Failure::Validation => {
                let map = if self.typed {
                    "(err: any) => err.message"
                } else {
                    "(err) => err.message"
                };
                b.block_with_close("if (error.name === \"ValidationError\") {", "}", |b| {
                    b.line(&format!(
                        "const messages = Object.values(error.errors).map({});",
                        map
                    ))
                    .line("return res.status(400).json({ success: false, error: messages });")
                })
            }
            Failure::Duplicate => b.block_with_close("if (error.code === 11000) {", "}", |b| {
                b.line(
                    "return res.status(400).json({ success: false, error: \"Duplicate field value entered\" });",
                )
            }),
        }
    }

    /// `try { <ok> } catch (error) { <failures> 500 }`
    fn guarded(
        &self,
        ok: impl FnOnce(CodeBuilder) -> CodeBuilder,
        failures: &[Failure],
    ) -> String {
        let b = CodeBuilder::js().line("try {").indent();
        let b = ok(b).dedent().line(self.catch_header()).indent();
        failures
            .iter()
            .fold(b, |b, failure| self.failure(b, *failure))
            .line("res.status(500).json({ success: false, error: error.message });")
            .dedent()
            .line("}")
            .build()
    }

    fn list_all_body(&self) -> String {
        let records = format!("{}s", self.record);
        self.guarded(
            |b| {
                b.line(&format!("const {} = await {}.find();", records, self.model))
                    .line(&format!(
                        "res.status(200).json({{ success: true, data: {} }});",
                        records
                    ))
            },
            &[],
        )
    }

    fn get_one_body(&self) -> String {
        self.guarded(
            |b| {
                let b = b.line(&format!(
                    "const {} = await {}.findById(req.params.id);",
                    self.record, self.model
                ));
                self.not_found(b).line(&format!(
                    "res.status(200).json({{ success: true, data: {} }});",
                    self.record
                ))
            },
            &[Failure::Cast],
        )
    }

    fn create_body(&self) -> String {
        self.guarded(
            |b| {
                b.line("const payload = normalizeReferences(req.body);")
                    .line(&format!(
                        "const {} = await {}.create(payload);",
                        self.record, self.model
                    ))
                    .line(&format!(
                        "res.status(201).json({{ success: true, data: {} }});",
                        self.record
                    ))
            },
            &[Failure::Validation, Failure::Duplicate],
        )
    }

    fn update_body(&self) -> String {
        self.guarded(
            |b| {
                let b = b
                    .line("const payload = normalizeReferences(req.body);")
                    .block_with_close(
                        &format!(
                            "const {} = await {}.findByIdAndUpdate(req.params.id, payload, {{",
                            self.record, self.model
                        ),
                        "});",
                        |b| b.line("new: true,").line("runValidators: true,"),
                    );
                self.not_found(b).line(&format!(
                    "res.status(200).json({{ success: true, data: {} }});",
                    self.record
                ))
            },
            &[Failure::Validation, Failure::Duplicate, Failure::Cast],
        )
    }

    fn delete_body(&self) -> String {
        self.guarded(
            |b| {
                let b = b.line(&format!(
                    "const {} = await {}.findByIdAndDelete(req.params.id);",
                    self.record, self.model
                ));
                self.not_found(b)
                    .line("res.status(200).json({ success: true, data: {} });")
            },
            &[Failure::Cast],
        )
    }
}

#[cfg(test)]
mod tests {
    use dbdraw_graph::Field;

    use super::*;

    fn blog_post() -> Collection {
        Collection::new("Blog_Post")
            .field(Field::new("_id", "primary"))
            .field(Field::new("title", "string").required())
            .field(Field::new("author", "ref").references("User"))
    }

    #[test]
    fn test_handler_names() {
        let handlers = Handlers::for_collection(&blog_post());
        assert_eq!(
            handlers.all(),
            [
                "getAllBlogPosts",
                "getBlogPost",
                "createBlogPost",
                "updateBlogPost",
                "deleteBlogPost"
            ]
        );
    }

    #[test]
    fn test_typescript_controller() {
        let code = ControllerEmitter.render(&blog_post(), Language::TypeScript);

        assert!(code.starts_with(
            "import { Request, Response } from \"express\";\nimport { BlogPost } from \"../models/blogPost.model.js\";\n"
        ));
        assert!(code.contains("const referenceFields: string[] = [\"author\"];"));
        assert!(code.contains("const normalizeReferences = (body: Record<string, any>) => {"));
        assert!(code.contains(
            "export const getAllBlogPosts = async (req: Request, res: Response) => {"
        ));
        assert!(code.contains(" * @route GET /api/blogPosts/:id\n"));
        assert!(code.contains("} catch (error: any) {"));
        assert!(code.contains("(err: any) => err.message"));
    }

    #[test]
    fn test_get_one_contract() {
        let code = ControllerEmitter.render(&blog_post(), Language::JavaScript);

        let start = code.find("export const getBlogPost").unwrap();
        let end = start + code[start..].find("\n};\n").unwrap() + 4;

        insta::assert_snapshot!(&code[start..end], @r#"
        export const getBlogPost = async (req, res) => {
          try {
            const blogPost = await BlogPost.findById(req.params.id);
            if (!blogPost) {
              return res.status(404).json({ success: false, error: "BlogPost not found" });
            }
            res.status(200).json({ success: true, data: blogPost });
          } catch (error) {
            if (error.name === "CastError" && error.kind === "ObjectId") {
              return res.status(400).json({ success: false, error: "Invalid ID format" });
            }
            res.status(500).json({ success: false, error: error.message });
          }
        };
        "#);
    }

    #[test]
    fn test_status_codes() {
        let code = ControllerEmitter.render(&blog_post(), Language::JavaScript);

        assert!(code.contains("res.status(201).json({ success: true, data: blogPost });"));
        assert!(code.contains("res.status(200).json({ success: true, data: {} });"));
        assert!(code.contains("error: \"Duplicate field value entered\""));
        assert!(code.contains("const messages = Object.values(error.errors).map((err) => err.message);"));
        assert!(code.contains("findByIdAndUpdate(req.params.id, payload, {\n      new: true,\n      runValidators: true,\n    });"));
        assert_eq!(code.matches("normalizeReferences(req.body)").count(), 2);
        assert_eq!(code.matches("status(500)").count(), 5);
        assert_eq!(code.matches("error: \"Invalid ID format\"").count(), 3);
    }

    #[test]
    fn test_no_reference_fields() {
        let tag = Collection::new("tag").field(Field::new("name", "string"));
        let code = ControllerEmitter.render(&tag, Language::JavaScript);
        assert!(code.contains("const referenceFields = [];"));
        assert!(!code.contains("import { Request"));
    }
}
