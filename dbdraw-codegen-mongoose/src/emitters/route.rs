//! `<camel>.routes.<ext>` route tables.

use dbdraw_codegen::{
    Artifact, Emission, Emitter, Feature, GenerationConfig, SkipReason, builder::CodeBuilder,
};
use dbdraw_core::{Language, route_segment, to_camel_case, to_pascal_case};
use dbdraw_graph::Collection;

use super::{ControllerEmitter, Handlers};
use crate::{
    ast::{Export, Import, MethodChain},
    code_file::{CodeFile, RawCode},
};

/// Emits an Express router binding the five CRUD handlers.
///
/// With `auth` every route runs `protect` first. With `swagger` each route
/// chain carries an `@openapi` block picked up by swagger-jsdoc.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteEmitter;

impl RouteEmitter {
    pub fn file_name(collection: &Collection, language: Language) -> String {
        format!(
            "{}.routes.{}",
            to_camel_case(&collection.name),
            language.extension()
        )
    }

    pub fn render(&self, collection: &Collection, config: &GenerationConfig) -> String {
        let auth = config.has(Feature::Auth);
        let swagger = config.has(Feature::Swagger);
        let handlers = Handlers::for_collection(collection);
        let path = format!("/api/{}", route_segment(&collection.name));
        let controller = ControllerEmitter::file_name(collection, Language::JavaScript);

        let guarded = |handler: &str| -> Vec<String> {
            if auth {
                vec!["protect".to_string(), handler.to_string()]
            } else {
                vec![handler.to_string()]
            }
        };

        let collection_routes = MethodChain::new("router.route")
            .arg("\"/\"")
            .call("get", guarded(&handlers.list_all))
            .call("post", guarded(&handlers.create));
        let item_routes = MethodChain::new("router.route")
            .arg("\"/:id\"")
            .call("get", guarded(&handlers.get_one))
            .call("put", guarded(&handlers.update))
            .call("delete", guarded(&handlers.delete));

        let docs = if swagger {
            let spec = OpenApi::new(collection, auth);
            [spec.collection_doc(&path), spec.item_doc(&path)]
        } else {
            [
                vec![format!("@route {}", path)],
                vec![format!("@route {}/:id", path)],
            ]
        };
        let [collection_doc, item_doc] = docs;

        CodeFile::new()
            .import(Import::new("express").named("Router"))
            .import_if(auth, || {
                Import::new("../middleware/auth.js").named("protect")
            })
            .import(
                Import::new(format!("../controllers/{}", controller)).named_all(handlers.all()),
            )
            .add(RawCode::new("const router = Router();"))
            .add(documented(&collection_doc, &collection_routes))
            .add(documented(&item_doc, &item_routes))
            .export(Export::new().default("router"))
            .render()
    }
}

impl Emitter for RouteEmitter {
    fn emit(&self, collection: &Collection, config: &GenerationConfig) -> Emission {
        if !collection.has_emittable_fields() {
            return Emission::skipped(collection, SkipReason::NoFields);
        }
        Emission::File(Artifact::new(
            Self::file_name(collection, config.language),
            self.render(collection, config),
        ))
    }
}

fn documented(doc: &[String], chain: &MethodChain) -> RawCode {
    RawCode::new(CodeBuilder::js().jsdoc_block(doc).node(chain).build())
}

/// Response codes documented per operation.
const LIST_RESPONSES: &[(u16, &str)] = &[(200, "Success"), (500, "Server error")];
const CREATE_RESPONSES: &[(u16, &str)] = &[
    (201, "Created"),
    (400, "Validation error or duplicate value"),
    (500, "Server error"),
];
const READ_RESPONSES: &[(u16, &str)] = &[
    (200, "Success"),
    (400, "Invalid ID format"),
    (404, "Not found"),
    (500, "Server error"),
];
const UPDATE_RESPONSES: &[(u16, &str)] = &[
    (200, "Updated"),
    (400, "Invalid ID format, validation error or duplicate value"),
    (404, "Not found"),
    (500, "Server error"),
];

struct Operation {
    verb: &'static str,
    summary: String,
    takes_id: bool,
    takes_body: bool,
    responses: &'static [(u16, &'static str)],
}

/// `@openapi` YAML for one collection's routes.
struct OpenApi {
    tag: String,
    camel: String,
    auth: bool,
}

impl OpenApi {
    fn new(collection: &Collection, auth: bool) -> Self {
        Self {
            tag: to_pascal_case(&collection.name),
            camel: to_camel_case(&collection.name),
            auth,
        }
    }

    fn collection_doc(&self, path: &str) -> Vec<String> {
        self.path_doc(
            path,
            &[
                Operation {
                    verb: "get",
                    summary: format!("List all {}s", self.camel),
                    takes_id: false,
                    takes_body: false,
                    responses: LIST_RESPONSES,
                },
                Operation {
                    verb: "post",
                    summary: format!("Create a {}", self.camel),
                    takes_id: false,
                    takes_body: true,
                    responses: CREATE_RESPONSES,
                },
            ],
        )
    }

    fn item_doc(&self, path: &str) -> Vec<String> {
        self.path_doc(
            &format!("{}/{{id}}", path),
            &[
                Operation {
                    verb: "get",
                    summary: format!("Get a {} by id", self.camel),
                    takes_id: true,
                    takes_body: false,
                    responses: READ_RESPONSES,
                },
                Operation {
                    verb: "put",
                    summary: format!("Update a {}", self.camel),
                    takes_id: true,
                    takes_body: true,
                    responses: UPDATE_RESPONSES,
                },
                Operation {
                    verb: "delete",
                    summary: format!("Delete a {}", self.camel),
                    takes_id: true,
                    takes_body: false,
                    responses: READ_RESPONSES,
                },
            ],
        )
    }

    fn path_doc(&self, path: &str, operations: &[Operation]) -> Vec<String> {
        let mut lines = vec!["@openapi".to_string(), format!("{}:", path)];
        for op in operations {
            lines.push(format!("  {}:", op.verb));
            lines.push(format!("    summary: {}", op.summary));
            lines.push(format!("    tags: [{}]", self.tag));
            if self.auth {
                lines.push("    security:".to_string());
                lines.push("      - bearerAuth: []".to_string());
            }
            if op.takes_id {
                lines.extend(
                    [
                        "    parameters:",
                        "      - in: path",
                        "        name: id",
                        "        required: true",
                        "        schema:",
                        "          type: string",
                    ]
                    .map(String::from),
                );
            }
            if op.takes_body {
                lines.extend(
                    [
                        "    requestBody:",
                        "      required: true",
                        "      content:",
                        "        application/json:",
                        "          schema:",
                        "            type: object",
                    ]
                    .map(String::from),
                );
            }
            lines.push("    responses:".to_string());
            let unauthorized = self.auth.then_some((401, "Not authorized"));
            let mut responses: Vec<(u16, &str)> = op.responses.to_vec();
            responses.extend(unauthorized);
            responses.sort_by_key(|(code, _)| *code);
            for (code, description) in responses {
                lines.push(format!("      {}:", code));
                lines.push(format!("        description: {}", description));
            }
        }
        lines
    }
}
