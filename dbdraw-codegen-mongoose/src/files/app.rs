//! src/app generator.

use std::path::{Path, PathBuf};

use dbdraw_codegen::{Feature, GenerationConfig, builder::CodeBuilder};
use dbdraw_core::{GeneratedFile, Language, route_segment, to_camel_case};
use dbdraw_graph::Collection;

use crate::{
    ast::{Const, Export, Import},
    code_file::{CodeFile, RawCode},
    emitters::RouteEmitter,
};

/// A route table mounted on the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMount {
    /// URL prefix, e.g. `/api/blogPosts`
    pub path: String,
    /// Local name of the imported router
    pub binding: String,
    /// Module specifier relative to `src/app`
    pub module: String,
}

impl RouteMount {
    pub fn for_collection(collection: &Collection) -> Self {
        Self {
            path: format!("/api/{}", route_segment(&collection.name)),
            binding: format!("{}Routes", to_camel_case(&collection.name)),
            module: format!(
                "./routes/{}",
                RouteEmitter::file_name(collection, Language::JavaScript)
            ),
        }
    }
}

/// The Express application: middleware, docs, route mounts.
pub struct App {
    project_name: String,
    language: Language,
    auth: bool,
    swagger: bool,
    mounts: Vec<RouteMount>,
}

impl App {
    pub fn new(config: &GenerationConfig, mounts: Vec<RouteMount>) -> Self {
        Self {
            project_name: config.project_name.clone(),
            language: config.language,
            auth: config.has(Feature::Auth),
            swagger: config.has(Feature::Swagger),
            mounts,
        }
    }

    fn swagger_spec(&self) -> String {
        let auth = self.auth;
        CodeBuilder::js()
            .block_with_close("{", "}", |b| {
                b.block_with_close("definition: {", "},", |b| {
                    b.line("openapi: \"3.0.0\",")
                        .block_with_close("info: {", "},", |b| {
                            b.line(&format!("title: \"{}\",", self.project_name))
                                .line("version: \"1.0.0\",")
                        })
                        .when(auth, |b| {
                            b.block_with_close("components: {", "},", |b| {
                                b.block_with_close("securitySchemes: {", "},", |b| {
                                    b.block_with_close("bearerAuth: {", "},", |b| {
                                        b.line("type: \"http\",")
                                            .line("scheme: \"bearer\",")
                                            .line("bearerFormat: \"JWT\",")
                                    })
                                })
                            })
                        })
                })
                .line(&format!(
                    "apis: [\"./src/routes/*.{}\"],",
                    self.language.extension()
                ))
            })
            .build()
    }
}

impl GeneratedFile for App {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src")
            .join(format!("app.{}", self.language.extension()))
    }

    fn render(&self) -> String {
        let file = CodeFile::new()
            .import(Import::new("express").default("express"))
            .import(Import::new("cors").default("cors"))
            .import(Import::new("helmet").default("helmet"))
            .import(Import::new("morgan").default("morgan"))
            .import_if(self.swagger, || {
                Import::new("swagger-jsdoc").default("swaggerJsdoc")
            })
            .import_if(self.swagger, || {
                Import::new("swagger-ui-express").default("swaggerUi")
            })
            .import(Import::new("./middleware/error.js").named("errorHandler"));

        let spec = self.swagger_spec();
        let spec = spec.trim_end();
        let mounts: Vec<String> = self
            .mounts
            .iter()
            .map(|m| format!("app.use(\"{}\", {});", m.path, m.binding))
            .collect();

        self.mounts
            .iter()
            .fold(file, |file, m| {
                file.import(Import::new(&m.module).default(&m.binding))
            })
            .add(Const::new("app", "express()"))
            .add(RawCode::lines([
                "app.use(express.json());",
                "app.use(cors());",
                "app.use(helmet());",
                "app.use(morgan(\"dev\"));",
            ]))
            .add_if(self.swagger, || {
                RawCode::new(format!(
                    "{}\napp.use(\"/api-docs\", swaggerUi.serve, swaggerUi.setup(swaggerSpec));",
                    Const::new("swaggerSpec", format!("swaggerJsdoc({})", spec)).build()
                ))
            })
            .add_if(!mounts.is_empty(), || RawCode::lines(mounts.iter().cloned()))
            .add(RawCode::new("app.use(errorHandler);"))
            .export(Export::new().default("app"))
            .render()
    }
}
