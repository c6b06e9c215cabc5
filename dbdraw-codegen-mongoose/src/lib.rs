//! Express + Mongoose code generator for dbdraw.
//!
//! Turns normalized [`Collection`](dbdraw_graph::Collection)s into Mongoose
//! models, Express controllers and routes, in TypeScript or JavaScript.
//!
//! # Usage
//!
//! This crate is used internally by the `dbdraw` CLI tool. You typically don't need
//! to use it directly.
//!
//! ```ignore
//! use dbdraw_codegen::{GenerationConfig, language::LanguageCodegen};
//! use dbdraw_codegen_mongoose::ProjectGenerator;
//! use dbdraw_core::Language;
//!
//! let collections = dbdraw_graph::collections_from_file("graph.json")?;
//! let config = GenerationConfig::new("shop-api", Language::TypeScript);
//!
//! let result = ProjectGenerator::new(&collections, &config).generate(&config.output_dir)?;
//! ```
//!
//! # Generated Output
//!
//! Multi-file projects ([`ProjectGenerator`]):
//!
//! - `src/models/<camel>.model.<ext>` - Mongoose schema and model
//! - `src/controllers/<camel>.controller.<ext>` - CRUD handlers
//! - `src/routes/<camel>.routes.<ext>` - Express router
//! - `src/app`, `src/index`, `src/config/db`, `src/middleware/*`
//! - `package.json`, `.env`, `README.md` and feature dependent extras
//!
//! Inline sync ([`SchemaSync`]) writes one `<Pascal>.<ext>` schema per
//! collection into an existing project.

mod code_file;
mod generator;
mod sync;
mod type_mapper;

pub mod ast;
pub mod emitters;
pub mod files;

pub use code_file::{CodeFile, RawCode};
pub use dbdraw_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use emitters::{ControllerEmitter, Handlers, InlineSchemaEmitter, ModelEmitter, RouteEmitter};
pub use generator::ProjectGenerator;
pub use sync::{ModelSelection, SchemaSync};
pub use type_mapper::{InterfaceTypeMapper, SchemaTypeMapper};
