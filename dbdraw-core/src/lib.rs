//! Core utilities and types for the dbdraw CLI.
//!
//! This crate provides the naming normalizer, the target language
//! descriptors and the generated-file abstraction shared by every
//! other dbdraw crate.

mod file;
mod language;
mod naming;

// File operations
pub use file::{File, GeneratedFile, Overwrite, WriteResult};
// Target languages
pub use language::{Language, ModuleType, TypeSystem};
// Identifier normalization
pub use naming::{route_segment, to_camel_case, to_pascal_case};
