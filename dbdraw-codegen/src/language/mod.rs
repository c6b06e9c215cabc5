//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for file-set generators
//! - [`TypeMapper`] - Trait for mapping field types to language types
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
