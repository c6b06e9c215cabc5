//! Language-agnostic code generation traits.

use std::path::Path;

use dbdraw_graph::Field;
use eyre::Result;

use crate::emit::SkippedCollection;

/// Trait for target-specific generators that produce a set of files.
pub trait LanguageCodegen {
    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written, relative to the output directory
    pub written: Vec<String>,
    /// Existing user-editable files that were left alone
    pub kept: Vec<String>,
    /// Collections that produced no files
    pub skipped: Vec<SkippedCollection>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Maps a field's abstract type to a declaration fragment in one type system.
///
/// `map_base` ignores the `list` modifier; [`TypeMapper::map_field`] applies
/// it with [`TypeMapper::wrap_list`] so the wrapping composes with every
/// base type.
pub trait TypeMapper {
    /// Map the field's base type, ignoring `list`
    fn map_base(&self, field: &Field) -> String;

    /// Wrap a base type to denote a sequence of it
    fn wrap_list(&self, base: &str) -> String;

    /// Map a field including its `list` modifier
    fn map_field(&self, field: &Field) -> String {
        let base = self.map_base(field);
        if field.list {
            self.wrap_list(&base)
        } else {
            base
        }
    }
}
