//! Sync operation - inline schema files for a linked project.

use std::path::Path;

use dbdraw_codegen::language::LanguageCodegen;
use dbdraw_codegen_mongoose::{ModelSelection, SchemaSync};
use dbdraw_graph::{Collection, ProjectLink};
use eyre::{Context, Result};

use super::duplicate_warnings;
use crate::reports::SyncReport;

/// Options for the sync operation.
pub struct SyncOptions<'a> {
    /// Directory the link's `path` is resolved against.
    pub base_dir: &'a Path,
    pub selection: ModelSelection,
    pub project_title: String,
}

/// Execute the sync operation.
pub fn sync(
    collections: &[Collection],
    link: &ProjectLink,
    opts: SyncOptions<'_>,
) -> Result<SyncReport> {
    let models_dir = link.models_dir(opts.base_dir);

    let mut warnings = duplicate_warnings(collections);
    warnings.extend(
        opts.selection
            .unknown(collections)
            .into_iter()
            .map(|name| format!("No collection named '{}' in this project", name)),
    );

    let result = SchemaSync::from_link(collections, link)
        .with_selection(opts.selection)
        .generate(&models_dir)
        .wrap_err_with(|| format!("Failed to write schemas to {}", models_dir.display()))?;

    Ok(SyncReport {
        project_title: opts.project_title,
        models_dir,
        warnings,
        written: result.written,
        skipped: result.skipped,
    })
}
