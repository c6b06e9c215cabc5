//! Sync command report data structures.

use std::path::PathBuf;

use dbdraw_codegen::SkippedCollection;

use super::output::{Output, Report};

/// Report data from syncing inline schema files.
#[derive(Debug)]
pub struct SyncReport {
    pub project_title: String,
    pub models_dir: PathBuf,
    pub warnings: Vec<String>,
    pub written: Vec<String>,
    pub skipped: Vec<SkippedCollection>,
}

impl Report for SyncReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.section(&format!(
            "Schemas written to {} ({})",
            self.models_dir.display(),
            self.written.len()
        ));
        for file in &self.written {
            out.added_item(file);
        }

        if !self.skipped.is_empty() {
            out.newline();
            out.section("Skipped collections");
            for skipped in &self.skipped {
                out.list_item(&skipped.to_string());
            }
        }

        out.newline();
        out.success(&format!("Project synced successfully: {}", self.project_title));
    }
}
