//! Generate command report data structures.

use std::path::PathBuf;

use dbdraw_codegen::SkippedCollection;

use super::output::{Output, Report};

/// Report data from project generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub project_name: String,
    pub language: String,
    /// Enabled features, comma separated.
    pub features: String,
    pub warnings: Vec<String>,
    /// Collections that produced no files.
    pub skipped: Vec<SkippedCollection>,
    pub result: GenerationResult,
}

#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub written: Vec<String>,
    /// Existing files left untouched.
    pub kept: Vec<String>,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Project", &self.project_name);
        out.key_value("Language", &self.language);
        if !self.features.is_empty() {
            out.key_value("Features", &self.features);
        }
        out.newline();

        out.section(&format!("Generated ({})", written.written.len()));
        for path in &written.written {
            out.added_item(path);
        }

        if !written.kept.is_empty() {
            out.newline();
            out.section("Kept existing");
            for path in &written.kept {
                out.list_item(path);
            }
        }

        self.render_skipped(out);

        out.newline();
        out.success(&format!(
            "API project generated in {}",
            written.output_dir.display()
        ));
        out.newline();
        out.section("Next steps");
        out.preformatted(&format!("  cd {}", written.output_dir.display()));
        out.preformatted("  npm install");
        out.preformatted("  npm run dev");
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
        self.render_skipped(out);
    }

    fn render_skipped(&self, out: &mut dyn Output) {
        if self.skipped.is_empty() {
            return;
        }
        out.newline();
        out.section("Skipped collections");
        for skipped in &self.skipped {
            out.list_item(&skipped.to_string());
        }
    }
}
