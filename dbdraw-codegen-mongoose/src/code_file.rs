//! Whole-file layout for generated modules.

use dbdraw_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::{Export, Import};

/// A JavaScript/TypeScript module: imports, body statements, exports.
///
/// Sections are separated by one blank line, as are body statements.
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn import_if(self, condition: bool, import: impl FnOnce() -> Import) -> Self {
        if condition { self.import(import()) } else { self }
    }

    /// Append a top-level statement.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_if<R: Renderable>(self, condition: bool, node: impl FnOnce() -> R) -> Self {
        if condition { self.add(node()) } else { self }
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty() && self.exports.is_empty()
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::js();
        let mut sections = 0;

        if !self.imports.is_empty() {
            for import in &self.imports {
                builder.emit(import);
            }
            sections += 1;
        }

        for statement in &self.body {
            if sections > 0 {
                builder.write(&CodeFragment::Blank);
            }
            for fragment in statement {
                builder.write(fragment);
            }
            sections += 1;
        }

        if !self.exports.is_empty() {
            if sections > 0 {
                builder.write(&CodeFragment::Blank);
            }
            for export in &self.exports {
                builder.emit(export);
            }
        }

        builder.build()
    }
}

/// Pre-formatted statements, one fragment per line.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Statements joined by newlines.
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self(lines.join("\n"))
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        CodeFragment::lines(&self.0)
    }
}
