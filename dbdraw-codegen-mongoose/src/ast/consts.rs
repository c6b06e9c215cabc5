//! Const declaration builder.

use dbdraw_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for `const` declarations.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    ty: Option<String>,
    exported: bool,
}

impl Const {
    /// A private `const`; call [`Const::export`] to export it.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ty: None,
            exported: false,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Add a type annotation only when `typed` is set.
    pub fn ty_if(self, typed: bool, ty: impl Into<String>) -> Self {
        if typed { self.ty(ty) } else { self }
    }

    pub fn export(mut self) -> Self {
        self.exported = true;
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let annotation = match &self.ty {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };

        // Multi-line values keep their own layout; only the last line gets the `;`
        let mut lines = self.value.lines();
        let first = lines.next().unwrap_or_default();
        let rest: Vec<&str> = lines.collect();
        let head = format!("{}const {}{} = {}", export, self.name, annotation, first);

        if rest.is_empty() {
            return vec![CodeFragment::line(format!("{head};"))];
        }

        let mut fragments = vec![CodeFragment::line(head)];
        let last = rest.len() - 1;
        for (i, line) in rest.into_iter().enumerate() {
            if i == last {
                fragments.push(CodeFragment::line(format!("{line};")));
            } else {
                fragments.push(CodeFragment::line(line));
            }
        }
        fragments
    }
}
