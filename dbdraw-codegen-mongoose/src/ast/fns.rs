//! Arrow function builder (`export const foo = async (a, b) => { ... };`).

use dbdraw_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter, with a type annotation in TypeScript output.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }

    /// Annotate the parameter with `ty`.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Annotate only when `typed` is set.
    pub fn ty_if(self, typed: bool, ty: impl Into<String>) -> Self {
        if typed { self.ty(ty) } else { self }
    }

    fn render(&self) -> String {
        match &self.ty {
            Some(ty) => format!("{}: {}", self.name, ty),
            None => self.name.clone(),
        }
    }
}

/// Builder for a `const` bound arrow function.
#[derive(Debug, Clone)]
pub struct ArrowFn {
    name: String,
    doc: Vec<String>,
    exported: bool,
    is_async: bool,
    params: Vec<Param>,
    body: Vec<CodeFragment>,
}

impl ArrowFn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            exported: true,
            is_async: false,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add a JSDoc line.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Set the body from a builder's output.
    pub fn body(mut self, code: &str) -> Self {
        self.body.extend(CodeFragment::lines(code));
        self
    }

    /// Append body fragments.
    pub fn body_fragments(mut self, fragments: Vec<CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }

    fn signature(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{}const {} = {}({}) => {{",
            export, self.name, async_kw, params
        )
    }
}

impl Renderable for ArrowFn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        match self.doc.len() {
            0 => {}
            1 => fragments.push(CodeFragment::jsdoc(&self.doc[0])),
            _ => fragments.push(CodeFragment::jsdoc_block(self.doc.iter().cloned())),
        }
        fragments.push(CodeFragment::block(
            self.signature(),
            self.body.clone(),
            Some("};".to_string()),
        ));
        fragments
    }
}
