//! Import builder for ES modules and CommonJS.

use dbdraw_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
use dbdraw_core::ModuleType;

/// Builder for `import` statements, or their `require` equivalent.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
    module_type: ModuleType,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
            module_type: ModuleType::Module,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import several named exports.
    pub fn named_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Render with `require` when `module_type` is CommonJS.
    pub fn module_type(mut self, module_type: ModuleType) -> Self {
        self.module_type = module_type;
        self
    }

    fn braced(&self) -> Option<String> {
        (!self.named.is_empty()).then(|| format!("{{ {} }}", self.named.join(", ")))
    }

    fn esm_lines(&self) -> Vec<String> {
        let bindings: Vec<String> = self.default.iter().cloned().chain(self.braced()).collect();
        if bindings.is_empty() {
            return vec![format!("import \"{}\";", self.from)];
        }
        let kw = if self.type_only { "import type" } else { "import" };
        vec![format!("{kw} {} from \"{}\";", bindings.join(", "), self.from)]
    }

    fn commonjs_lines(&self) -> Vec<String> {
        let require = format!("require(\"{}\")", self.from);
        match (&self.default, self.braced()) {
            (Some(def), None) => vec![format!("const {def} = {require};")],
            (Some(def), Some(named)) => vec![
                format!("const {def} = {require};"),
                format!("const {named} = {def};"),
            ],
            (None, Some(named)) => vec![format!("const {named} = {require};")],
            (None, None) => vec![format!("{require};")],
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let lines = match self.module_type {
            ModuleType::Module => self.esm_lines(),
            ModuleType::CommonJs => self.commonjs_lines(),
        };
        lines.into_iter().map(CodeFragment::Line).collect()
    }
}
