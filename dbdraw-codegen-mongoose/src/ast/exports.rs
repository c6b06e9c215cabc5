//! Export builder.

use dbdraw_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for export statements.
#[derive(Debug, Clone)]
pub struct Export {
    default: Option<String>,
    named: Vec<String>,
    module_exports: Option<String>,
}

impl Export {
    pub fn new() -> Self {
        Self {
            default: None,
            named: Vec::new(),
            module_exports: None,
        }
    }

    /// Export as default (`export default foo;`).
    pub fn default(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(expr.into());
        self
    }

    /// Export a named item (`export { foo };`).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// CommonJS export (`module.exports = foo;`).
    pub fn module_exports(mut self, expr: impl Into<String>) -> Self {
        self.module_exports = Some(expr.into());
        self
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Default for Export {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut lines = Vec::new();
        if !self.named.is_empty() {
            lines.push(CodeFragment::line(format!(
                "export {{ {} }};",
                self.named.join(", ")
            )));
        }
        if let Some(def) = &self.default {
            lines.push(CodeFragment::line(format!("export default {};", def)));
        }
        if let Some(expr) = &self.module_exports {
            lines.push(CodeFragment::line(format!("module.exports = {};", expr)));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_default() {
        let e = Export::new().default("router").build();
        assert_eq!(e, "export default router;\n");
    }

    #[test]
    fn test_export_named() {
        let e = Export::new().named("connectDB").named("disconnectDB").build();
        assert_eq!(e, "export { connectDB, disconnectDB };\n");
    }

    #[test]
    fn test_module_exports() {
        let e = Export::new()
            .module_exports("mongoose.model(\"user\", UserSchema)")
            .build();
        assert_eq!(e, "module.exports = mongoose.model(\"user\", UserSchema);\n");
    }

    #[test]
    fn test_empty_export_renders_nothing() {
        assert_eq!(Export::new().build(), "");
    }
}
