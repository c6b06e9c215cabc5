//! src/middleware/error generator.

use std::path::{Path, PathBuf};

use dbdraw_core::{GeneratedFile, Language};

use crate::{
    ast::{ArrowFn, Import, Param},
    code_file::CodeFile,
};

/// Last-resort Express error middleware.
pub struct ErrorMiddleware {
    language: Language,
}

impl ErrorMiddleware {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl GeneratedFile for ErrorMiddleware {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src")
            .join("middleware")
            .join(format!("error.{}", self.language.extension()))
    }

    fn render(&self) -> String {
        let typed = self.language.is_typed();

        CodeFile::new()
            .import_if(typed, || {
                Import::new("express").named_all(["NextFunction", "Request", "Response"])
            })
            .add(
                ArrowFn::new("errorHandler")
                    .doc("Express only treats four-argument middleware as an error handler")
                    .param(Param::new("err").ty_if(typed, "any"))
                    .param(Param::new("req").ty_if(typed, "Request"))
                    .param(Param::new("res").ty_if(typed, "Response"))
                    .param(Param::new("next").ty_if(typed, "NextFunction"))
                    .body(
                        r#"console.error(err.stack);
res.status(err.statusCode || 500).json({ success: false, error: err.message || "Server Error" });"#,
                    ),
            )
            .render()
    }
}
