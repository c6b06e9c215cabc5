//! src/index entry point generator.

use std::path::{Path, PathBuf};

use dbdraw_codegen::builder::CodeBuilder;
use dbdraw_core::{GeneratedFile, Language};

use crate::{
    ast::{Const, Import},
    code_file::{CodeFile, RawCode},
};

/// Loads `.env`, connects to MongoDB and starts listening.
pub struct IndexFile {
    language: Language,
}

impl IndexFile {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl GeneratedFile for IndexFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src")
            .join(format!("index.{}", self.language.extension()))
    }

    fn render(&self) -> String {
        let err = if self.language.is_typed() {
            "err: any"
        } else {
            "err"
        };

        let listen = CodeBuilder::js()
            .block_with_close("const server = app.listen(PORT, () => {", "});", |b| {
                b.line("console.log(`Server running in ${process.env.NODE_ENV} mode on port ${PORT}`);")
            })
            .blank()
            .block_with_close(
                &format!("process.on(\"unhandledRejection\", ({}) => {{", err),
                "});",
                |b| {
                    b.line("console.error(`Unhandled rejection: ${err.message}`);")
                        .line("server.close(() => process.exit(1));")
                },
            )
            .build();

        // dotenv/config must be evaluated before any module reads process.env
        CodeFile::new()
            .import(Import::new("dotenv/config"))
            .import(Import::new("./app.js").default("app"))
            .import(Import::new("./config/db.js").named("connectDB"))
            .add(Const::new("PORT", "process.env.PORT || 5000"))
            .add(RawCode::new("connectDB();"))
            .add(RawCode::new(listen))
            .render()
    }
}
