//! src/config/db generator.

use std::path::{Path, PathBuf};

use dbdraw_codegen::builder::CodeBuilder;
use dbdraw_core::{GeneratedFile, Language};

use crate::{
    ast::{ArrowFn, Import},
    code_file::CodeFile,
};

/// `connectDB`, called once from the entry point.
pub struct DbConfig {
    language: Language,
}

impl DbConfig {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl GeneratedFile for DbConfig {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src")
            .join("config")
            .join(format!("db.{}", self.language.extension()))
    }

    fn render(&self) -> String {
        let typed = self.language.is_typed();
        let uri = if typed {
            "process.env.MONGODB_URI as string"
        } else {
            "process.env.MONGODB_URI"
        };
        let catch = if typed {
            "} catch (error: any) {"
        } else {
            "} catch (error) {"
        };

        let body = CodeBuilder::js()
            .line("try {")
            .indent()
            .line(&format!("const conn = await mongoose.connect({});", uri))
            .line("console.log(`MongoDB connected: ${conn.connection.host}`);")
            .dedent()
            .line(catch)
            .indent()
            .line("console.error(`MongoDB connection failed: ${error.message}`);")
            .line("process.exit(1);")
            .dedent()
            .line("}")
            .build();

        CodeFile::new()
            .import(Import::new("mongoose").default("mongoose"))
            .add(
                ArrowFn::new("connectDB")
                    .doc("Exits the process when MONGODB_URI is unreachable")
                    .async_()
                    .body(&body),
            )
            .render()
    }
}
