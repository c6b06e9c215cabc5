//! Jest configuration and starter tests.

use std::path::{Path, PathBuf};

use dbdraw_core::{GeneratedFile, Language};

use crate::{
    ast::{Export, Import},
    code_file::{CodeFile, RawCode},
};

/// jest.config.js, an ES module like the rest of the project.
pub struct JestConfig {
    language: Language,
}

impl JestConfig {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl GeneratedFile for JestConfig {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("jest.config.js")
    }

    fn render(&self) -> String {
        let config = match self.language {
            Language::TypeScript => r#"const config = {
  preset: "ts-jest/presets/default-esm",
  testEnvironment: "node",
  extensionsToTreatAsEsm: [".ts"],
  moduleNameMapper: {
    "^(\\.{1,2}/.*)\\.js$": "$1",
  },
  transform: {
    "^.+\\.ts$": ["ts-jest", { useESM: true }],
  },
  testMatch: ["**/tests/**/*.test.ts"],
};"#,
            Language::JavaScript => r#"const config = {
  testEnvironment: "node",
  transform: {},
  testMatch: ["**/tests/**/*.test.js"],
};"#,
        };

        CodeFile::new()
            .add(RawCode::new(config))
            .export(Export::new().default("config"))
            .render()
    }
}

/// Smoke test hitting the app through supertest.
pub struct AppTest {
    language: Language,
}

impl AppTest {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl GeneratedFile for AppTest {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tests")
            .join("integration")
            .join(format!("app.test.{}", self.language.extension()))
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(Import::new("supertest").default("request"))
            .import(Import::new("../../src/app.js").default("app"))
            .add(RawCode::new(
                r#"describe("app", () => {
  it("responds with 404 for unknown routes", async () => {
    const res = await request(app).get("/api/__missing__");
    expect(res.status).toBe(404);
  });
});"#,
            ))
            .render()
    }
}

/// Keeps the otherwise empty `tests/unit` directory in version control.
pub struct UnitTestsDir;

impl GeneratedFile for UnitTestsDir {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tests").join("unit").join(".gitkeep")
    }

    fn render(&self) -> String {
        String::new()
    }
}
