//! tsconfig.json generator for TypeScript projects.

use std::path::{Path, PathBuf};

use dbdraw_core::GeneratedFile;

/// The tsconfig.json of a TypeScript project.
///
/// NodeNext resolution lets sources import `./x.js` for `x.ts`.
pub struct TsConfig;

impl GeneratedFile for TsConfig {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tsconfig.json")
    }

    fn render(&self) -> String {
        r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "NodeNext",
    "moduleResolution": "NodeNext",
    "outDir": "dist",
    "rootDir": "src",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true,
    "resolveJsonModule": true
  },
  "include": ["src/**/*.ts"],
  "exclude": ["node_modules", "dist", "tests"]
}
"#
        .to_string()
    }
}
