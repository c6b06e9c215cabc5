//! Target languages for code generation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// TypeScript (static type system)
    TypeScript,
    /// JavaScript (dynamic type system)
    #[default]
    JavaScript,
}

/// Whether generated code declares compile-time checked types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSystem {
    Static,
    Dynamic,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
        }
    }

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }

    pub fn type_system(&self) -> TypeSystem {
        match self {
            Language::TypeScript => TypeSystem::Static,
            Language::JavaScript => TypeSystem::Dynamic,
        }
    }

    pub fn is_typed(&self) -> bool {
        self.type_system() == TypeSystem::Static
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typescript" | "ts" => Ok(Language::TypeScript),
            "javascript" | "js" => Ok(Language::JavaScript),
            _ => Err(format!(
                "unknown language '{}', expected 'typescript' or 'javascript'",
                s
            )),
        }
    }
}

/// Module system used by generated JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum ModuleType {
    /// `require` / `module.exports`
    #[serde(rename = "commonjs")]
    CommonJs,
    /// `import` / `export`
    #[default]
    #[serde(rename = "module")]
    Module,
}

impl ModuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleType::CommonJs => "commonjs",
            ModuleType::Module => "module",
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "commonjs" | "cjs" => Ok(ModuleType::CommonJs),
            "module" | "esm" => Ok(ModuleType::Module),
            _ => Err(format!(
                "unknown module type '{}', expected 'commonjs' or 'module'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            Language::from_str("typescript").unwrap(),
            Language::TypeScript
        );
        assert_eq!(Language::from_str("TS").unwrap(), Language::TypeScript);
        assert_eq!(Language::from_str("js").unwrap(), Language::JavaScript);
        assert!(Language::from_str("python").is_err());

        assert_eq!(ModuleType::from_str("cjs").unwrap(), ModuleType::CommonJs);
        assert_eq!(ModuleType::from_str("module").unwrap(), ModuleType::Module);
        assert!(ModuleType::from_str("amd").is_err());
    }

    #[test]
    fn test_extension_and_type_system() {
        assert_eq!(Language::TypeScript.extension(), "ts");
        assert_eq!(Language::JavaScript.extension(), "js");
        assert!(Language::TypeScript.is_typed());
        assert_eq!(Language::JavaScript.type_system(), TypeSystem::Dynamic);
    }

    #[test]
    fn test_serde_names() {
        let ts: Language = serde_json::from_str(r#""typescript""#).unwrap();
        assert_eq!(ts, Language::TypeScript);
        let cjs: ModuleType = serde_json::from_str(r#""commonjs""#).unwrap();
        assert_eq!(cjs, ModuleType::CommonJs);
        assert_eq!(
            serde_json::to_string(&ModuleType::Module).unwrap(),
            r#""module""#
        );
    }
}
