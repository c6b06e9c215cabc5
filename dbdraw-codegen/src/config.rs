//! Generation configuration shared by every emitter.

use std::{fmt, path::PathBuf, str::FromStr};

use dbdraw_core::Language;
use indexmap::IndexSet;

/// Optional capability of a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// JWT bearer-token gate on every route
    Auth,
    /// OpenAPI docs served at `/api-docs`
    Swagger,
    /// Dockerfile and compose file
    Docker,
    /// Jest setup
    Tests,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Auth,
        Feature::Swagger,
        Feature::Docker,
        Feature::Tests,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Auth => "auth",
            Feature::Swagger => "swagger",
            Feature::Docker => "docker",
            Feature::Tests => "tests",
        }
    }

    /// Human readable label for prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Auth => "Authentication (JWT-based auth)",
            Feature::Swagger => "Swagger Documentation (API docs)",
            Feature::Docker => "Docker Setup (Containerization)",
            Feature::Tests => "Unit Tests (Jest testing setup)",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auth" => Ok(Feature::Auth),
            "swagger" => Ok(Feature::Swagger),
            "docker" => Ok(Feature::Docker),
            "tests" => Ok(Feature::Tests),
            _ => Err(format!(
                "unknown feature '{}', expected one of: auth, swagger, docker, tests",
                s
            )),
        }
    }
}

/// Set of enabled features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet(IndexSet<Feature>);

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, feature: Feature) -> Self {
        self.0.insert(feature);
        self
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<_> = self.0.iter().map(Feature::as_str).collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Immutable input of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub language: Language,
    pub features: FeatureSet,
    pub output_dir: PathBuf,
    pub project_name: String,
}

impl GenerationConfig {
    pub fn new(project_name: impl Into<String>, language: Language) -> Self {
        let project_name = project_name.into();
        Self {
            output_dir: PathBuf::from(&project_name),
            project_name,
            language,
            features: FeatureSet::new(),
        }
    }

    pub fn with_features(mut self, features: FeatureSet) -> Self {
        self.features = features;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.features.has(feature)
    }

    pub fn is_typed(&self) -> bool {
        self.language.is_typed()
    }

    /// Source file extension without the dot.
    pub fn ext(&self) -> &'static str {
        self.language.extension()
    }
}

/// Whether `name` is usable as a generated project name.
///
/// Lowercase ASCII letters, digits and hyphens only.
pub fn is_valid_project_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_from_str() {
        assert_eq!("auth".parse::<Feature>().unwrap(), Feature::Auth);
        assert_eq!("Swagger".parse::<Feature>().unwrap(), Feature::Swagger);
        assert!("metrics".parse::<Feature>().is_err());
    }

    #[test]
    fn test_feature_set() {
        let features: FeatureSet = [Feature::Docker, Feature::Auth, Feature::Docker]
            .into_iter()
            .collect();
        assert!(features.has(Feature::Auth));
        assert!(!features.has(Feature::Tests));
        assert_eq!(features.to_string(), "docker, auth");
        assert_eq!(FeatureSet::new().to_string(), "none");
    }

    #[test]
    fn test_config_defaults_output_dir_to_name() {
        let config = GenerationConfig::new("my-api", Language::TypeScript)
            .with_features(FeatureSet::new().with(Feature::Tests));
        assert_eq!(config.output_dir, PathBuf::from("my-api"));
        assert_eq!(config.ext(), "ts");
        assert!(config.has(Feature::Tests));
    }

    #[test]
    fn test_project_name_validation() {
        assert!(is_valid_project_name("my-api-2"));
        assert!(!is_valid_project_name(""));
        assert!(!is_valid_project_name("My_Api"));
        assert!(!is_valid_project_name("api/v1"));
    }
}
