//! Per-collection emitter contract.

use std::fmt;

use dbdraw_graph::Collection;

use crate::config::GenerationConfig;

/// A rendered source file, named relative to its target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub content: String,
}

impl Artifact {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Why a collection produced no artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing but the identity field is declared
    NoFields,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoFields => write!(f, "no fields besides _id"),
        }
    }
}

/// A collection that was skipped, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCollection {
    pub collection: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.collection, self.reason)
    }
}

/// Outcome of emitting one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    File(Artifact),
    Skipped(SkippedCollection),
}

impl Emission {
    pub fn skipped(collection: &Collection, reason: SkipReason) -> Self {
        tracing::info!(collection = %collection.name, %reason, "skipping collection");
        Emission::Skipped(SkippedCollection {
            collection: collection.name.clone(),
            reason,
        })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Emission::Skipped(_))
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        match self {
            Emission::File(artifact) => Some(artifact),
            Emission::Skipped(_) => None,
        }
    }

    pub fn into_artifact(self) -> Option<Artifact> {
        match self {
            Emission::File(artifact) => Some(artifact),
            Emission::Skipped(_) => None,
        }
    }
}

/// Renders one collection into one source artifact.
///
/// Emitters are pure: the same collection and config always give the same
/// text, and nothing is written to disk.
pub trait Emitter {
    fn emit(&self, collection: &Collection, config: &GenerationConfig) -> Emission;
}

#[cfg(test)]
mod tests {
    use dbdraw_core::Language;
    use dbdraw_graph::Field;

    use super::*;

    struct Names;

    impl Emitter for Names {
        fn emit(&self, collection: &Collection, _config: &GenerationConfig) -> Emission {
            if !collection.has_emittable_fields() {
                return Emission::skipped(collection, SkipReason::NoFields);
            }
            let names: Vec<_> = collection.emittable_fields().map(|f| f.name.as_str()).collect();
            Emission::File(Artifact::new("names.txt", names.join(",")))
        }
    }

    #[test]
    fn test_emission_helpers() {
        let config = GenerationConfig::new("demo", Language::JavaScript);

        let user = Collection::new("User")
            .field(Field::new("_id", "primary"))
            .field(Field::new("email", "string"));
        let emission = Names.emit(&user, &config);
        assert!(!emission.is_skipped());
        assert_eq!(emission.artifact().unwrap().content, "email");

        let empty = Collection::new("Empty").field(Field::new("_id", "primary"));
        let emission = Names.emit(&empty, &config);
        assert!(emission.is_skipped());
        assert!(emission.artifact().is_none());
        match emission {
            Emission::Skipped(skipped) => {
                assert_eq!(skipped.to_string(), "Empty (no fields besides _id)")
            }
            Emission::File(_) => panic!("expected skip"),
        }
    }
}
