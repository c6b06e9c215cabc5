use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for graph and link operations.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Raw JSON and its display name, kept for diagnostics.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Wraps a graph decoding error, pointing at its location.
    pub fn conversion_error(&self, source: serde_json::Error) -> Box<Error> {
        Box::new(Error::SchemaConversion {
            src: self.named_source(),
            span: self.span_of(&source),
            message: source.to_string(),
        })
    }

    /// Wraps a link decoding error, pointing at its location.
    pub fn link_error(&self, source: serde_json::Error) -> Box<Error> {
        Box::new(Error::InvalidLink {
            src: self.named_source(),
            span: self.span_of(&source),
            message: source.to_string(),
        })
    }

    pub fn invalid_link(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::InvalidLink {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Translate serde_json's 1-based line/column into a byte span.
    fn span_of(&self, err: &serde_json::Error) -> Option<SourceSpan> {
        if err.line() == 0 {
            return None;
        }
        let line_start: usize = self
            .src
            .split_inclusive('\n')
            .take(err.line() - 1)
            .map(str::len)
            .sum();
        let offset = (line_start + err.column().saturating_sub(1)).min(self.src.len());
        Some(SourceSpan::from((offset, 0)))
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(dbdraw::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(dbdraw::io))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to convert schema graph")]
    #[diagnostic(
        code(dbdraw::schema_conversion),
        help(
            "the graph needs `nodes` and `edges`; every node needs an `id` and `data.label`/`data.fields`"
        )
    )]
    SchemaConversion {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid project link: {message}")]
    #[diagnostic(
        code(dbdraw::invalid_link),
        help("run 'dbdraw link' to link your project again")
    )]
    InvalidLink {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("no project link found at '{path}'")]
    #[diagnostic(
        code(dbdraw::not_linked),
        help("run 'dbdraw link' to link your project")
    )]
    NotLinked { path: PathBuf },
}

impl Error {
    /// Whether this error came from a malformed schema graph.
    pub fn is_schema_conversion(&self) -> bool {
        matches!(self, Error::SchemaConversion { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_points_at_error_location() {
        let first_line = SourceContext::new("x", "graph.json");
        let err = serde_json::from_str::<serde_json::Value>("x").unwrap_err();
        assert_eq!(first_line.span_of(&err).unwrap().offset(), 0);

        let src = "{\n  \"a\": }";
        let second_line = SourceContext::new(src, "graph.json");
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let offset = second_line.span_of(&err).unwrap().offset();
        assert!(offset >= 2 && offset <= src.len(), "offset {offset}");
    }

    #[test]
    fn test_conversion_error_kind() {
        let ctx = SourceContext::new("[]", "graph.json");
        let err = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>("[]")
            .unwrap_err();
        assert!(ctx.conversion_error(err).is_schema_conversion());
    }
}
