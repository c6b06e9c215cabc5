//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes describe themselves as fragments; [`CodeBuilder`](super::CodeBuilder)
//! turns fragments into indented text.

/// A piece of generated code, before indentation is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line (newline appended)
    Line(String),
    /// An empty line, never indented
    Blank,
    /// A header line, an indented body and an optional closing line
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Fragments one level deeper
    Indent(Vec<CodeFragment>),
    /// `/** text */`
    JsDoc(String),
    /// A multi-line JSDoc comment, one entry per line
    JsDocBlock(Vec<String>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    pub fn jsdoc(s: impl Into<String>) -> Self {
        Self::JsDoc(s.into())
    }

    pub fn jsdoc_block<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::JsDocBlock(lines.into_iter().map(Into::into).collect())
    }

    /// One fragment per line of `text`; empty lines become [`CodeFragment::Blank`].
    pub fn lines(text: &str) -> Vec<Self> {
        text.lines()
            .map(|line| {
                if line.trim().is_empty() {
                    Self::Blank
                } else {
                    Self::line(line)
                }
            })
            .collect()
    }
}

/// Types that describe themselves as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
