//! Indentation-aware text builder.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building indented JavaScript/TypeScript.
///
/// Consuming methods (returning `Self`) chain hand-written lines;
/// [`CodeBuilder::emit`] and [`CodeBuilder::write`] lay out AST nodes
/// and fragments in place.
///
/// # Example
///
/// ```
/// use dbdraw_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::js()
///     .line("router.route(\"/\")")
///     .indent()
///     .line(".get(getAllUsers);")
///     .dedent()
///     .build();
///
/// assert_eq!(code, "router.route(\"/\")\n  .get(getAllUsers);\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            out: String::new(),
        }
    }

    /// A builder with 2-space indentation.
    pub fn js() -> Self {
        Self::new(Indent::JS)
    }

    /// Lay out a fragment at the current level.
    pub fn write(&mut self, fragment: &CodeFragment) -> &mut Self {
        match fragment {
            CodeFragment::Line(s) => self.push_line(s),
            CodeFragment::Blank => self.out.push('\n'),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(header);
                self.nested(body);
                if let Some(close) = close {
                    self.push_line(close);
                }
            }
            CodeFragment::Indent(body) => self.nested(body),
            CodeFragment::JsDoc(text) => self.push_line(&format!("/** {text} */")),
            CodeFragment::JsDocBlock(lines) => self.push_jsdoc_block(lines),
        }
        self
    }

    /// Lay out every fragment of a node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.write(&fragment);
        }
        self
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// An empty line, without indentation.
    pub fn blank(mut self) -> Self {
        self.out.push('\n');
        self
    }

    pub fn indent(mut self) -> Self {
        self.level += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// A header line, an indented body and a closing line.
    ///
    /// ```
    /// use dbdraw_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::js()
    ///     .block_with_close("try {", "}", |b| b.line("next();"))
    ///     .build();
    ///
    /// assert_eq!(code, "try {\n  next();\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        f(self.line(header).indent()).dedent().line(close)
    }

    /// `// text`
    pub fn comment(self, text: &str) -> Self {
        self.line(&format!("// {text}"))
    }

    pub fn jsdoc_block<S: AsRef<str>>(mut self, lines: &[S]) -> Self {
        self.push_jsdoc_block(lines);
        self
    }

    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    pub fn node(mut self, node: &impl Renderable) -> Self {
        self.emit(node);
        self
    }

    pub fn build(self) -> String {
        self.out
    }

    fn push_line(&mut self, s: &str) {
        self.out.push_str(&self.indent.at(self.level));
        self.out.push_str(s);
        self.out.push('\n');
    }

    fn push_jsdoc_block<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.push_line("/**");
        for line in lines {
            match line.as_ref() {
                "" => self.push_line(" *"),
                text => self.push_line(&format!(" * {text}")),
            }
        }
        self.push_line(" */");
    }

    fn nested(&mut self, body: &[CodeFragment]) {
        self.level += 1;
        for fragment in body {
            self.write(fragment);
        }
        self.level = self.level.saturating_sub(1);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::js()
    }
}
