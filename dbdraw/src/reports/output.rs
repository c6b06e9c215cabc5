//! Where reports go.

use std::fmt;

/// One rendered line of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Section(&'a str),
    KeyValue(&'a str, &'a str),
    Item(&'a str),
    /// A file that was written
    Added(&'a str),
    Warning(&'a str),
    Success(&'a str),
    Divider(&'a str),
    Text(&'a str),
    Blank,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Section(name) => write!(f, "{name}:"),
            Line::KeyValue(key, value) => write!(f, "{key}: {value}"),
            Line::Item(text) => write!(f, "  - {text}"),
            Line::Added(text) => write!(f, "  + {text}"),
            Line::Warning(msg) => write!(f, "warning: {msg}"),
            Line::Success(msg) => write!(f, "✓ {msg}"),
            Line::Divider(label) => write!(f, "── {label} ──"),
            Line::Text(text) => f.write_str(text),
            Line::Blank => Ok(()),
        }
    }
}

/// Sink for report lines.
///
/// Reports say what to show through the helper methods; sinks only
/// decide where each [`Line`] ends up.
pub trait Output {
    fn line(&mut self, line: Line<'_>);

    fn section(&mut self, name: &str) {
        self.line(Line::Section(name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(Line::KeyValue(key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.line(Line::Item(text));
    }

    fn added_item(&mut self, text: &str) {
        self.line(Line::Added(text));
    }

    fn warning(&mut self, msg: &str) {
        self.line(Line::Warning(msg));
    }

    fn success(&mut self, msg: &str) {
        self.line(Line::Success(msg));
    }

    fn divider(&mut self, label: &str) {
        self.line(Line::Divider(label));
    }

    fn preformatted(&mut self, text: &str) {
        self.line(Line::Text(text));
    }

    fn newline(&mut self) {
        self.line(Line::Blank);
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to stdout, warnings to stderr.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, line: Line<'_>) {
        match line {
            Line::Warning(_) => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }
}

/// Captures rendered lines for assertions.
#[cfg(test)]
#[derive(Default)]
pub struct RecordedOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl RecordedOutput {
    pub fn render(report: &dyn Report) -> Vec<String> {
        let mut out = Self::default();
        report.render(&mut out);
        out.lines
    }
}

#[cfg(test)]
impl Output for RecordedOutput {
    fn line(&mut self, line: Line<'_>) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_formats() {
        assert_eq!(Line::KeyValue("Language", "TypeScript").to_string(), "Language: TypeScript");
        assert_eq!(Line::Added("src/app.ts").to_string(), "  + src/app.ts");
        assert_eq!(Line::Divider("Summary").to_string(), "── Summary ──");
        assert_eq!(Line::Blank.to_string(), "");
    }
}
