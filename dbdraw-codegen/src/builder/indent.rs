//! Indentation unit for generated sources.

/// The text of one indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Two spaces, used by every generated JavaScript/TypeScript file.
    pub const JS: Self = Self("  ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Leading whitespace for `level` nested levels.
    pub fn at(&self, level: usize) -> String {
        self.0.repeat(level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(Indent::JS.at(0), "");
        assert_eq!(Indent::JS.at(3), "      ");
        assert_eq!(Indent::default().as_str(), "  ");
    }
}
