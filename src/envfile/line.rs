//! Single-line classification for env files.
//!
//! A line is either an [`Assignment`] (`KEY=VALUE`, optionally followed by a
//! `# comment`) or anything else, which is passed through untouched. No quoting
//! rules are applied: the comment always starts at the first `#`.

use std::ops::Range;

/// Marks the start of a comment.
pub const COMMENT_START: char = '#';

/// Separates a key from its value.
pub const KV_SEPARATOR: char = '=';

/// A classified env file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvLine<'a> {
    /// A `KEY=VALUE` line.
    Assignment(Assignment<'a>),
    /// Blank lines, comment-only lines and anything malformed.
    Other(&'a str),
}

impl<'a> EnvLine<'a> {
    /// Classify a raw line.
    ///
    /// # Example
    ///
    /// ```
    /// use examplenv::envfile::EnvLine;
    ///
    /// let line = EnvLine::parse("API_KEY=abc123 # !SECRET");
    /// let EnvLine::Assignment(assignment) = line else { panic!("expected assignment") };
    /// assert_eq!(assignment.key(), "API_KEY");
    /// assert_eq!(assignment.value(), "abc123");
    /// assert_eq!(assignment.comment(), Some("# !SECRET"));
    ///
    /// assert!(matches!(EnvLine::parse("# just a comment"), EnvLine::Other(_)));
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        let comment_start = raw.find(COMMENT_START);
        let body = &raw[..comment_start.unwrap_or(raw.len())];

        let Some(eq_pos) = body.find(KV_SEPARATOR) else {
            return Self::Other(raw);
        };

        let key = body[..eq_pos].trim();
        if key.is_empty() {
            return Self::Other(raw);
        }

        let after_eq = &body[eq_pos + 1..];
        let leading = after_eq.len() - after_eq.trim_start().len();
        let start = eq_pos + 1 + leading;
        let end = start + after_eq.trim().len();

        Self::Assignment(Assignment {
            raw,
            key,
            value: start..end,
            comment: comment_start.map(|pos| &raw[pos..]),
        })
    }

    /// The line exactly as it was read.
    pub fn raw(&self) -> &'a str {
        match self {
            Self::Assignment(assignment) => assignment.raw,
            Self::Other(raw) => *raw,
        }
    }

    /// The comment portion of the line, starting at `#`.
    pub fn comment(&self) -> Option<&'a str> {
        match self {
            Self::Assignment(assignment) => assignment.comment,
            Self::Other(raw) => {
                let raw: &'a str = *raw;
                raw.find(COMMENT_START).map(|pos| &raw[pos..])
            }
        }
    }
}

/// A `KEY=VALUE` line with the byte span of its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<'a> {
    raw: &'a str,
    key: &'a str,
    value: Range<usize>,
    comment: Option<&'a str>,
}

impl<'a> Assignment<'a> {
    /// The key, with surrounding whitespace removed.
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// The value, with surrounding whitespace removed. May be empty.
    pub fn value(&self) -> &'a str {
        &self.raw[self.value.clone()]
    }

    /// The trailing comment, starting at `#`.
    pub fn comment(&self) -> Option<&'a str> {
        self.comment
    }

    /// Whether the line assigns a non-empty value.
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }

    /// Rebuild the line with the value replaced by `replacement`.
    ///
    /// Everything outside the value span is kept byte for byte.
    pub fn with_value(&self, replacement: &str) -> String {
        let mut line = String::with_capacity(self.raw.len() + replacement.len());
        line.push_str(&self.raw[..self.value.start]);
        line.push_str(replacement);
        line.push_str(&self.raw[self.value.end..]);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(raw: &str) -> Assignment<'_> {
        match EnvLine::parse(raw) {
            EnvLine::Assignment(assignment) => assignment,
            EnvLine::Other(_) => panic!("expected assignment for {raw:?}"),
        }
    }

    #[test]
    fn parses_simple_assignment() {
        let a = assignment("KEY=value");
        assert_eq!(a.key(), "KEY");
        assert_eq!(a.value(), "value");
        assert_eq!(a.comment(), None);
    }

    #[test]
    fn parses_assignment_with_comment() {
        let a = assignment("TOKEN=abc # !SECRET");
        assert_eq!(a.key(), "TOKEN");
        assert_eq!(a.value(), "abc");
        assert_eq!(a.comment(), Some("# !SECRET"));
    }

    #[test]
    fn handles_whitespace_around_equals() {
        let a = assignment("  KEY =  value with spaces  ");
        assert_eq!(a.key(), "KEY");
        assert_eq!(a.value(), "value with spaces");
    }

    #[test]
    fn handles_values_with_equals() {
        let a = assignment("URL=https://example.com?foo=bar");
        assert_eq!(a.value(), "https://example.com?foo=bar");
    }

    #[test]
    fn handles_empty_values() {
        let a = assignment("EMPTY=");
        assert_eq!(a.value(), "");
        assert!(!a.has_value());
    }

    #[test]
    fn blank_line_is_other() {
        assert_eq!(EnvLine::parse(""), EnvLine::Other(""));
        assert_eq!(EnvLine::parse("   "), EnvLine::Other("   "));
    }

    #[test]
    fn comment_line_is_other_even_with_equals() {
        let line = EnvLine::parse("# KEY=value");
        assert!(matches!(line, EnvLine::Other(_)));
        assert_eq!(line.comment(), Some("# KEY=value"));
    }

    #[test]
    fn line_without_equals_is_other() {
        assert!(matches!(
            EnvLine::parse("invalid line without equals"),
            EnvLine::Other(_)
        ));
    }

    #[test]
    fn empty_key_is_other() {
        assert!(matches!(EnvLine::parse("=value"), EnvLine::Other(_)));
        assert!(matches!(EnvLine::parse("  = value"), EnvLine::Other(_)));
    }

    #[test]
    fn with_value_preserves_surroundings() {
        let a = assignment("  KEY =  secret   # note");
        assert_eq!(a.with_value("<KEY>"), "  KEY =  <KEY>   # note");
    }

    #[test]
    fn with_value_on_bare_assignment() {
        assert_eq!(assignment("A=b").with_value("<A>"), "A=<A>");
    }

    #[test]
    fn raw_returns_original_text() {
        let raw = "KEY = value # c";
        assert_eq!(EnvLine::parse(raw).raw(), raw);
        assert_eq!(EnvLine::parse("# c").raw(), "# c");
    }
}
