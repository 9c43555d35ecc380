//! Include directive detection
//!
//! Decides from the text left of the cursor whether the cursor sits inside
//! an unterminated `#include <...` or `#include "...` target.

use regex::Regex;

/// Delimiter that opened the include target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeDelimiter {
    /// `#include <name>`
    Angle,
    /// `#include "name"`
    Quote,
}

impl IncludeDelimiter {
    /// Character that closes the include target
    pub fn closing(self) -> char {
        match self {
            Self::Angle => '>',
            Self::Quote => '"',
        }
    }
}

/// An open include target found left of the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeContext {
    pub delimiter: IncludeDelimiter,
    /// Text typed after the delimiter so far
    pub partial: String,
}

/// Regex-based include directive matcher
#[derive(Debug, Clone)]
pub struct IncludeDirectiveMatcher {
    include_regex: Regex,
}

impl IncludeDirectiveMatcher {
    /// Create a matcher with its compiled pattern
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            // `  #  include <std`  or  `#include "my`
            include_regex: Regex::new(r#"^\s*#\s*include\s*(<[^>]*|"[^"]*)$"#)?,
        })
    }

    /// Match the text of the current line up to the cursor
    ///
    /// Returns `None` when the cursor is not inside an open include target,
    /// including when the target has already been closed.
    pub fn match_line(&self, text_up_to_cursor: &str) -> Option<IncludeContext> {
        let captures = self.include_regex.captures(text_up_to_cursor)?;
        let target = captures.get(1)?.as_str();

        let delimiter = if target.starts_with('<') {
            IncludeDelimiter::Angle
        } else {
            IncludeDelimiter::Quote
        };

        Some(IncludeContext {
            delimiter,
            partial: target[1..].to_string(),
        })
    }

    pub fn is_inside_include(&self, text_up_to_cursor: &str) -> bool {
        self.include_regex.is_match(text_up_to_cursor)
    }
}

impl Default for IncludeDirectiveMatcher {
    fn default() -> Self {
        Self::new().expect("Failed to compile include directive pattern")
    }
}

/// Truncate `line` at a 0-based character column
///
/// Columns past the end of the line select the whole line.
pub fn line_prefix(line: &str, column: usize) -> &str {
    match line.char_indices().nth(column) {
        Some((byte_offset, _)) => &line[..byte_offset],
        None => line,
    }
}

/// Truncate `line` at a 0-based column counted in UTF-16 code units
///
/// This is the default LSP position encoding. A column that falls inside a
/// surrogate pair cuts before that character; columns past the end select
/// the whole line.
pub fn utf16_line_prefix(line: &str, column: usize) -> &str {
    let mut units = 0;
    for (byte_offset, ch) in line.char_indices() {
        units += ch.len_utf16();
        if units > column {
            return &line[..byte_offset];
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> IncludeDirectiveMatcher {
        IncludeDirectiveMatcher::default()
    }

    #[test]
    fn test_open_angle_include_matches() {
        let context = matcher().match_line("#include <io").unwrap();
        assert_eq!(context.delimiter, IncludeDelimiter::Angle);
        assert_eq!(context.partial, "io");
        assert_eq!(context.delimiter.closing(), '>');
    }

    #[test]
    fn test_open_quote_include_matches() {
        let context = matcher().match_line("#include \"foo").unwrap();
        assert_eq!(context.delimiter, IncludeDelimiter::Quote);
        assert_eq!(context.partial, "foo");
        assert_eq!(context.delimiter.closing(), '"');
    }

    #[test]
    fn test_closed_include_does_not_match() {
        assert_eq!(matcher().match_line("#include <stdio.h>"), None);
        assert_eq!(matcher().match_line("#include \"foo.h\""), None);
        assert_eq!(matcher().match_line("#include <stdio.h> // <x"), None);
    }

    #[test]
    fn test_non_include_lines_do_not_match() {
        let m = matcher();
        assert!(!m.is_inside_include("int x = 1;"));
        assert!(!m.is_inside_include("#define FOO <"));
        assert!(!m.is_inside_include("#include"));
        assert!(!m.is_inside_include("#include stdio"));
        assert!(!m.is_inside_include("x #include <a"));
        assert!(!m.is_inside_include("// #include <a"));
        assert!(!m.is_inside_include(""));
    }

    #[test]
    fn test_whitespace_tolerance() {
        let context = matcher().match_line("  #  include   \"").unwrap();
        assert_eq!(context.delimiter, IncludeDelimiter::Quote);
        assert_eq!(context.partial, "");

        assert!(matcher().is_inside_include("\t#include<"));
        assert!(matcher().is_inside_include("#include <sys/ty"));
    }

    #[test]
    fn test_line_prefix() {
        assert_eq!(line_prefix("#include <a.h>", 10), "#include <");
        assert_eq!(line_prefix("#include <a.h>", 0), "");
        assert_eq!(line_prefix("#include <a.h>", 99), "#include <a.h>");
        assert_eq!(line_prefix("#include <ü.h>", 11), "#include <ü");
    }

    #[test]
    fn test_utf16_line_prefix() {
        // U+1F600 takes two UTF-16 code units
        let line = "#include \"\u{1F600}.h\"";
        assert_eq!(utf16_line_prefix(line, 10), "#include \"");
        assert_eq!(utf16_line_prefix(line, 11), "#include \"");
        assert_eq!(utf16_line_prefix(line, 12), "#include \"\u{1F600}");
        assert_eq!(utf16_line_prefix(line, 13), "#include \"\u{1F600}.");
        assert_eq!(utf16_line_prefix(line, 99), line);
        assert_eq!(utf16_line_prefix("#include <a.h>", 10), "#include <");
    }

    #[test]
    fn test_cursor_inside_closed_include_matches() {
        let line = "#include <stdio.h>";
        assert!(!matcher().is_inside_include(line));
        assert!(matcher().is_inside_include(line_prefix(line, 12)));
    }
}
