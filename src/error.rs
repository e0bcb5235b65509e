use std::fmt;
use thiserror::Error;

#[derive(Debug)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// The offset in `code` where parsing stopped
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Line number and byte offset within that line
    ///
    /// Byte offset rather than column: columns depend on encoding width and
    /// tab rendering, a byte offset does not.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, byte) in self.code.bytes().enumerate() {
            if i >= self.loc {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            byte_offset: self.loc.saturating_sub(line_start),
        }
    }

    /// Up to 2 lines before and after the error line, with a pointer
    fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        // split('\n') yields a trailing empty line for input ending in a
        // newline, which is where an offset at end of input points.
        for (i, content) in self.code.split('\n').enumerate() {
            let number = i + 1;
            if number < first || number > last {
                continue;
            }
            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        writeln!(
            f,
            "line {}, byte offset {} (absolute position: {})",
            pos.line, pos.byte_offset, self.loc
        )?;
        writeln!(f)?;
        for line in self.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// A finished parse that ended in failure
#[derive(Debug, Error)]
pub enum ParseError<'code> {
    #[error("Parse error at {loc}{message}")]
    Failed {
        message: String,
        /// Every message recorded along the failing thread, oldest first
        chain: Vec<String>,
        loc: CodeLoc<'code>,
    },
}

impl<'code> ParseError<'code> {
    pub fn message(&self) -> &str {
        match self {
            ParseError::Failed { message, .. } => message,
        }
    }

    pub fn chain(&self) -> &[String] {
        match self {
            ParseError::Failed { chain, .. } => chain,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            ParseError::Failed { loc, .. } => loc.position(),
        }
    }
}

/// A regular expression given to a pattern matcher did not compile
#[derive(Debug, Error)]
#[error("invalid pattern `{pattern}`: {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readable_position_first_line() {
        let loc = CodeLoc::new("let x = 1", 4);
        let pos = loc.readable_position();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.byte_offset, 4);
    }

    #[test]
    fn test_readable_position_past_end() {
        let loc = CodeLoc::new("line1\nline2", 11);
        let pos = loc.readable_position();
        assert_eq!(pos.line, 2);
        assert_eq!(pos.byte_offset, 5);
    }

    #[test]
    fn test_context_lines_point_at_offset() {
        let loc = CodeLoc::new("a\nbc\nd", 3);
        let context = loc.context_lines().join("\n");
        assert!(context.contains("  > 2 | bc"));
        assert!(context.contains("    1 | a"));
        assert!(context.contains("^--- here"));
    }

    #[test]
    fn test_context_lines_after_trailing_newline() {
        let loc = CodeLoc::new("hello\n", 6);
        let display = loc.to_string();
        assert!(display.contains("line 2, byte offset 0"));
    }

    #[test]
    fn test_context_lines_empty_input() {
        let loc = CodeLoc::new("", 0);
        let display = loc.to_string();
        assert!(display.contains("line 1, byte offset 0"));
    }

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::Failed {
            message: "expected \"=\" at index 6".to_string(),
            chain: vec!["expected \"=\" at index 6".to_string()],
            loc: CodeLoc::new("let x ; 1", 6),
        };
        let display = error.to_string();
        assert!(display.starts_with("Parse error at line 1, byte offset 6"));
        assert!(display.contains("expected \"=\""));
        assert_eq!(error.chain().len(), 1);
        assert_eq!(error.position(), 6);
    }

    #[test]
    fn test_pattern_error_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = PatternError {
            pattern: "(".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("invalid pattern `(`"));
    }
}
