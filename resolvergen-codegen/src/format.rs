//! Formatting pass over generated code.
//!
//! Formatting is best-effort: a failure never aborts generation. The raw
//! text is returned together with the error inside [`FormatOutcome`].

use thiserror::Error;

/// Error raised by a code formatter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Closing bracket without a matching opener.
    #[error("unbalanced '{bracket}' on line {line}")]
    Unbalanced {
        /// Offending bracket.
        bracket: char,
        /// One-based line number.
        line: usize,
    },

    /// Brackets left open at end of input.
    #[error("{open} unclosed bracket(s) at end of input")]
    Unclosed {
        /// Number of brackets still open.
        open: usize,
    },

    /// String literal not closed on its line.
    #[error("unterminated string literal on line {line}")]
    UnterminatedString {
        /// One-based line number.
        line: usize,
    },
}

/// Formats generated source text.
pub trait CodeFormatter {
    /// Formats `code`, or reports why it cannot be formatted.
    ///
    /// # Errors
    /// Returns `FormatError` if the code is not syntactically well formed.
    fn format(&self, code: &str) -> Result<String, FormatError>;
}

/// Result of the formatting pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Formatting succeeded.
    Formatted(String),
    /// Formatting failed; the raw text is returned.
    Unformatted {
        /// Raw generated text.
        code: String,
        /// Formatter error.
        error: FormatError,
    },
    /// Formatting was not requested.
    Skipped(String),
}

impl FormatOutcome {
    /// Returns the generated text.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Formatted(code) | Self::Skipped(code) | Self::Unformatted { code, .. } => code,
        }
    }

    /// Consumes the outcome, returning the generated text.
    #[must_use]
    pub fn into_code(self) -> String {
        match self {
            Self::Formatted(code) | Self::Skipped(code) | Self::Unformatted { code, .. } => code,
        }
    }

    /// Returns true if formatting was attempted and failed.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Unformatted { .. })
    }

    /// Returns the formatter error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&FormatError> {
        match self {
            Self::Unformatted { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Runs a formatter over generated code, falling back to the raw text.
#[must_use]
pub fn format_output(code: String, formatter: &dyn CodeFormatter) -> FormatOutcome {
    match formatter.format(&code) {
        Ok(formatted) => FormatOutcome::Formatted(formatted),
        Err(error) => {
            tracing::warn!(%error, "syntax error in generated code, returning unformatted output");
            FormatOutcome::Unformatted { code, error }
        }
    }
}

/// Re-indents code by bracket depth.
///
/// Lines are trimmed, runs of blank lines collapse to one, and blank lines
/// directly inside an opening or before a closing bracket are dropped.
/// Quoted text and `//` comments are ignored when counting brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentFormatter {
    indent_width: usize,
}

impl IndentFormatter {
    /// Creates a formatter with the given indentation width.
    #[must_use]
    pub const fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }
}

impl Default for IndentFormatter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl CodeFormatter for IndentFormatter {
    fn format(&self, code: &str) -> Result<String, FormatError> {
        let mut output = String::with_capacity(code.len());
        let mut stack: Vec<char> = Vec::new();
        let mut pending_blank = false;
        let mut after_opener = true;

        for (idx, raw) in code.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                pending_blank = !after_opener;
                continue;
            }

            let leading_closers = line.chars().take_while(|c| is_closer(*c)).count();
            let indent = stack.len().saturating_sub(leading_closers);
            scan_brackets(line, idx + 1, &mut stack)?;

            if pending_blank && leading_closers == 0 {
                output.push('\n');
            }
            pending_blank = false;

            output.extend(std::iter::repeat_n(' ', indent * self.indent_width));
            output.push_str(line);
            output.push('\n');
            after_opener = line.ends_with(['{', '(', '[']);
        }

        if !stack.is_empty() {
            return Err(FormatError::Unclosed { open: stack.len() });
        }

        Ok(output)
    }
}

const fn is_closer(c: char) -> bool {
    matches!(c, '}' | ')' | ']')
}

const fn opener_for(closer: char) -> char {
    match closer {
        '}' => '{',
        ')' => '(',
        _ => '[',
    }
}

/// Updates the open-bracket stack with the brackets on one line.
fn scan_brackets(line: &str, line_no: usize, stack: &mut Vec<char>) -> Result<(), FormatError> {
    let mut quote: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            if c == '\\' {
                chars.next();
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '/' if chars.peek() == Some(&'/') => break,
            '{' | '(' | '[' => stack.push(c),
            '}' | ')' | ']' => {
                if stack.pop() != Some(opener_for(c)) {
                    return Err(FormatError::Unbalanced {
                        bracket: c,
                        line: line_no,
                    });
                }
            }
            _ => {}
        }
    }

    if quote.is_some() {
        return Err(FormatError::UnterminatedString { line: line_no });
    }

    Ok(())
}
