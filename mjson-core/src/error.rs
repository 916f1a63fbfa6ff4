//! Parse failures.
//!
//! Every malformed input produces the same error type, [`FormatError`].
//! The attached [`ParseErrorCode`] and byte offset are diagnostics only:
//! callers that just need to know parsing failed can ignore them.

/// Why the input was rejected.
///
/// A fieldless enum keeps `FormatError` `Copy` and allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ParseErrorCode {
    /// Expected `{` (includes empty and whitespace-only input)
    ExpectedObject = 0,
    /// Expected `"` to start a member key
    ExpectedString,
    /// Expected `:` after a member key
    ExpectedColon,
    /// Expected `"` or `{` to start a member value
    ExpectedValue,
    /// Expected `,` or `}` after a member value
    ExpectedCommaOrClose,
    /// End of input inside a string literal
    UnclosedString,
    /// Backslash followed by an unsupported character
    InvalidEscape,
    /// Non-whitespace content after the top-level object
    TrailingContent,
    /// Object nesting deeper than the configured limit
    DepthLimit,
}

impl ParseErrorCode {
    /// Get a human-readable message for this error code.
    pub fn message(self) -> &'static str {
        match self {
            Self::ExpectedObject => "expected '{'",
            Self::ExpectedString => "expected string",
            Self::ExpectedColon => "expected ':'",
            Self::ExpectedValue => "expected string or object value",
            Self::ExpectedCommaOrClose => "expected ',' or '}'",
            Self::UnclosedString => "unclosed string",
            Self::InvalidEscape => "invalid escape sequence",
            Self::TrailingContent => "unexpected content after object",
            Self::DepthLimit => "nesting depth limit exceeded",
        }
    }
}

/// Error returned when the input is not exactly one well-formed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatError {
    pub code: ParseErrorCode,
    /// Byte offset into the input where the problem was detected.
    pub offset: usize,
}

impl FormatError {
    pub fn new(code: ParseErrorCode, offset: usize) -> Self {
        FormatError { code, offset }
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at byte {}", self.code.message(), self.offset)
    }
}

impl std::error::Error for FormatError {}
