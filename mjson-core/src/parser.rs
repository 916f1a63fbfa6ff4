//! Object parser.
//!
//! Grammar accepted (whitespace is tab, newline or space):
//!
//! ```text
//! object   := '{' ws ( member (',' ws member)* )? '}' ws
//! member   := string ws ':' ws value
//! value    := string | object
//! string   := '"' char* '"'
//! char     := escape | any character except '"' and '\'
//! escape   := '\' ( '\' | '"' | 'n' | 't' | newline | tab )
//! ```
//!
//! Whitespace is consumed after every token, never before, so each
//! sub-parse starts with the cursor on a significant byte. The only
//! exception is leading whitespace before the top-level object.
//!
//! Objects are walked iteratively with a stack of open parents; strings
//! are scanned by a separate routine.

use memchr::memchr2;
use phf::phf_map;

use crate::cursor::Cursor;
use crate::document::{Document, JsonObject};
use crate::error::{FormatError, ParseErrorCode};
use crate::options::ParseOptions;

/// Characters allowed after a backslash, and what they decode to.
///
/// Both the letter forms (`\n`, `\t`) and a backslash followed by a literal
/// newline or tab are accepted.
static ESCAPES: phf::Map<u8, char> = phf_map! {
    b'\\' => '\\',
    b'"' => '"',
    b'n' => '\n',
    b't' => '\t',
    b'\n' => '\n',
    b'\t' => '\t',
};

/// Something that turns text into a document.
pub trait JsonParser {
    type Output: JsonObject;

    /// Parse `input`, which must be exactly one object surrounded by
    /// optional whitespace.
    fn parse(&self, input: &str) -> Result<Self::Output, FormatError>;
}

/// Parser for the string/object subset of JSON.
///
/// Holds only configuration; each call to [`parse`](Parser::parse) is
/// independent, so one parser can be reused freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Parser { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse `input` into a [`Document`].
    pub fn parse(&self, input: &str) -> Result<Document, FormatError> {
        self.parse_into(input)
    }

    /// Parse `input` into any [`JsonObject`] implementation.
    pub fn parse_into<D>(&self, input: &str) -> Result<D, FormatError>
    where
        D: JsonObject + Default,
    {
        let mut cursor = Cursor::new(input);
        cursor.skip_whitespace();

        self.parse_object(&mut cursor)
            .and_then(|doc| {
                if cursor.is_eof() {
                    Ok(doc)
                } else {
                    Err(cursor.error(ParseErrorCode::TrailingContent))
                }
            })
            .map_err(|err| {
                trace!(code = ?err.code, offset = err.offset, "parse failed");
                err
            })
    }

    /// Parse one object, including the whitespace after its closing brace.
    ///
    /// Nested objects are tracked on an explicit stack of open parents, so
    /// nesting depth is bounded by memory rather than by the call stack.
    fn parse_object<D>(&self, cursor: &mut Cursor<'_>) -> Result<D, FormatError>
    where
        D: JsonObject + Default,
    {
        // Each entry is a parent object and the key its open child goes under.
        let mut parents: Vec<(D, String)> = Vec::new();
        let mut object = D::default();

        self.open_object(cursor, 1)?;
        let mut closed = cursor.eat(b'}');

        loop {
            if closed {
                cursor.skip_whitespace();
                trace!(depth = parents.len() + 1, offset = cursor.position(), "object end");
                match parents.pop() {
                    Some((mut parent, key)) => {
                        parent.set_object(key, object);
                        object = parent;
                    }
                    None => return Ok(object),
                }
            } else {
                let key = self.parse_string(cursor)?;
                cursor.skip_whitespace();

                cursor.expect(b':', ParseErrorCode::ExpectedColon)?;
                cursor.skip_whitespace();

                match cursor.peek() {
                    Some(b'"') => {
                        let value = self.parse_string(cursor)?;
                        cursor.skip_whitespace();
                        object.set_string(key, value);
                    }
                    Some(b'{') => {
                        self.open_object(cursor, parents.len() + 2)?;
                        parents.push((std::mem::take(&mut object), key));
                        closed = cursor.eat(b'}');
                        continue;
                    }
                    _ => return Err(cursor.error(ParseErrorCode::ExpectedValue)),
                }
            }

            if cursor.eat(b',') {
                cursor.skip_whitespace();
                closed = false;
            } else if cursor.eat(b'}') {
                closed = true;
            } else {
                return Err(cursor.error(ParseErrorCode::ExpectedCommaOrClose));
            }
        }
    }

    /// Consume an opening brace and the whitespace after it.
    ///
    /// A brace past the depth limit fails at the brace's offset.
    fn open_object(&self, cursor: &mut Cursor<'_>, depth: usize) -> Result<(), FormatError> {
        let start = cursor.position();
        cursor.expect(b'{', ParseErrorCode::ExpectedObject)?;
        if !self.options.allows_depth(depth) {
            return Err(FormatError::new(ParseErrorCode::DepthLimit, start));
        }

        trace!(depth, offset = start, "object start");
        cursor.skip_whitespace();
        Ok(())
    }

    /// Parse a quoted string and decode its escapes.
    ///
    /// Unescaped runs are copied in bulk; only `"` and `\` stop the scan.
    fn parse_string(&self, cursor: &mut Cursor<'_>) -> Result<String, FormatError> {
        let open = cursor.position();
        cursor.expect(b'"', ParseErrorCode::ExpectedString)?;

        let mut out = String::new();
        loop {
            let run_start = cursor.position();
            let Some(len) = memchr2(b'"', b'\\', cursor.remaining()) else {
                return Err(FormatError::new(ParseErrorCode::UnclosedString, open));
            };
            cursor.advance(len);
            out.push_str(cursor.slice_from(run_start));

            if cursor.eat(b'"') {
                return Ok(out);
            }

            // Backslash
            let escape_at = cursor.position();
            cursor.advance(1);
            let Some(next) = cursor.peek() else {
                return Err(FormatError::new(ParseErrorCode::UnclosedString, open));
            };
            let Some(&decoded) = ESCAPES.get(&next) else {
                return Err(FormatError::new(ParseErrorCode::InvalidEscape, escape_at));
            };
            out.push(decoded);
            cursor.advance(1);
        }
    }
}

impl JsonParser for Parser {
    type Output = Document;

    fn parse(&self, input: &str) -> Result<Document, FormatError> {
        Parser::parse(self, input)
    }
}

// ============================================================================
// Tests
// ============================================================================
