//! mjson Core Parser
//!
//! Parser for a small subset of JSON: objects whose values
//! are either strings or nested objects. Parsing produces an owned
//! [`Document`] tree.
//!
//! # Architecture
//!
//! - **document.rs** - Document storage and the `JsonObject` accessor trait
//! - **value.rs** - Borrowed view over a single document entry
//! - **parser.rs** - Object walk over a cursor, `JsonParser` trait
//! - **cursor.rs** - Input plus byte offset, whitespace and token helpers
//! - **error.rs** - `FormatError` and `ParseErrorCode`
//! - **options.rs** - Parser configuration
//!
//! # Example
//!
//! ```
//! use mjson_core::{Document, JsonObject};
//!
//! let doc = Document::parse(r#"{ "name": { "first": "sam", "last": "doe" } }"#).unwrap();
//! let name = doc.get_object("name").unwrap();
//! assert_eq!(name.get_string("first"), Some("sam"));
//! ```

#[macro_use]
mod trace;

mod cursor;
pub mod document;
pub mod error;
pub mod options;
pub mod parser;
pub mod value;

pub use document::{Document, JsonObject};
pub use error::{FormatError, ParseErrorCode};
pub use options::ParseOptions;
pub use parser::{JsonParser, Parser};
pub use value::Value;
