//! A small validating JSON parser.
//!
//! `dulljson` turns a complete JSON document into an owned [`Value`] tree in
//! one forward scan, enforcing the RFC 8259 grammar exactly: number syntax is
//! checked before conversion, string escapes and surrogate pairs are validated,
//! and every rejection names the precise violation in a [`ParseErrorKind`].
//!
//! ```
//! use dulljson::{ParseErrorKind, ValueKind};
//!
//! let v = dulljson::parse(r#"{"name": "dull", "tags": ["a", "b"]}"#).unwrap();
//! assert_eq!(v.kind(), ValueKind::Object);
//! assert_eq!(v.get_key("tags").and_then(|t| t.array_len()), Some(2));
//!
//! let err = dulljson::parse("[1 2]").unwrap_err();
//! assert_eq!(err.kind(), ParseErrorKind::MissCommaOrSquareBracket);
//! ```
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events while parsing (document start and end,
//!   rejections, scratch stack growth).
//! - `serde`: derive `Serialize`/`Deserialize` for [`Value`] and [`Member`].

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
pub(crate) use {debug, trace};

mod error;
mod options;
mod parser;
mod stack;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};
pub use options::{DEFAULT_MAX_NESTING_DEPTH, DEFAULT_STACK_CAPACITY, ParserOptions};
pub use parser::Parser;
pub use value::{Array, Member, Object, Value, ValueKind};

/// Parse a complete JSON document with the default options.
///
/// # Errors
///
/// Returns the first grammar violation found. See [`ParseErrorKind`].
pub fn parse(json: &str) -> Result<Value, ParseError> {
    Parser::default().parse(json)
}

/// Parse a complete JSON document given as bytes, with the default options.
///
/// # Errors
///
/// Returns the first grammar violation found. See [`ParseErrorKind`].
pub fn parse_slice(json: &[u8]) -> Result<Value, ParseError> {
    Parser::default().parse_slice(json)
}

/// Parse into an existing value, which is left `null` on failure.
///
/// ```
/// use dulljson::Value;
///
/// let mut v = Value::Boolean(false);
/// assert!(dulljson::parse_into(&mut v, "0123").is_err());
/// assert!(v.is_null());
/// ```
///
/// # Errors
///
/// Returns the first grammar violation found. See [`ParseErrorKind`].
pub fn parse_into(target: &mut Value, json: &str) -> Result<(), ParseError> {
    Parser::default().parse_into(target, json)
}
