//! JSON value types and accessors.
//!
//! This module defines the [`Value`] enum, the owned tree produced by the
//! parser, and [`ValueKind`], the tag callers can branch on.

use alloc::{string::String, vec::Vec};
use core::mem;

use bstr::{BString, ByteSlice};

/// The elements of a JSON array.
pub type Array = Vec<Value>;

/// The members of a JSON object, in document order.
///
/// Duplicate keys are kept as separate members; nothing is merged.
pub type Object = Vec<Member>;

/// One `key: value` member of an object.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    /// The decoded key. May contain any bytes, including NUL.
    pub key: BString,
    /// The member's value.
    pub value: Value,
}

impl Member {
    /// Create a member from anything convertible into a key and a value.
    pub fn new(key: impl Into<BString>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The tag of a [`Value`].
///
/// Booleans carry two tags, `True` and `False`, so that a caller can tell a
/// literal apart without looking at the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// A finite number.
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

/// A JSON value as defined by [RFC 8259].
///
/// Each value owns its payload exclusively: a string owns its bytes, an array
/// owns its elements and every element owns its own payload. Replacing a value
/// drops the previous payload.
///
/// The empty state is [`Value::Null`], which is also what [`Default`],
/// [`clear`](Value::clear) and [`take`](Value::take) produce.
///
/// # Examples
///
/// ```
/// use dulljson::{Value, ValueKind};
///
/// let v = dulljson::parse(r#"[1, "two", null]"#).unwrap();
/// assert_eq!(v.kind(), ValueKind::Array);
/// assert_eq!(v.array_len(), Some(3));
/// assert_eq!(v.get(1).and_then(Value::as_str), Some("two"));
/// assert_eq!(v.get(3), None);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`, and the empty state of every value.
    #[default]
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A finite number.
    Number(f64),
    /// A string as raw bytes. Usually UTF-8, but `\u0000` and similar escapes
    /// mean the length must never be inferred from a terminator.
    String(BString),
    /// An ordered sequence of values.
    Array(Array),
    /// An ordered sequence of members.
    Object(Object),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v.into())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::String(v.into())
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// The tag of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(true) => ValueKind::True,
            Self::Boolean(false) => ValueKind::False,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if the value is [`Null`](Value::Null).
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`](Value::Boolean).
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`](Value::Number).
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`](Value::String).
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`](Value::Array).
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`](Value::Object).
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload as bytes, if this is a string.
    ///
    /// The slice length is the string length; embedded NUL bytes are part of
    /// the string.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::String(s) => Some(s.as_slice()),
            _ => None,
        }
    }

    /// The string payload as `&str`, if this is a string of valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|bytes| bytes.to_str().ok())
    }

    /// The elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable access to the elements, if this is an array.
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The members, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Mutable access to the members, if this is an object.
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Number of elements, if this is an array.
    #[must_use]
    pub fn array_len(&self) -> Option<usize> {
        self.as_array().map(Vec::len)
    }

    /// The element at `index`, or `None` if this is not an array or `index` is
    /// out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }

    /// Number of members, if this is an object.
    #[must_use]
    pub fn object_len(&self) -> Option<usize> {
        self.as_object().map(Vec::len)
    }

    /// The member at `index`, in document order.
    #[must_use]
    pub fn member(&self, index: usize) -> Option<&Member> {
        self.as_object()?.get(index)
    }

    /// The key of the member at `index`.
    #[must_use]
    pub fn key(&self, index: usize) -> Option<&[u8]> {
        self.member(index).map(|member| member.key.as_slice())
    }

    /// The value of the first member whose key equals `key`.
    ///
    /// ```
    /// let v = dulljson::parse(r#"{"a": 1, "a": 2}"#).unwrap();
    /// assert_eq!(v.get_key("a").and_then(|v| v.as_f64()), Some(1.0));
    /// assert_eq!(v.object_len(), Some(2));
    /// ```
    #[must_use]
    pub fn get_key(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        let key = key.as_ref();
        self.as_object()?
            .iter()
            .find(|member| member.key == key)
            .map(|member| &member.value)
    }

    /// Replace this value with `null`, dropping any previous payload.
    pub fn set_null(&mut self) {
        *self = Self::Null;
    }

    /// Replace this value with a boolean.
    pub fn set_bool(&mut self, b: bool) {
        *self = Self::Boolean(b);
    }

    /// Replace this value with a number.
    pub fn set_number(&mut self, n: f64) {
        *self = Self::Number(n);
    }

    /// Replace this value with a copy of `bytes`.
    ///
    /// ```
    /// use dulljson::Value;
    ///
    /// let mut v = Value::from(1.0);
    /// v.set_string(b"Hello\0World");
    /// assert_eq!(v.as_bytes().map(<[u8]>::len), Some(11));
    /// ```
    pub fn set_string(&mut self, bytes: impl AsRef<[u8]>) {
        *self = Self::String(BString::from(bytes.as_ref()));
    }

    /// Release the payload and reset to `null`.
    pub fn clear(&mut self) {
        self.set_null();
    }

    /// Move the value out, leaving `null` behind.
    #[must_use]
    pub fn take(&mut self) -> Value {
        mem::take(self)
    }
}
