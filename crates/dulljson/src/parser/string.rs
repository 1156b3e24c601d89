//! String production.
//!
//! Decoded bytes are staged on the scratch stack: plain runs are copied in
//! bulk, escapes push their decoded form. On the closing quote the staged
//! region is popped into an exactly sized `BString`; on any error the stack is
//! rewound to where this string started.

use bstr::BString;

use super::{
    Context,
    escape::{self, HIGH_SURROGATES, LOW_SURROGATES},
};
use crate::{ParseError, ParseErrorKind, Value};

/// Bytes that end a plain run inside a string.
#[inline]
fn is_special(byte: u8) -> bool {
    byte == b'"' || byte == b'\\' || byte < 0x20
}

impl Context<'_, '_> {
    pub(super) fn parse_string(&mut self) -> Result<Value, ParseError> {
        self.parse_string_bytes().map(Value::String)
    }

    /// Parse a string starting at the opening quote and return its decoded
    /// bytes. Used for both string values and object keys.
    pub(super) fn parse_string_bytes(&mut self) -> Result<BString, ParseError> {
        let mark = self.stack.top();
        let result = self.decode_string(mark);
        if result.is_err() {
            self.stack.rewind(mark);
        }
        result
    }

    fn decode_string(&mut self, mark: usize) -> Result<BString, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        self.pos += 1;

        loop {
            match self.peek() {
                None => return Err(self.fail(ParseErrorKind::MissQuotationMark)),
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(BString::from(self.stack.pop_since(mark)));
                }
                Some(b'\\') => self.decode_escape()?,
                Some(0x00..=0x1F) => return Err(self.fail(ParseErrorKind::InvalidStringChar)),
                Some(_) => {
                    let rest = self.rest();
                    let run = rest.iter().position(|&b| is_special(b)).unwrap_or(rest.len());
                    self.stack.push_bytes(&rest[..run]);
                    self.pos += run;
                }
            }
        }
    }

    /// Decode one escape sequence starting at the backslash.
    fn decode_escape(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 1;

        let decoded = match self.peek() {
            Some(b'"') => b'"',
            Some(b'\\') => b'\\',
            Some(b'/') => b'/',
            Some(b'b') => 0x08,
            Some(b'f') => 0x0C,
            Some(b'n') => b'\n',
            Some(b'r') => b'\r',
            Some(b't') => b'\t',
            Some(b'u') => {
                self.pos += 1;
                return self.decode_unicode_escape(start);
            }
            _ => return Err(self.fail_at(ParseErrorKind::InvalidStringEscape, start)),
        };
        self.pos += 1;
        self.stack.push_byte(decoded);
        Ok(())
    }

    /// Decode the code point of a `\u` escape (and, for a high surrogate, the
    /// `\u` escape that must follow it) and push it as UTF-8.
    ///
    /// `start` is the offset of the first backslash; `pos` is just past `\u`.
    fn decode_unicode_escape(&mut self, start: usize) -> Result<(), ParseError> {
        let unit = self.read_hex4(start)?;

        let code_point = if HIGH_SURROGATES.contains(&unit) {
            if !self.rest().starts_with(b"\\u") {
                return Err(self.fail_at(ParseErrorKind::InvalidUnicodeSurrogate, start));
            }
            let low_start = self.pos;
            self.pos += 2;
            let low = self.read_hex4(low_start)?;
            if !LOW_SURROGATES.contains(&low) {
                return Err(self.fail_at(ParseErrorKind::InvalidUnicodeSurrogate, start));
            }
            escape::combine_surrogates(unit, low)
        } else if LOW_SURROGATES.contains(&unit) {
            return Err(self.fail_at(ParseErrorKind::InvalidUnicodeSurrogate, start));
        } else {
            u32::from(unit)
        };

        let ch = char::from_u32(code_point)
            .ok_or_else(|| self.fail_at(ParseErrorKind::InvalidUnicodeSurrogate, start))?;
        let mut utf8 = [0u8; 4];
        self.stack.push_bytes(ch.encode_utf8(&mut utf8).as_bytes());
        Ok(())
    }

    /// Read the four hex digits at `pos`; a malformed sequence is reported at
    /// `start`, the backslash of its escape.
    fn read_hex4(&mut self, start: usize) -> Result<u16, ParseError> {
        let unit = self
            .rest()
            .get(..4)
            .and_then(escape::parse_hex4)
            .ok_or_else(|| self.fail_at(ParseErrorKind::InvalidUnicodeHex, start))?;
        self.pos += 4;
        Ok(unit)
    }
}
