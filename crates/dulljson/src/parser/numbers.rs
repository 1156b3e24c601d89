//! Number production.
//!
//! ```text
//! number = ["-"] int [frac] [exp]
//! int    = "0" | digit1-9 *digit
//! frac   = "." 1*digit
//! exp    = ("e" | "E") ["-" | "+"] 1*digit
//! ```
//!
//! The grammar is checked here before the span reaches the `f64` parser, which
//! on its own would also accept forms like `+1`, `.5`, `1.` or `inf`.

use super::Context;
use crate::{ParseError, ParseErrorKind, Value};

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of the number at the start of `bytes`, or `None` if `bytes` does
/// not start with a well-formed number.
///
/// A leading `0` ends the integer part, so `0123` scans as `0`.
fn scan_number(bytes: &[u8]) -> Option<usize> {
    let mut len = usize::from(bytes.first() == Some(&b'-'));

    match bytes.get(len)? {
        b'0' => len += 1,
        b'1'..=b'9' => len += 1 + count_digits(&bytes[len + 1..]),
        _ => return None,
    }

    if bytes.get(len) == Some(&b'.') {
        len += 1;
        let digits = count_digits(&bytes[len..]);
        if digits == 0 {
            return None;
        }
        len += digits;
    }

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        len += 1;
        if matches!(bytes.get(len), Some(b'+' | b'-')) {
            len += 1;
        }
        let digits = count_digits(&bytes[len..]);
        if digits == 0 {
            return None;
        }
        len += digits;
    }

    Some(len)
}

impl Context<'_, '_> {
    pub(super) fn parse_number(&mut self) -> Result<Value, ParseError> {
        let rest = self.rest();
        let number = scan_number(rest)
            .and_then(|len| {
                let text = core::str::from_utf8(&rest[..len]).ok()?;
                Some((len, text.parse::<f64>().ok()?))
            })
            .ok_or_else(|| self.fail(ParseErrorKind::InvalidValue));
        let (len, number) = number?;

        // Underflow to zero is fine; overflow to infinity is not.
        if number.is_infinite() {
            return Err(self.fail(ParseErrorKind::NumberTooBig));
        }
        self.pos += len;
        Ok(Value::Number(number))
    }
}
