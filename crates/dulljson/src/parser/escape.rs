//! Helpers for decoding `\uXXXX` escapes.
//!
//! A `\u` escape carries one UTF-16 code unit as exactly four ASCII hex
//! digits (`0-9`, `A-F`, `a-f`). Code points above U+FFFF arrive as a high
//! surrogate unit followed by a low surrogate unit, which
//! [`combine_surrogates`] folds back into a single code point.

use core::ops::RangeInclusive;

pub(super) const HIGH_SURROGATES: RangeInclusive<u16> = 0xD800..=0xDBFF;
pub(super) const LOW_SURROGATES: RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Convert a single ASCII hex digit into its 0..=15 value.
#[inline]
fn hex_val(digit: u8) -> Option<u16> {
    let value = match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => return None,
    };
    Some(u16::from(value))
}

/// Decode exactly four hex digits into a code unit.
///
/// Returns `None` if `digits` is not four bytes long or any byte is not a hex
/// digit.
pub(super) fn parse_hex4(digits: &[u8]) -> Option<u16> {
    if digits.len() != 4 {
        return None;
    }
    digits
        .iter()
        .try_fold(0u16, |acc, &digit| Some((acc << 4) | hex_val(digit)?))
}

/// Fold a high/low surrogate pair into the code point it encodes.
pub(super) fn combine_surrogates(high: u16, low: u16) -> u32 {
    debug_assert!(HIGH_SURROGATES.contains(&high));
    debug_assert!(LOW_SURROGATES.contains(&low));
    0x10000 + ((u32::from(high - 0xD800) << 10) | u32::from(low - 0xDC00))
}
