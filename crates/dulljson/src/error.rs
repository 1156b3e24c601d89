use thiserror::Error;

/// The reason a document was rejected.
///
/// Each variant names exactly one grammar or resource violation. The numeric
/// [`code`](ParseErrorKind::code) of every variant is stable; `0` is reserved
/// for success and never appears here.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ParseErrorKind {
    /// The input is empty or contains only whitespace.
    #[error("expected a value")]
    ExpectValue = 1,
    /// The lookahead does not start any value, or a literal or number is
    /// malformed.
    #[error("invalid value")]
    InvalidValue = 2,
    /// A complete value was followed by something other than whitespace.
    #[error("unexpected content after the root value")]
    RootNotSingular = 3,
    /// A number literal overflows `f64` to infinity.
    #[error("number too big")]
    NumberTooBig = 4,
    /// The input ended before a string was closed.
    #[error("missing closing quotation mark")]
    MissQuotationMark = 5,
    /// A backslash is followed by a character that is not a JSON escape.
    #[error("invalid string escape")]
    InvalidStringEscape = 6,
    /// A raw control character (below U+0020) appears inside a string.
    #[error("invalid control character in string")]
    InvalidStringChar = 7,
    /// A `\u` escape is not followed by four hexadecimal digits.
    #[error("invalid unicode escape: expected four hex digits")]
    InvalidUnicodeHex = 8,
    /// A `\u` escape encodes an unpaired or ill-formed surrogate.
    #[error("invalid unicode surrogate pair")]
    InvalidUnicodeSurrogate = 9,
    /// An array element is followed by something other than `,` or `]`.
    #[error("expected ',' or ']' after array element")]
    MissCommaOrSquareBracket = 10,
    /// An object member does not start with a string key.
    #[error("expected string key")]
    MissKey = 11,
    /// An object key is not followed by `:`.
    #[error("expected ':' after object key")]
    MissColon = 12,
    /// An object member is followed by something other than `,` or `}`.
    #[error("expected ',' or '}}' after object member")]
    MissCommaOrCurlyBracket = 13,
    /// Arrays and objects are nested deeper than
    /// [`ParserOptions::max_nesting_depth`](crate::ParserOptions::max_nesting_depth).
    #[error("nesting too deep")]
    NestingTooDeep = 14,
}

impl ParseErrorKind {
    /// The stable numeric status code of this error.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// A rejected document: what went wrong and where.
///
/// `offset` is a byte offset into the input; `line` and `column` are 1-based,
/// with columns counted in bytes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    pub(crate) kind: ParseErrorKind,
    pub(crate) offset: usize,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl ParseError {
    /// Build an error for `kind` detected at byte `offset` of `input`.
    pub(crate) fn at(kind: ParseErrorKind, input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let consumed = &input[..offset];
        let line = 1 + consumed.iter().filter(|&&b| b == b'\n').count();
        let line_start = consumed
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |newline| newline + 1);
        Self {
            kind,
            offset,
            line,
            column: offset - line_start + 1,
        }
    }

    /// The kind of violation.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Byte offset of the point where the violation was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of [`offset`](Self::offset).
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based byte column of [`offset`](Self::offset) within its line.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl From<ParseError> for ParseErrorKind {
    fn from(err: ParseError) -> Self {
        err.kind
    }
}
