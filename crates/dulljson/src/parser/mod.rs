//! Recursive-descent JSON parser.
//!
//! Overview
//! - One method per grammar production (`value`, literal, number, string,
//!   array, object). Each consumes a prefix of the input and either returns
//!   the complete [`Value`] or a [`ParseError`] describing the first
//!   violation.
//! - Failures never retry: a production cleans up what it built and
//!   propagates the inner error unchanged.
//! - String bytes are staged on the parser's [`ScratchStack`] and copied out
//!   once the closing quote is seen. Array elements and object members are
//!   gathered in a `Vec` owned by the production's own frame, so dropping the
//!   frame releases everything built so far.
//!
//! Invariants
//! - The scratch stack is empty before and after every top-level parse.
//! - A failed production leaves `pos` at the point of the violation; a
//!   malformed number does not consume its first byte.
//! - Recursion depth is bounded by [`ParserOptions::max_nesting_depth`].

mod escape;
mod literal;
mod numbers;
mod string;

use literal::Literal;

use crate::{
    ParseError, ParseErrorKind, ParserOptions, debug,
    stack::ScratchStack,
    trace,
    value::{Array, Member, Object, Value},
};

/// A reusable JSON parser.
///
/// The parser owns its scratch stack, so repeated calls reuse the same
/// allocation. Each call takes `&mut self`; a parser is never shared between
/// two parses at once.
///
/// # Examples
///
/// ```
/// use dulljson::{ParseErrorKind, Parser, Value};
///
/// let mut parser = Parser::default();
/// assert_eq!(parser.parse(" true ").unwrap(), Value::Boolean(true));
///
/// let err = parser.parse("[1,]").unwrap_err();
/// assert_eq!(err.kind(), ParseErrorKind::InvalidValue);
/// assert_eq!((err.line(), err.column()), (1, 4));
/// ```
#[derive(Debug)]
pub struct Parser {
    options: ParserOptions,
    stack: ScratchStack,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl Parser {
    /// Create a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            stack: ScratchStack::new(options.initial_stack_capacity),
        }
    }

    /// The options this parser was created with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse a complete JSON document.
    ///
    /// # Errors
    ///
    /// Returns the first grammar violation found; no partial tree is returned.
    pub fn parse(&mut self, json: &str) -> Result<Value, ParseError> {
        self.parse_slice(json.as_bytes())
    }

    /// Parse a complete JSON document given as bytes.
    ///
    /// The bytes are expected to be UTF-8; string contents are copied through
    /// without separate validation. The document ends at the end of the slice.
    ///
    /// # Errors
    ///
    /// Returns the first grammar violation found; no partial tree is returned.
    pub fn parse_slice(&mut self, json: &[u8]) -> Result<Value, ParseError> {
        trace!(len = json.len(), "parsing document");
        let result = Context::new(json, &mut self.stack, self.options.max_nesting_depth).document();

        debug_assert!(self.stack.is_empty(), "scratch stack leaked bytes");
        self.stack.rewind(0);

        let value = result?;
        trace!(kind = ?value.kind(), "document parsed");
        Ok(value)
    }

    /// Parse into an existing value.
    ///
    /// `target` is reset to `null` first and stays `null` if parsing fails, so
    /// a partially built tree is never observable.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    pub fn parse_into(&mut self, target: &mut Value, json: &str) -> Result<(), ParseError> {
        target.clear();
        *target = self.parse(json)?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn stack_top(&self) -> usize {
        self.stack.top()
    }
}

/// Per-document parsing state.
struct Context<'src, 'stk> {
    input: &'src [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
    stack: &'stk mut ScratchStack,
}

impl<'src, 'stk> Context<'src, 'stk> {
    fn new(input: &'src [u8], stack: &'stk mut ScratchStack, max_depth: usize) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
            max_depth,
            stack,
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Unconsumed input.
    #[inline]
    fn rest(&self) -> &'src [u8] {
        &self.input[self.pos..]
    }

    fn fail(&self, kind: ParseErrorKind) -> ParseError {
        self.fail_at(kind, self.pos)
    }

    fn fail_at(&self, kind: ParseErrorKind, offset: usize) -> ParseError {
        let err = ParseError::at(kind, self.input, offset);
        debug!(%err, "document rejected");
        err
    }

    /// `ws value ws EOF`
    fn document(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        let value = self.parse_value()?;
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(self.fail(ParseErrorKind::RootNotSingular));
        }
        Ok(value)
    }

    fn skip_whitespace(&mut self) {
        let skipped = self
            .rest()
            .iter()
            .take_while(|&&b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
            .count();
        self.pos += skipped;
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            None => Err(self.fail(ParseErrorKind::ExpectValue)),
            Some(b'n') => self.parse_literal(Literal::Null),
            Some(b't') => self.parse_literal(Literal::True),
            Some(b'f') => self.parse_literal(Literal::False),
            Some(b'"') => self.parse_string(),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.parse_number(),
        }
    }

    /// Account for one more open container.
    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.fail(ParseErrorKind::NestingTooDeep));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        let result = self.parse_array_elements();
        self.depth -= 1;
        result.map(Value::Array)
    }

    fn parse_array_elements(&mut self) -> Result<Array, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'['));
        self.pos += 1;
        self.skip_whitespace();

        let mut items = Array::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(items);
        }

        loop {
            self.skip_whitespace();
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    items.shrink_to_fit();
                    return Ok(items);
                }
                _ => return Err(self.fail(ParseErrorKind::MissCommaOrSquareBracket)),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        let result = self.parse_object_members();
        self.depth -= 1;
        result.map(Value::Object)
    }

    fn parse_object_members(&mut self) -> Result<Object, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'{'));
        self.pos += 1;
        self.skip_whitespace();

        let mut members = Object::new();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(members);
        }

        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(self.fail(ParseErrorKind::MissKey));
            }
            let key = self.parse_string_bytes()?;

            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.fail(ParseErrorKind::MissColon));
            }
            self.pos += 1;
            self.skip_whitespace();

            let value = self.parse_value()?;
            members.push(Member { key, value });

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    members.shrink_to_fit();
                    return Ok(members);
                }
                _ => return Err(self.fail(ParseErrorKind::MissCommaOrCurlyBracket)),
            }
        }
    }
}
