use super::Context;
use crate::{ParseError, ParseErrorKind, Value};

/// The three keyword values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Literal {
    Null,
    True,
    False,
}

impl Literal {
    fn text(self) -> &'static [u8] {
        match self {
            Literal::Null => b"null",
            Literal::True => b"true",
            Literal::False => b"false",
        }
    }

    fn value(self) -> Value {
        match self {
            Literal::Null => Value::Null,
            Literal::True => Value::Boolean(true),
            Literal::False => Value::Boolean(false),
        }
    }
}

impl Context<'_, '_> {
    /// Match `literal` byte for byte; a mismatch or early end of input is an
    /// invalid value.
    pub(super) fn parse_literal(&mut self, literal: Literal) -> Result<Value, ParseError> {
        let text = literal.text();
        if !self.rest().starts_with(text) {
            return Err(self.fail(ParseErrorKind::InvalidValue));
        }
        self.pos += text.len();
        Ok(literal.value())
    }
}
