/// Default for [`ParserOptions::max_nesting_depth`].
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Default for [`ParserOptions::initial_stack_capacity`].
pub const DEFAULT_STACK_CAPACITY: usize = 256;

/// Configuration options for the parser.
///
/// # Examples
///
/// ```rust
/// use dulljson::{Parser, ParserOptions};
///
/// let mut parser = Parser::new(ParserOptions {
///     max_nesting_depth: 16,
///     ..Default::default()
/// });
/// assert!(parser.parse("[[[]]]").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of arrays and objects that may be open at once.
    ///
    /// Entering one more container fails with
    /// [`ParseErrorKind::NestingTooDeep`](crate::ParseErrorKind::NestingTooDeep).
    /// This bounds the recursion depth of the parser on adversarial input.
    ///
    /// # Default
    ///
    /// `128`
    pub max_nesting_depth: usize,

    /// Capacity, in bytes, of the scratch stack when it first allocates.
    ///
    /// The stack grows by half its size whenever a push does not fit, so this
    /// only tunes how soon the first reallocations happen.
    ///
    /// # Default
    ///
    /// `256`
    pub initial_stack_capacity: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            initial_stack_capacity: DEFAULT_STACK_CAPACITY,
        }
    }
}
