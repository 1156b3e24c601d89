//! Scratch stack used while decoding variable-length values.
//!
//! The parser does not know how long a string is until it sees the closing
//! quote, and escapes mean the decoded bytes differ from the source. Decoded
//! bytes are therefore pushed here one unit at a time and copied out into an
//! exactly sized allocation once the value is complete.
//!
//! Invariants
//! - The stack is strictly LIFO: a production records `top()` on entry and
//!   either pops everything it pushed or rewinds to the recorded mark.
//! - `top` is zero whenever no top-level parse is running.
//! - Slices handed out by `push`/`pop` borrow the stack, so they cannot be held
//!   across a push that may reallocate.

use alloc::vec::Vec;

use crate::{options::DEFAULT_STACK_CAPACITY, trace};

#[derive(Debug)]
pub(crate) struct ScratchStack {
    /// Backing storage; `buf.len()` is the allocated size of the stack.
    buf: Vec<u8>,
    top: usize,
    initial_capacity: usize,
}

impl Default for ScratchStack {
    fn default() -> Self {
        Self::new(DEFAULT_STACK_CAPACITY)
    }
}

impl ScratchStack {
    /// Create an empty stack. Nothing is allocated until the first push.
    pub(crate) fn new(initial_capacity: usize) -> Self {
        Self {
            buf: Vec::new(),
            top: 0,
            initial_capacity: initial_capacity.max(1),
        }
    }

    /// Current write cursor.
    #[inline]
    pub(crate) fn top(&self) -> usize {
        self.top
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Bytes allocated for the stack.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Reserve `n` bytes at the cursor and return them for writing.
    pub(crate) fn push(&mut self, n: usize) -> &mut [u8] {
        let start = self.top;
        let end = start + n;
        if end > self.buf.len() {
            self.grow(end);
        }
        self.top = end;
        &mut self.buf[start..end]
    }

    #[inline]
    pub(crate) fn push_byte(&mut self, byte: u8) {
        self.push(1)[0] = byte;
    }

    pub(crate) fn push_bytes(&mut self, bytes: &[u8]) {
        self.push(bytes.len()).copy_from_slice(bytes);
    }

    /// Retract the cursor by `n` bytes and return the retracted region.
    pub(crate) fn pop(&mut self, n: usize) -> &[u8] {
        debug_assert!(n <= self.top, "pop({n}) past the bottom of the stack");
        let n = n.min(self.top);
        self.top -= n;
        &self.buf[self.top..self.top + n]
    }

    /// Pop everything pushed since `mark` was taken with [`top`](Self::top).
    pub(crate) fn pop_since(&mut self, mark: usize) -> &[u8] {
        let len = self.top.saturating_sub(mark);
        self.pop(len)
    }

    /// Discard everything pushed since `mark`.
    pub(crate) fn rewind(&mut self, mark: usize) {
        debug_assert!(mark <= self.top, "rewind to {mark} above top {}", self.top);
        self.top = self.top.min(mark);
    }

    /// Grow by half the current size until `needed` bytes fit.
    fn grow(&mut self, needed: usize) {
        let mut size = if self.buf.is_empty() {
            self.initial_capacity
        } else {
            self.buf.len()
        };
        while size < needed {
            size += (size >> 1).max(1);
        }
        trace!(capacity = size, "scratch stack grew");
        self.buf.resize(size, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::ScratchStack;

    #[test]
    fn starts_unallocated() {
        let stack = ScratchStack::new(8);
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), 0);
    }

    #[test]
    fn push_then_pop_is_lifo() {
        let mut stack = ScratchStack::new(8);
        stack.push_bytes(b"abc");
        stack.push_byte(b'd');
        assert_eq!(stack.top(), 4);
        assert_eq!(stack.pop(1), b"d");
        assert_eq!(stack.pop(3), b"abc");
        assert!(stack.is_empty());
    }

    #[test]
    fn first_push_allocates_initial_capacity() {
        let mut stack = ScratchStack::new(8);
        stack.push_byte(1);
        assert_eq!(stack.capacity(), 8);
    }

    #[test]
    fn grows_by_half_and_preserves_content() {
        let mut stack = ScratchStack::new(4);
        stack.push_bytes(b"wxyz");
        assert_eq!(stack.capacity(), 4);
        stack.push_byte(b'!');
        assert_eq!(stack.capacity(), 6);
        stack.push_bytes(b"0123");
        // 6 -> 9
        assert_eq!(stack.capacity(), 9);
        assert_eq!(stack.pop(9), b"wxyz!0123");
    }

    #[test]
    fn large_push_grows_repeatedly() {
        let mut stack = ScratchStack::new(2);
        let region = stack.push(100);
        assert_eq!(region.len(), 100);
        assert!(stack.capacity() >= 100);
    }

    #[test]
    fn tiny_initial_capacity_still_grows() {
        let mut stack = ScratchStack::new(0);
        stack.push_bytes(b"hello");
        assert_eq!(stack.pop(5), b"hello");
    }

    #[test]
    fn pop_since_and_rewind_return_to_mark() {
        let mut stack = ScratchStack::default();
        stack.push_bytes(b"outer");
        let mark = stack.top();
        stack.push_bytes(b"inner");
        assert_eq!(stack.pop_since(mark), b"inner");
        assert_eq!(stack.top(), mark);

        stack.push_bytes(b"discarded");
        stack.rewind(mark);
        assert_eq!(stack.pop_since(0), b"outer");
    }

    #[test]
    fn capacity_is_kept_after_pops() {
        let mut stack = ScratchStack::new(4);
        stack.push(64);
        let capacity = stack.capacity();
        stack.rewind(0);
        assert_eq!(stack.capacity(), capacity);
        stack.push(64);
        assert_eq!(stack.capacity(), capacity);
    }
}
