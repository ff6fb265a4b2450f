//! Positional views over an `ArrayList`.
//!
//! A `Cursor` is a position in a list's buffer, not a borrow of it. It remembers
//! the generation of the buffer it was created from. Every reallocation of the
//! list (growth or shrink) starts a new generation, and dereferencing a cursor
//! from an older generation panics. Holding a cursor across a mutation that
//! reallocates is a bug in the caller, even if the position happens to still be
//! in range. A cursor may only be used with the list that created it; a clone
//! starts at the same generation as its source, so this is not checked.

use core::ops::{Add, AddAssign, Sub, SubAssign};

/// Forward position in an `ArrayList`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cursor {
    pos: usize,
    generation: u64,
}

impl Cursor {
    pub(crate) fn new(pos: usize, generation: u64) -> Self {
        Self { pos, generation }
    }

    pub fn position(self) -> usize {
        self.pos
    }

    pub fn generation(self) -> u64 {
        self.generation
    }

    /// Advances the cursor and returns the advanced position.
    pub fn inc(&mut self) -> Self {
        self.pos += 1;
        *self
    }

    /// Moves the cursor back and returns the new position.
    pub fn dec(&mut self) -> Self {
        self.pos -= 1;
        *self
    }
}

impl Add<usize> for Cursor {
    type Output = Cursor;
    fn add(self, step: usize) -> Cursor {
        Cursor::new(self.pos + step, self.generation)
    }
}

impl Sub<usize> for Cursor {
    type Output = Cursor;
    fn sub(self, step: usize) -> Cursor {
        Cursor::new(self.pos - step, self.generation)
    }
}

impl AddAssign<usize> for Cursor {
    fn add_assign(&mut self, step: usize) {
        self.pos += step;
    }
}

impl SubAssign<usize> for Cursor {
    fn sub_assign(&mut self, step: usize) {
        self.pos -= step;
    }
}

/// Distance between two cursors.
impl Sub<Cursor> for Cursor {
    type Output = isize;
    fn sub(self, rhs: Cursor) -> isize {
        self.pos as isize - rhs.pos as isize
    }
}

/// Reverse position in an `ArrayList`. Runs from `len()` down to `0`; a reverse
/// cursor at position `p` refers to the element at `p - 1`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RevCursor {
    pos: usize,
    generation: u64,
}

impl RevCursor {
    pub(crate) fn new(pos: usize, generation: u64) -> Self {
        Self { pos, generation }
    }

    /// The forward cursor at the same buffer position.
    pub fn base(self) -> Cursor {
        Cursor::new(self.pos, self.generation)
    }

    /// Index of the element this cursor refers to, or `None` at `rend`.
    pub fn target(self) -> Option<usize> {
        self.pos.checked_sub(1)
    }

    pub fn generation(self) -> u64 {
        self.generation
    }

    pub fn inc(&mut self) -> Self {
        self.pos -= 1;
        *self
    }

    pub fn dec(&mut self) -> Self {
        self.pos += 1;
        *self
    }
}

impl Add<usize> for RevCursor {
    type Output = RevCursor;
    fn add(self, step: usize) -> RevCursor {
        RevCursor::new(self.pos - step, self.generation)
    }
}

impl Sub<usize> for RevCursor {
    type Output = RevCursor;
    fn sub(self, step: usize) -> RevCursor {
        RevCursor::new(self.pos + step, self.generation)
    }
}

impl AddAssign<usize> for RevCursor {
    fn add_assign(&mut self, step: usize) {
        self.pos -= step;
    }
}

impl SubAssign<usize> for RevCursor {
    fn sub_assign(&mut self, step: usize) {
        self.pos += step;
    }
}

impl Sub<RevCursor> for RevCursor {
    type Output = isize;
    fn sub(self, rhs: RevCursor) -> isize {
        rhs.pos as isize - self.pos as isize
    }
}

/// Moves `[first, last)` to the range starting at `d_first`, walking front to back.
/// The destination may overlap the source as long as it starts at or before `first`.
/// Returns the end of the destination range.
///
/// Elements are exchanged, not copied. After the call the slots of the source
/// range not covered by the destination hold the displaced destination elements.
pub fn move_forward<T>(
    buf: &mut [T],
    first: Cursor,
    last: Cursor,
    d_first: Cursor,
) -> Cursor {
    assert!(first.pos <= last.pos && last.pos <= buf.len());
    let n = last.pos - first.pos;
    assert!(d_first.pos + n <= buf.len());
    assert!(d_first.pos <= first.pos || d_first.pos >= last.pos);
    for i in 0..n {
        buf.swap(d_first.pos + i, first.pos + i);
    }
    d_first + n
}

/// Moves `[first, last)` to the range ending at `d_last`, walking back to front.
/// The destination may overlap the source as long as it ends at or after `last`.
/// Returns the start of the destination range.
pub fn move_backward<T>(
    buf: &mut [T],
    first: Cursor,
    last: Cursor,
    d_last: Cursor,
) -> Cursor {
    assert!(first.pos <= last.pos && d_last.pos <= buf.len());
    let n = last.pos - first.pos;
    assert!(n <= d_last.pos);
    assert!(d_last.pos >= last.pos || d_last.pos <= first.pos);
    for i in 1..=n {
        buf.swap(d_last.pos - i, last.pos - i);
    }
    d_last - n
}

/// Borrowing iterator over the live elements of an `ArrayList`.
pub struct Iter<'a, T> {
    items: &'a [T],
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            items,
            front: 0,
            back: items.len(),
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front < self.back {
            let item = &self.items[self.front];
            self.front += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front < self.back {
            self.back -= 1;
            Some(&self.items[self.back])
        } else {
            None
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
