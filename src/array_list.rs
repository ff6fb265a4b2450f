use crate::cursor::{move_backward, move_forward, Cursor, Iter, RevCursor};
use crate::error::{ListError, Operation};
use core::ops::{Index, IndexMut};
use log::debug;

/// Minimum number of slots an `ArrayList` ever holds.
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable sequence with an explicit capacity policy.
///
/// Capacity doubles when an insert needs more room, and is cut to a quarter
/// (never below `DEFAULT_CAPACITY`) when a removal leaves the list less than a
/// quarter full. Both grow and shrink move every element into a fresh buffer, which
/// invalidates all `Cursor`s and `RevCursor`s handed out before.
pub struct ArrayList<T> {
    /// The live elements. `buf.len()` is the size of the list. The allocation
    /// behind `buf` has room for at least `capacity` elements; `capacity` is the
    /// number the growth policy works with, independent of how `Vec` rounds.
    buf: Vec<T>,
    capacity: usize,
    /// Bumped on every reallocation.
    generation: u64,
}

impl<T> ArrayList<T> {
    /// Returned by `index_of` when the element is not present.
    pub const NPOS: usize = crate::list::NPOS;

    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list. Requests below `DEFAULT_CAPACITY` are raised to it.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(DEFAULT_CAPACITY);
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Drops every element. Capacity is left alone.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Appends `element`. Fails only if the buffer cannot grow.
    pub fn add(&mut self, element: T) -> Result<(), ListError> {
        self.insert(self.len(), element)
    }

    /// Inserts `element` at `index`, shifting everything at or after `index` one
    /// slot toward the end. `index == len()` appends.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), ListError> {
        Operation::AddByIndex.check_index(index, self.len())?;
        self.ensure_capacity(self.len() + 1)?;
        let size = self.len();
        self.buf.push(element);
        if index == size {
            return Ok(());
        }
        let begin = self.begin();
        move_backward(&mut self.buf, begin + index, begin + size, begin + size + 1);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        Operation::Get.check_index(index, self.len())?;
        Ok(&self.buf[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        Operation::Get.check_index(index, self.len())?;
        Ok(&mut self.buf[index])
    }

    /// Replaces the element at `index` and returns the previous one.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, ListError> {
        Operation::Set.check_index(index, self.len())?;
        Ok(core::mem::replace(&mut self.buf[index], element))
    }

    /// Removes and returns the element at `index`, shifting later elements toward
    /// the front. May shrink the buffer.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        Operation::Remove.check_index(index, self.len())?;
        let begin = self.begin();
        let end = self.end();
        move_forward(&mut self.buf, begin + index + 1, end, begin + index);
        // The removed element now sits in the last slot.
        let last = self.buf.len() - 1;
        let removed = self.buf.swap_remove(last);
        self.shrink_if_necessary();
        Ok(removed)
    }

    /// Removes the last element, if any.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            self.remove(self.len() - 1).ok()
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.buf.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.buf.last()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buf)
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }

    /// Iterates from the last element to the first.
    pub fn iter_rev(&self) -> core::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Renders the list as `[e0, e1, ..., en]`, formatting each element with
    /// `to_string`.
    pub fn to_string_with<F>(&self, to_string: F) -> String
    where
        F: Fn(&T) -> String,
    {
        let mut s = String::from("[");
        for (i, element) in self.iter().enumerate() {
            if i != 0 {
                s.push_str(", ");
            }
            s.push_str(&to_string(element));
        }
        s.push(']');
        s
    }

    /// The current buffer generation. Changes whenever the buffer is reallocated.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn begin(&self) -> Cursor {
        Cursor::new(0, self.generation)
    }

    pub fn end(&self) -> Cursor {
        Cursor::new(self.len(), self.generation)
    }

    pub fn rbegin(&self) -> RevCursor {
        RevCursor::new(self.len(), self.generation)
    }

    pub fn rend(&self) -> RevCursor {
        RevCursor::new(0, self.generation)
    }

    /// Dereferences `cursor`. Returns `None` if it is at or past `end()`.
    ///
    /// Panics if the list has been reallocated since `cursor` was created.
    pub fn at(&self, cursor: Cursor) -> Option<&T> {
        self.check_generation(cursor.generation());
        self.buf.get(cursor.position())
    }

    pub fn at_mut(&mut self, cursor: Cursor) -> Option<&mut T> {
        self.check_generation(cursor.generation());
        self.buf.get_mut(cursor.position())
    }

    /// Dereferences a reverse cursor, which refers to the element before its
    /// position. Returns `None` at `rend()`.
    pub fn at_rev(&self, cursor: RevCursor) -> Option<&T> {
        self.check_generation(cursor.generation());
        cursor.target().and_then(|i| self.buf.get(i))
    }

    fn check_generation(&self, generation: u64) {
        assert_eq!(
            generation, self.generation,
            "cursor used after the list was reallocated"
        );
    }

    fn realloc_to_fit(&mut self, new_capacity: usize) -> Result<(), ListError> {
        debug_assert!(self.len() <= new_capacity);
        debug!(
            "realloc_to_fit: new_capacity = {}, capacity = {}, size = {}",
            new_capacity,
            self.capacity,
            self.len()
        );
        let mut new_buf: Vec<T> = Vec::new();
        new_buf
            .try_reserve_exact(new_capacity)
            .map_err(|_| ListError::AllocationFailed {
                requested: new_capacity,
            })?;
        new_buf.extend(self.buf.drain(..));
        self.buf = new_buf;
        self.capacity = new_capacity;
        self.generation += 1;
        Ok(())
    }

    fn ensure_capacity(&mut self, need: usize) -> Result<(), ListError> {
        if need <= self.capacity {
            return Ok(());
        }
        let doubled = self
            .capacity
            .checked_mul(2)
            .ok_or(ListError::AllocationFailed { requested: need })?;
        self.realloc_to_fit(doubled.max(need))
    }

    fn shrink_if_necessary(&mut self) {
        if self.len() >= self.capacity / 4 {
            return;
        }
        let new_capacity = (self.capacity / 4).max(DEFAULT_CAPACITY);
        if new_capacity < self.capacity {
            if let Err(e) = self.realloc_to_fit(new_capacity) {
                // The old buffer is still valid; keep using it.
                debug!("shrink skipped: {}", e);
            }
        }
    }
}

impl<T: PartialEq> ArrayList<T> {
    pub fn contains(&self, element: &T) -> bool {
        self.position(element).is_some()
    }

    /// Position of the first element equal to `element`.
    pub fn position(&self, element: &T) -> Option<usize> {
        self.iter().position(|e| e == element)
    }

    /// Position of the first element equal to `element`, or `NPOS`.
    pub fn index_of(&self, element: &T) -> usize {
        self.position(element).unwrap_or(Self::NPOS)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.capacity);
        buf.extend(self.buf.iter().cloned());
        Self {
            buf,
            capacity: self.capacity,
            generation: self.generation,
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.buf[index]
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buf[index]
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            if let Err(e) = self.add(element) {
                panic!("{}", e);
            }
        }
    }
}

impl<T> core::iter::FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

use core::fmt::{Debug, Formatter};

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}
