use crate::array_list::ArrayList;
use crate::error::QueueError;
use crate::heap::{is_heap, reshape_down, reshape_up};
use log::trace;

/// A max-priority queue. `dequeue` always returns the greatest element.
///
/// The elements live in an `ArrayList` kept in max-heap order.
#[derive(Clone)]
pub struct PriorityQueue<T> {
    elements: ArrayList<T>,
    max_len: Option<usize>,
}

impl<T: PartialOrd> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            elements: ArrayList::new(),
            max_len: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: ArrayList::with_capacity(capacity),
            max_len: None,
        }
    }

    /// Creates a queue that holds at most `max_len` elements. `enqueue` on a
    /// full queue returns `QueueError::Full`.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            elements: ArrayList::with_capacity(max_len),
            max_len: Some(max_len),
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// The greatest element, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Inserts an item into the partially-sorted heap.
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError> {
        if let Some(max_len) = self.max_len {
            if self.elements.len() >= max_len {
                return Err(QueueError::Full);
            }
        }
        self.elements.add(item).map_err(|e| {
            trace!("enqueue failed: {}", e);
            QueueError::Full
        })?;
        let last = self.elements.len() - 1;
        reshape_up(self.elements.as_mut_slice(), 0, last);
        trace!("enqueue: len = {}", self.elements.len());
        self.check();
        Ok(())
    }

    /// Removes the greatest item.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.elements.is_empty() {
            return Err(QueueError::Empty);
        }
        let last_index = self.elements.len() - 1;
        self.elements.as_mut_slice().swap(0, last_index);
        let result = self
            .elements
            .remove(last_index)
            .map_err(|_| QueueError::Empty)?;
        if !self.elements.is_empty() {
            let last = self.elements.len() - 1;
            reshape_down(self.elements.as_mut_slice(), 0, last);
        }
        trace!("dequeue: len = {}", self.elements.len());
        self.check();
        Ok(result)
    }

    fn check(&self) {
        debug_assert!(is_heap(self.elements.as_slice()));
    }
}

impl<T: PartialOrd> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

use core::fmt::{Debug, Formatter};

impl<T: Debug> Debug for PriorityQueue<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Q: ")?;
        for item in self.elements.iter() {
            write!(fmt, "{:?} ", item)?;
        }
        Ok(())
    }
}
