//! Classic data structures: a growable array list with an explicit capacity
//! policy, max-heap reshape algorithms, heap sort, and a priority queue built
//! from the two.

pub mod array_list;
pub mod cursor;
pub mod error;
pub mod heap;
pub mod list;
pub mod priority_queue;

#[cfg(test)]
mod testing;

pub use crate::array_list::{ArrayList, DEFAULT_CAPACITY};
pub use crate::cursor::{Cursor, RevCursor};
pub use crate::error::{ListError, Operation, QueueError};
pub use crate::heap::{build_heap, heap_sort, reshape_down, reshape_up};
pub use crate::list::List;
pub use crate::priority_queue::PriorityQueue;
