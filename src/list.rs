//! The list interface. `ArrayList` is the implementation in this crate.

use crate::array_list::ArrayList;
use crate::error::ListError;

/// Returned by `List::index_of` when the element is not present.
pub const NPOS: usize = usize::MAX;

/// An ordered sequence with positional access.
///
/// Usable as a trait object, so element formatting for `to_string_with` is taken
/// as `&dyn Fn`.
pub trait List<T: PartialEq> {
    /// Drops every element.
    fn clear(&mut self);

    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, element: &T) -> bool;

    /// Appends `element`.
    fn add(&mut self, element: T) -> Result<(), ListError>;

    /// Inserts `element` at `index`, which may be `len()`.
    fn insert(&mut self, index: usize, element: T) -> Result<(), ListError>;

    fn get(&self, index: usize) -> Result<&T, ListError>;

    /// Replaces the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, element: T) -> Result<T, ListError>;

    fn remove(&mut self, index: usize) -> Result<T, ListError>;

    /// Position of the first element equal to `element`, or `NPOS`.
    fn index_of(&self, element: &T) -> usize;

    /// Renders the list as `[e0, e1, ..., en]`.
    fn to_string_with(&self, to_string: &dyn Fn(&T) -> String) -> String;
}

impl<T: PartialEq> List<T> for ArrayList<T> {
    fn clear(&mut self) {
        ArrayList::clear(self)
    }

    fn len(&self) -> usize {
        ArrayList::len(self)
    }

    fn is_empty(&self) -> bool {
        ArrayList::is_empty(self)
    }

    fn contains(&self, element: &T) -> bool {
        ArrayList::contains(self, element)
    }

    fn add(&mut self, element: T) -> Result<(), ListError> {
        ArrayList::add(self, element)
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), ListError> {
        ArrayList::insert(self, index, element)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        ArrayList::get(self, index)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, ListError> {
        ArrayList::set(self, index, element)
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        ArrayList::remove(self, index)
    }

    fn index_of(&self, element: &T) -> usize {
        ArrayList::index_of(self, element)
    }

    fn to_string_with(&self, to_string: &dyn Fn(&T) -> String) -> String {
        ArrayList::to_string_with(self, to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operation;
    use crate::testing::*;
    use log::info;

    fn exercise(list: &mut dyn List<i32>) {
        assert!(list.is_empty());
        for &x in [1, 3, 5, 7, 9, 2, 4, 6, 8, 10, 30].iter() {
            list.add(x).unwrap();
        }
        assert_eq!(list.len(), 11);
        list.insert(0, 0).unwrap();
        assert_eq!(list.get(0), Ok(&0));
        assert_eq!(list.get(1), Ok(&1));
        assert_eq!(list.set(1, 11), Ok(1));
        assert_eq!(list.remove(2), Ok(3));
        assert!(list.contains(&30));
        assert!(!list.contains(&3));
        assert_eq!(list.index_of(&5), 2);
        assert_eq!(list.index_of(&3), NPOS);
        assert_eq!(
            list.get(list.len()),
            Err(ListError::OutOfRange {
                operation: Operation::Get,
                index: 11,
                size: 11
            })
        );
        assert_eq!(
            list.to_string_with(&|e| e.to_string()),
            "[0, 11, 5, 7, 9, 2, 4, 6, 8, 10, 30]"
        );
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.to_string_with(&|e| e.to_string()), "[]");
    }

    fn fill<L: List<i32>>(list: &mut L, n: i32) -> usize {
        for i in 0..n {
            list.add(i).unwrap();
        }
        list.len()
    }

    #[test]
    fn array_list_through_trait_object() {
        init_test();
        info!("testing: ArrayList as dyn List");
        let mut list: ArrayList<i32> = ArrayList::new();
        exercise(&mut list);

        let mut boxed: Box<dyn List<i32>> = Box::new(ArrayList::new());
        exercise(boxed.as_mut());
    }

    #[test]
    fn array_list_through_generic() {
        let mut list = ArrayList::new();
        assert_eq!(fill(&mut list, 25), 25);
        assert_eq!(list.capacity(), 40);
        assert_eq!(ArrayList::<i32>::NPOS, NPOS);
    }
}
