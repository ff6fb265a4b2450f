//! Max-heap maintenance over an indexable sequence.
//!
//! The sequence is read as a binary tree: the children of node `i` are at
//! `2i + 1` and `2i + 2`. Every operation works within a range `[root, bottom]`
//! and only maintains the heap property inside it. Passing a range that does not
//! fit the sequence is a bug in the caller and panics.

fn left(parent: usize) -> usize {
    parent * 2 + 1
}
fn parent(child: usize) -> usize {
    (child - 1) / 2
}

fn check_range<T>(elements: &[T], root: usize, bottom: usize) {
    assert!(
        root < elements.len(),
        "root {} out of bounds (len {})",
        root,
        elements.len()
    );
    assert!(
        bottom < elements.len(),
        "bottom {} out of bounds (len {})",
        bottom,
        elements.len()
    );
    assert!(root <= bottom, "root {} is past bottom {}", root, bottom);
}

/// Moves the value at `root` down until neither child in `[root, bottom]` is
/// greater than it. When both children are greater, the larger one is swapped
/// up; equal children favor the left.
pub fn reshape_down<T: PartialOrd>(elements: &mut [T], root: usize, bottom: usize) {
    check_range(elements, root, bottom);
    let mut root = root;
    loop {
        let left_child = left(root);
        if left_child > bottom {
            return;
        }
        let right_child = left_child + 1;
        let max_child = if right_child > bottom {
            left_child
        } else if elements[left_child] < elements[right_child] {
            right_child
        } else {
            left_child
        };
        if elements[root] < elements[max_child] {
            elements.swap(root, max_child);
            root = max_child;
        } else {
            return;
        }
    }
}

/// Moves the value at `bottom` up toward `root` until its parent is not smaller.
/// `bottom` must lie in the subtree of `root`.
pub fn reshape_up<T: PartialOrd>(elements: &mut [T], root: usize, bottom: usize) {
    check_range(elements, root, bottom);
    let mut bottom = bottom;
    while bottom > root {
        let parent = parent(bottom);
        assert!(
            parent >= root,
            "bottom {} is not below root {} in the heap",
            bottom,
            root
        );
        if elements[parent] < elements[bottom] {
            elements.swap(parent, bottom);
            bottom = parent;
        } else {
            return;
        }
    }
}

/// Rearranges `elements` into a max-heap.
pub fn build_heap<T: PartialOrd>(elements: &mut [T]) {
    let len = elements.len();
    let mut end = len / 2;
    while end > 0 {
        end -= 1;
        reshape_down(elements, end, len - 1);
    }
}

/// Sorts `elements` in ascending order.
pub fn heap_sort<T: PartialOrd>(elements: &mut [T]) {
    build_heap(elements);
    let mut end = elements.len();
    while end > 1 {
        end -= 1;
        elements.swap(0, end);
        reshape_down(elements, 0, end - 1);
    }
}

/// Returns true if `elements` is a max-heap.
pub fn is_heap<T: PartialOrd>(elements: &[T]) -> bool {
    elements.is_empty() || is_heap_range(elements, 0, elements.len() - 1)
}

/// Returns true if no node in `[root, bottom]` is smaller than a child that is
/// also in `[root, bottom]`.
pub fn is_heap_range<T: PartialOrd>(elements: &[T], root: usize, bottom: usize) -> bool {
    check_range(elements, root, bottom);
    (root + 1..=bottom)
        .filter(|&i| parent(i) >= root)
        .all(|i| !(elements[parent(i)] < elements[i]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use log::info;

    #[test]
    fn heap_sort_test() {
        init_test();

        fn case(description: &str, input: &[i32], expected: &[i32]) {
            info!("testing: {}", description);
            let mut v = input.to_vec();
            heap_sort(&mut v);
            assert_eq!(v, expected, "{}", description);
        }

        case(
            "mixed",
            &[9, 8, 7, 6, 5, 10, 21, 22, 15, 14],
            &[5, 6, 7, 8, 9, 10, 14, 15, 21, 22],
        );
        case("empty", &[], &[]);
        case("single", &[42], &[42]);
        case("two reversed", &[2, 1], &[1, 2]);
        case("already sorted", &[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]);
        case("duplicates", &[3, 1, 3, 2, 1, 3], &[1, 1, 2, 3, 3, 3]);
        case("negatives", &[0, -5, 7, -1, 3], &[-5, -1, 0, 3, 7]);
    }

    #[test]
    fn heap_sort_pseudo_random() {
        // Linear congruential sequence; the same 500 values every run.
        let mut state: u32 = 12345;
        let mut v: Vec<u32> = (0..500)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
                state >> 16
            })
            .collect();
        let mut expected = v.clone();
        expected.sort();
        heap_sort(&mut v);
        assert_eq!(v, expected);
    }

    #[test]
    fn heap_sort_floats() {
        let mut v = vec![2.5, -1.0, 0.25, 9.0];
        heap_sort(&mut v);
        assert_eq!(v, [-1.0, 0.25, 2.5, 9.0]);
    }

    #[test]
    fn build_heap_test() {
        fn case(input: &[i32]) {
            let mut v = input.to_vec();
            build_heap(&mut v);
            assert!(is_heap(&v), "{:?} -> {:?}", input, v);
            let mut a = input.to_vec();
            let mut b = v.clone();
            a.sort();
            b.sort();
            assert_eq!(a, b);
        }

        case(&[]);
        case(&[1]);
        case(&[1, 2]);
        case(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        case(&[9, 8, 7, 6, 5, 10, 21, 22, 15, 14]);
        case(&[5, 5, 5, 5]);
    }

    #[test]
    fn reshape_down_test() {
        // Root too small; both subtrees are heaps.
        let mut v = vec![1, 9, 8, 7, 6, 5, 4];
        reshape_down(&mut v, 0, 6);
        assert_eq!(v, [9, 7, 8, 1, 6, 5, 4]);
        assert!(is_heap(&v));

        // Equal children: the left one is taken.
        let mut v = vec![1, 5, 5];
        reshape_down(&mut v, 0, 2);
        assert_eq!(v, [5, 1, 5]);

        // Right child out of range.
        let mut v = vec![1, 5, 100];
        reshape_down(&mut v, 0, 1);
        assert_eq!(v, [5, 1, 100]);

        // Leaf root is a no-op.
        let mut v = vec![1, 2, 3];
        reshape_down(&mut v, 2, 2);
        assert_eq!(v, [1, 2, 3]);

        // Elements outside [root, bottom] are not touched.
        let mut v = vec![0, 1, 2, 3, 4, 5, 6];
        reshape_down(&mut v, 1, 4);
        assert_eq!(v, [0, 4, 2, 3, 1, 5, 6]);
    }

    #[test]
    fn reshape_up_test() {
        let mut v = vec![9, 7, 8, 1, 6, 5, 10];
        reshape_up(&mut v, 0, 6);
        assert_eq!(v, [10, 7, 9, 1, 6, 5, 8]);
        assert!(is_heap(&v));

        // Stops once the parent is not smaller.
        let mut v = vec![9, 7, 8, 1, 6, 5, 3];
        reshape_up(&mut v, 0, 6);
        assert_eq!(v, [9, 7, 8, 1, 6, 5, 3]);

        // Stops at root even if root's parent would be smaller.
        let mut v = vec![1, 2, 3, 4, 50];
        reshape_up(&mut v, 1, 4);
        assert_eq!(v, [1, 50, 3, 4, 2]);

        let mut v = vec![3];
        reshape_up(&mut v, 0, 0);
        assert_eq!(v, [3]);
    }

    #[test]
    fn reshape_up_builds_heap_incrementally() {
        let input = [1, 3, 5, 7, 9, 20, 18, 16, 14, 12];
        let mut v = Vec::new();
        for &x in input.iter() {
            v.push(x);
            let last = v.len() - 1;
            reshape_up(&mut v, 0, last);
            assert!(is_heap(&v), "{:?}", v);
        }
        assert_eq!(v[0], 20);
    }

    #[test]
    fn is_heap_range_test() {
        let v = [1, 9, 8, 7, 6];
        assert!(!is_heap(&v));
        assert!(is_heap_range(&v, 1, 4));
        assert!(is_heap_range(&v, 3, 4));
    }

    #[test]
    #[should_panic(expected = "is past bottom")]
    fn reshape_down_root_below_bottom() {
        let mut v = vec![1, 2, 3];
        reshape_down(&mut v, 2, 1);
    }

    #[test]
    #[should_panic(expected = "is not below root")]
    fn reshape_up_bottom_outside_root_subtree() {
        // The parent of 3 is 1, which is outside [2, 3].
        let mut v = vec![0, 1, 2, 9];
        reshape_up(&mut v, 2, 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn reshape_up_bottom_out_of_bounds() {
        let mut v = vec![1, 2, 3];
        reshape_up(&mut v, 0, 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn reshape_down_on_empty() {
        let mut v: Vec<i32> = Vec::new();
        reshape_down(&mut v, 0, 0);
    }
}
