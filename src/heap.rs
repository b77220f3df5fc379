//! An array-backed binary min-heap with a pluggable comparator.
//!
//! The smallest element under the comparator can be peeked in `O(1)` and
//! removed in `O(log n)`. Insertion is `O(log n)` and building a heap from an
//! existing `Vec` is `O(n)`.
//!
//! By default this is a min-heap over `Ord`. Passing a comparator that
//! reverses its arguments turns it into a max-heap.

use std::cmp::Ordering;

use crate::heap_primitives::index_first_leaf;
use crate::heap_primitives::index_left_child;
use crate::heap_primitives::index_parent;
use crate::heap_primitives::index_right_child;

/// The default comparator, natural `Ord` ordering.
#[inline(always)]
#[must_use]
pub fn natural_order<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// A binary min-heap ordered by a caller-supplied comparator.
///
/// Duplicate elements and duplicate keys are fine. The comparator may declare
/// ties; the order in which tied elements pop is unspecified.
#[derive(Clone, Debug)]
pub struct Heap<T, F = fn(&T, &T) -> Ordering>
where
    F: Fn(&T, &T) -> Ordering,
{
    contents: Vec<T>,
    compare: F,
}

impl<T: Ord> Heap<T> {
    /// An empty heap using natural `Ord` ordering.
    #[must_use]
    pub fn new() -> Self {
        Self {
            contents: Vec::new(),
            compare: natural_order::<T>,
        }
    }

    /// Heapifies `contents` bottom-up under natural `Ord` ordering.
    #[must_use]
    pub fn from_vec(contents: Vec<T>) -> Self {
        Self::from_vec_by(contents, natural_order::<T>)
    }
}

impl<T: Ord> Default for Heap<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// An empty heap ordered by `compare`.
    #[must_use]
    pub fn new_by(compare: F) -> Self {
        Self {
            contents: Vec::new(),
            compare,
        }
    }

    /// Heapifies `contents` bottom-up under `compare`.
    ///
    /// Sifts down every internal node from the last one to the root, which is
    /// `O(n)` overall rather than the `O(n log n)` of repeated pushes.
    #[must_use]
    pub fn from_vec_by(contents: Vec<T>, compare: F) -> Self {
        let mut heap = Self { contents, compare };
        for i in (0..index_first_leaf(heap.contents.len())).rev() {
            heap.sift_down(i);
        }
        heap.verify_heap();
        heap
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// The current minimum, without removing it.
    #[inline(always)]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.contents.first()
    }

    /// Inserts an element.
    ///
    /// Appends and sifts the new element up towards the root while its parent
    /// compares greater.
    pub fn push(&mut self, item: T) {
        self.contents.push(item);
        self.sift_up(self.contents.len() - 1);
        self.verify_heap();
    }

    /// Removes and returns the minimum element, `None` when empty.
    ///
    /// Swaps the last element to the root and sifts it down towards whichever
    /// child compares smaller.
    pub fn pop(&mut self) -> Option<T> {
        let value = match self.contents.len() {
            0 | 1 => self.contents.pop(),
            len => {
                self.contents.swap(0, len - 1);
                let value = self.contents.pop();
                self.sift_down(0);
                value
            }
        };
        self.verify_heap();
        value
    }

    /// Raises a node while it compares smaller than its parent.
    fn sift_up(&mut self, index: usize) {
        debug_assert!(index < self.contents.len());

        let mut pos = index;
        while pos > 0 {
            let parent = index_parent(pos);
            if (self.compare)(&self.contents[parent], &self.contents[pos]) != Ordering::Greater {
                break;
            }
            self.contents.swap(parent, pos);
            pos = parent;
        }
    }

    /// Lowers a node while it compares greater than its smallest child.
    fn sift_down(&mut self, index: usize) {
        let len = self.contents.len();
        debug_assert!(index < len || len == 0);

        let mut pos = index;
        loop {
            let left = index_left_child(pos);
            if left >= len {
                break;
            }
            let right = index_right_child(pos);
            let mut smallest = left;
            if right < len
                && (self.compare)(&self.contents[right], &self.contents[left]) == Ordering::Less
            {
                smallest = right;
            }
            if (self.compare)(&self.contents[pos], &self.contents[smallest]) != Ordering::Greater {
                break;
            }
            self.contents.swap(pos, smallest);
            pos = smallest;
        }
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    fn verify_heap(&self) {
        // All good... (hopefully)
    }
    #[cfg(feature = "verify")]
    fn verify_heap(&self) {
        // Every node goes after its parent node, if any.
        for i in 1..self.contents.len() {
            let p = index_parent(i);
            debug_assert!(
                (self.compare)(&self.contents[p], &self.contents[i]) != Ordering::Greater,
                "Node[{p}] > child [{i}]. Out of heap of len={}",
                self.contents.len(),
            );
        }
    }
}
