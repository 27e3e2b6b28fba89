//! A binary min-heap.
//!
//! Values are stored in a flat vector interpreted as a binary tree, where the
//! parent of index `i` lives at `(i - 1) / 2` and its children at `2i + 1`
//! and `2i + 2`. Every parent compares less than or equal to its children.
//!
//! ```
//! use lib::heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//! heap.push(1);
//!
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(8));
//! assert_eq!(heap.pop(), None);
//! ```

#[cfg(test)]
mod tests;

/// A binary min-heap over totally ordered values.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    values: Vec<T>,
}

impl<T> MinHeap<T> {
    /// Construct a new empty heap.
    #[inline]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Number of values held by the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Test if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Peek at the smallest value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.values.first()
    }

    /// Remove all values.
    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<T> MinHeap<T>
where
    T: Ord,
{
    /// Insert a value.
    pub fn push(&mut self, value: T) {
        self.values.push(value);
        let last = self.values.len() - 1;
        self.sift_up(0, last);
    }

    /// Remove and return the smallest value, or `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        let mut last = self.values.pop()?;

        if self.values.is_empty() {
            return Some(last);
        }

        std::mem::swap(&mut last, &mut self.values[0]);
        self.sift_to_leaf(0);
        Some(last)
    }

    /// Drain the heap into a vector sorted in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.values.len());

        while let Some(value) = self.pop() {
            out.push(value);
        }

        out
    }

    /// Move the value at `index` towards the root, never past `start`.
    fn sift_up(&mut self, start: usize, mut index: usize) {
        while index > start {
            let parent = (index - 1) / 2;

            if self.values[index] >= self.values[parent] {
                break;
            }

            self.values.swap(index, parent);
            index = parent;
        }
    }

    /// Push the value at `index` all the way down to a leaf along the path of
    /// smaller children, then move it back up to where it belongs.
    fn sift_to_leaf(&mut self, start: usize) {
        let len = self.values.len();
        let mut index = start;
        let mut child = 2 * index + 1;

        while child < len {
            let right = child + 1;

            if right < len && self.values[child] >= self.values[right] {
                child = right;
            }

            self.values.swap(index, child);
            index = child;
            child = 2 * index + 1;
        }

        self.sift_up(start, index);
    }
}

impl<T> Default for MinHeap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for MinHeap<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for MinHeap<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
