//! A binary min-heap ordered by a caller-supplied `less` predicate.
//!
//! ```
//! use min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new(|a: &i32, b: &i32| a < b);
//! heap.push_all([7, 3]);
//! assert_eq!(heap.peek(), Some(&3));
//!
//! heap.push_all([11, 4, 4, 5]);
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.into_iter_sorted().collect::<Vec<_>>(), [4, 4, 5, 7, 11]);
//! ```

use core::fmt;
use core::iter::FromIterator;
use core::mem::{self, swap};
use core::ops::{Deref, DerefMut};

use std::collections::TryReserveError;

mod hole;
mod iter;

use hole::Hole;

pub use iter::{Drain, DrainSorted, IntoIter, IntoIterSorted, Iter};

/// A priority queue implemented with a binary heap.
///
/// This is a min-heap: [`pop`] returns the element for which no other
/// element in the heap is `less`, as decided by the predicate given to
/// [`new`]. The predicate must be a strict weak ordering (irreflexive and
/// transitive, with transitive incomparability) and must keep answering the
/// same way for as long as the heap lives.
///
/// It is a logic error for an item to be modified in such a way that its
/// ordering relative to any other item changes while it is in the heap.
/// This is normally only possible through [`Cell`], [`RefCell`], global
/// state, I/O, or unsafe code. The same goes for a predicate that is not a
/// strict weak ordering. The resulting behavior is not specified (it could
/// include panics, incorrect results or non-termination) but will not be
/// undefined behavior.
///
/// # Examples
///
/// ```
/// use min_heap::MinHeap;
///
/// let mut heap = MinHeap::new(|a: &&str, b: &&str| a.len() < b.len());
///
/// // Nothing in there yet.
/// assert_eq!(heap.peek(), None);
///
/// heap.push("banana");
/// heap.push("fig");
/// heap.push("cherry");
///
/// // The shortest word sits at the root.
/// assert_eq!(heap.peek(), Some(&"fig"));
/// assert_eq!(heap.len(), 3);
///
/// assert_eq!(heap.pop(), Some("fig"));
/// assert_eq!(heap.pop().map(str::len), Some(6));
/// assert_eq!(heap.pop().map(str::len), Some(6));
/// assert_eq!(heap.pop(), None);
/// ```
///
/// ## Max-heap
///
/// Flipping the predicate turns the heap upside down.
///
/// ```
/// use min_heap::MinHeap;
///
/// let mut heap = MinHeap::new(|a: &u32, b: &u32| a > b);
/// heap.push_all([1, 5, 2]);
///
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), None);
/// ```
///
/// # Time complexity
///
/// | [push]        | [pop]         | [peek]/[peek\_mut] |
/// |---------------|---------------|--------------------|
/// | *O*(log(*n*)) | *O*(log(*n*)) | *O*(1)             |
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
/// [`new`]: MinHeap::new
/// [push]: MinHeap::push
/// [pop]: MinHeap::pop
/// [`pop`]: MinHeap::pop
/// [peek]: MinHeap::peek
/// [peek\_mut]: MinHeap::peek_mut
pub struct MinHeap<T, F> {
    data: Vec<T>,
    less: F,
}

/// A `MinHeap` ordered by `T`'s own [`Ord`] implementation.
pub type OrdHeap<T> = MinHeap<T, fn(&T, &T) -> bool>;

fn natural_less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

/// Structure wrapping a mutable reference to the smallest item on a
/// `MinHeap`.
///
/// This `struct` is created by the [`peek_mut`] method on [`MinHeap`]. See
/// its documentation for more.
///
/// [`peek_mut`]: MinHeap::peek_mut
pub struct PeekMut<'a, T: 'a, F: 'a + Fn(&T, &T) -> bool> {
    heap: &'a mut MinHeap<T, F>,
    sift: bool,
}

impl<T: fmt::Debug, F: Fn(&T, &T) -> bool> fmt::Debug for PeekMut<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PeekMut").field(&self.heap.data[0]).finish()
    }
}

impl<T, F: Fn(&T, &T) -> bool> Drop for PeekMut<'_, T, F> {
    fn drop(&mut self) {
        if self.sift {
            // SAFETY: PeekMut is only created for non-empty heaps.
            unsafe { self.heap.sift_down(0) };
        }
    }
}

impl<T, F: Fn(&T, &T) -> bool> Deref for PeekMut<'_, T, F> {
    type Target = T;
    fn deref(&self) -> &T {
        debug_assert!(!self.heap.is_empty());
        // SAFETY: PeekMut is only created for non-empty heaps.
        unsafe { self.heap.data.get_unchecked(0) }
    }
}

impl<T, F: Fn(&T, &T) -> bool> DerefMut for PeekMut<'_, T, F> {
    fn deref_mut(&mut self) -> &mut T {
        debug_assert!(!self.heap.is_empty());
        self.sift = true;
        // SAFETY: PeekMut is only created for non-empty heaps.
        unsafe { self.heap.data.get_unchecked_mut(0) }
    }
}

impl<'a, T, F: Fn(&T, &T) -> bool> PeekMut<'a, T, F> {
    /// Removes the peeked value from the heap and returns it.
    pub fn pop(mut this: PeekMut<'a, T, F>) -> T {
        // The root is about to leave; the rest of the tree is still a heap.
        this.sift = false;
        // SAFETY: PeekMut is only created for non-empty heaps.
        unsafe { this.heap.pop().unwrap_unchecked() }
    }
}

/// Heapifies the whole array when dropped; forgotten on the happy path.
struct RebuildOnDrop<'a, T, F: Fn(&T, &T) -> bool> {
    heap: &'a mut MinHeap<T, F>,
}

impl<T, F: Fn(&T, &T) -> bool> Drop for RebuildOnDrop<'_, T, F> {
    fn drop(&mut self) {
        self.heap.rebuild();
    }
}

impl<T: Clone, F: Clone> Clone for MinHeap<T, F> {
    fn clone(&self) -> Self {
        MinHeap {
            data: self.data.clone(),
            less: self.less.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.less = source.less.clone();
    }
}

impl<T: fmt::Debug, F> fmt::Debug for MinHeap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Ord> MinHeap<T, fn(&T, &T) -> bool> {
    /// Creates an empty heap ordered by `T`'s [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    ///
    /// let mut heap = MinHeap::natural();
    /// heap.push(2);
    /// heap.push(1);
    /// assert_eq!(heap.pop(), Some(1));
    /// ```
    #[must_use]
    pub fn natural() -> Self {
        MinHeap::new(natural_less::<T> as fn(&T, &T) -> bool)
    }
}

impl<T: Ord> Default for MinHeap<T, fn(&T, &T) -> bool> {
    /// Creates an empty `OrdHeap<T>`.
    #[inline]
    fn default() -> Self {
        MinHeap::natural()
    }
}

impl<T, F: Fn(&T, &T) -> bool> MinHeap<T, F> {
    /// Creates an empty `MinHeap` ordered by `less`.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new(|a: &i64, b: &i64| a < b);
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn new(less: F) -> MinHeap<T, F> {
        MinHeap { data: vec![], less }
    }

    /// Creates an empty `MinHeap` with room for at least `capacity`
    /// elements before it reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::with_capacity(10, |a: &u8, b: &u8| a < b);
    /// assert!(heap.capacity() >= 10);
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize, less: F) -> MinHeap<T, F> {
        MinHeap {
            data: Vec::with_capacity(capacity),
            less,
        }
    }

    /// Turns `vec` into a heap in place, in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    ///
    /// let heap = MinHeap::from_vec(vec![9, 2, 7, 1], |a: &i32, b: &i32| a < b);
    /// assert_eq!(heap.peek(), Some(&1));
    /// assert!(heap.check_integrity());
    /// ```
    #[must_use]
    pub fn from_vec(vec: Vec<T>, less: F) -> MinHeap<T, F> {
        let mut heap = MinHeap { data: vec, less };
        heap.rebuild();
        heap
    }

    /// Returns a mutable reference to the smallest item in the heap, or
    /// `None` if it is empty.
    ///
    /// The heap is repaired when the returned guard is dropped. If the
    /// `PeekMut` value is leaked, the heap may be left out of order.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new(|a: &i32, b: &i32| a < b);
    /// assert!(heap.peek_mut().is_none());
    ///
    /// heap.push_all([1, 5, 2]);
    /// {
    ///     let mut val = heap.peek_mut().unwrap();
    ///     *val = 10;
    /// }
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    ///
    /// # Time complexity
    ///
    /// If the item is modified then the worst case time complexity is *O*(log(*n*)),
    /// otherwise it's *O*(1).
    pub fn peek_mut(&mut self) -> Option<PeekMut<'_, T, F>> {
        if self.is_empty() {
            None
        } else {
            Some(PeekMut {
                heap: self,
                sift: false,
            })
        }
    }

    /// Removes the smallest item from the heap and returns it, or `None`
    /// if it is empty.
    ///
    /// The last element takes the root's place and is sifted down: at each
    /// level it trades places with the smaller child (the right one only if
    /// it is strictly `less` than the left) while that child is `less` than it.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::from_vec(vec![3, 1], |a: &i32, b: &i32| a < b);
    ///
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), None);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a heap containing *n* elements is *O*(log(*n*)).
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop().map(|mut item| {
            if !self.is_empty() {
                swap(&mut item, &mut self.data[0]);
                // SAFETY: !self.is_empty() means that self.len() > 0
                unsafe { self.sift_down(0) };
            }

            item
        })
    }

    /// Pushes an item onto the heap and sifts it up to its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new(|a: &i32, b: &i32| a < b);
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)) comparisons in the worst case, when the new item is
    /// smaller than everything already in the heap. Reallocation of the
    /// backing vector is amortized over all pushes.
    pub fn push(&mut self, item: T) {
        let old_len = self.len();
        self.data.push(item);
        // SAFETY: Since we pushed a new item it means that
        //  old_len = self.len() - 1 < self.len()
        unsafe { self.sift_up(0, old_len) };
    }

    /// Pushes every item from `items`, in order.
    ///
    /// All items are appended first, then each one is sifted up in turn, so
    /// this costs the same as calling [`push`](MinHeap::push) repeatedly.
    /// An empty `items` leaves the heap untouched.
    ///
    /// If `less` (or the iterator) panics midway, the heap is rebuilt while
    /// unwinding, so it holds every element that made it in and is still
    /// in heap order.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new(|a: &i32, b: &i32| a < b);
    /// heap.push_all([7, 3]);
    /// heap.push_all(Vec::new());
    ///
    /// assert_eq!(heap.len(), 2);
    /// assert_eq!(heap.peek(), Some(&3));
    /// ```
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let start = self.len();
        let mut guard = RebuildOnDrop { heap: self };
        guard.heap.data.extend(items);
        for i in start..guard.heap.len() {
            // SAFETY: i < self.len()
            unsafe { guard.heap.sift_up(0, i) };
        }
        mem::forget(guard);
    }

    /// Returns `true` when no element is `less` than its parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new(|a: &i32, b: &i32| a < b);
    /// heap.push_all([5, 4, 3, 2, 1]);
    /// assert!(heap.check_integrity());
    /// ```
    #[must_use]
    pub fn check_integrity(&self) -> bool {
        (1..self.data.len()).all(|i| !(self.less)(&self.data[i], &self.data[(i - 1) / 2]))
    }

    /// Consumes the `MinHeap` and returns a vector sorted in ascending
    /// order, smallest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    ///
    /// let mut heap = MinHeap::from_vec(vec![1, 2, 4, 5, 7], |a: &i32, b: &i32| a < b);
    /// heap.push(6);
    /// heap.push(3);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            // Park the current minimum just past the shrinking heap.
            self.data.swap(0, end);
            // SAFETY: 0 < 1 <= end < self.len()
            unsafe { self.sift_down_range(0, end) };
        }
        let mut vec = self.data;
        vec.reverse();
        vec
    }

    // The sift routines move an element out of the vector (leaving behind a
    // hole), shift the others along, and put the element back at the final
    // position of the hole. The `Hole` refills itself on drop, so a panicking
    // `less` cannot leave a duplicated or missing element behind.

    /// Moves the element at `pos` towards the root while it is `less` than
    /// its parent, never going above `start`.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    #[allow(unused_unsafe)]
    unsafe fn sift_up(&mut self, start: usize, pos: usize) {
        // SAFETY: The caller guarantees that pos < self.len()
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > start {
            let parent = (hole.pos() - 1) / 2;

            // SAFETY: hole.pos() > start >= 0, so parent < hole.pos() is a
            //  valid index distinct from the hole.
            if !(self.less)(hole.element(), unsafe { hole.get(parent) }) {
                break;
            }

            // SAFETY: Same as above
            unsafe { hole.move_to(parent) };
        }
    }

    /// Moves the element at `pos` towards the leaves while one of its
    /// children within `..end` is `less` than it.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < end <= self.len()`.
    #[allow(unused_unsafe)]
    unsafe fn sift_down_range(&mut self, pos: usize, end: usize) {
        // SAFETY: The caller guarantees that pos < end <= self.len().
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };
        let mut child = 2 * hole.pos() + 1;

        // Loop invariant: child == 2 * hole.pos() + 1, and both children exist.
        while child <= end.saturating_sub(2) {
            // SAFETY: child + 1 < end <= self.len(), and neither child is the hole.
            child += unsafe { (self.less)(hole.get(child + 1), hole.get(child)) } as usize;

            // SAFETY: child is one of the two children checked above.
            if !(self.less)(unsafe { hole.get(child) }, hole.element()) {
                return;
            }

            // SAFETY: same as above.
            unsafe { hole.move_to(child) };
            child = 2 * hole.pos() + 1;
        }

        // A lone left child at the very end of the range.
        // SAFETY: && short-circuits, so child == end - 1 < self.len() when
        //  the comparison runs.
        if child == end - 1 && (self.less)(unsafe { hole.get(child) }, hole.element()) {
            // SAFETY: child is a valid index distinct from the hole.
            unsafe { hole.move_to(child) };
        }
    }

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    #[allow(unused_unsafe)]
    unsafe fn sift_down(&mut self, pos: usize) {
        let len = self.len();
        // SAFETY: pos < len is guaranteed by the caller.
        unsafe { self.sift_down_range(pos, len) };
    }

    /// Restores the heap property when `data[..start]` is already a heap.
    fn rebuild_tail(&mut self, start: usize) {
        if start == self.len() {
            return;
        }

        let tail_len = self.len() - start;

        #[inline(always)]
        fn log2_fast(x: usize) -> usize {
            (usize::BITS - x.leading_zeros() - 1) as usize
        }

        // A full rebuild costs about 2 * len comparisons, sifting the tail up
        // one by one about tail_len * log2(start). Past 2048 elements the
        // log term is pinned to 11, which matches measured crossover points.
        let better_to_rebuild = if start < tail_len {
            true
        } else if self.len() <= 2048 {
            2 * self.len() < tail_len * log2_fast(start)
        } else {
            2 * self.len() < tail_len * 11
        };

        if better_to_rebuild {
            self.rebuild();
        } else {
            for i in start..self.len() {
                // SAFETY: i < self.len()
                unsafe { self.sift_up(0, i) };
            }
        }
    }

    /// Floyd's bottom-up heap construction.
    fn rebuild(&mut self) {
        let mut n = self.len() / 2;
        while n > 0 {
            n -= 1;
            // SAFETY: n < self.len() / 2 <= self.len()
            unsafe { self.sift_down(n) };
        }
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    ///
    /// `other` must be ordered the same way as `self`; its own comparator
    /// is left in place and not consulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    ///
    /// let less = |a: &i32, b: &i32| a < b;
    /// let mut a = MinHeap::from_vec(vec![-10, 1, 2, 3, 3], less);
    /// let mut b = MinHeap::from_vec(vec![-20, 5, 43], less);
    ///
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.into_sorted_vec(), [-20, -10, 1, 2, 3, 3, 5, 43]);
    /// assert!(b.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if self.len() < other.len() {
            swap(&mut self.data, &mut other.data);
        }

        let start = self.data.len();

        self.data.append(&mut other.data);

        self.rebuild_tail(start);
    }

    /// Clears the heap, returning an iterator over the removed elements in
    /// pop order. If the iterator is dropped before being fully consumed,
    /// the remaining elements are still removed in pop order.
    ///
    /// Note:
    /// * `.drain_sorted()` is *O*(*n* \* log(*n*)); much slower than `.drain()`.
    ///   You should use the latter for most cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    ///
    /// let mut heap = MinHeap::from_vec(vec![4, 1, 3, 2, 5], |a: &i32, b: &i32| a < b);
    /// assert_eq!(heap.drain_sorted().take(2).collect::<Vec<_>>(), [1, 2]);
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, F> {
        DrainSorted { inner: self }
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` for which `f(&e)` returns
    /// `false`. The elements are visited in unsorted (and unspecified) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    ///
    /// let mut heap = MinHeap::from_vec(vec![-10, -5, 1, 2, 4, 13], |a: &i32, b: &i32| a < b);
    ///
    /// heap.retain(|x| x % 2 == 0); // only keep even numbers
    ///
    /// assert_eq!(heap.into_sorted_vec(), [-10, 2, 4])
    /// ```
    pub fn retain<P>(&mut self, mut f: P)
    where
        P: FnMut(&T) -> bool,
    {
        let mut first_removed = self.len();
        let mut i = 0;
        self.data.retain(|e| {
            let keep = f(e);
            if !keep && i < first_removed {
                first_removed = i;
            }
            i += 1;
            keep
        });
        // data[..first_removed] is untouched, so only the tail needs repair.
        self.rebuild_tail(first_removed);
    }
}

impl<T, F> MinHeap<T, F> {
    /// Returns an iterator visiting all values in the backing array, in
    /// arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let heap = MinHeap::from_vec(vec![1, 2, 3, 4], |a: &i32, b: &i32| a < b);
    ///
    /// assert_eq!(heap.iter().copied().sum::<i32>(), 10);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.data.iter(),
        }
    }

    /// Returns an iterator which pops elements in heap order, consuming the
    /// heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let heap = MinHeap::from_vec(vec![1, 2, 3, 4, 5], |a: &i32, b: &i32| a < b);
    ///
    /// assert_eq!(heap.into_iter_sorted().take(2).collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, F> {
        IntoIterSorted { inner: self }
    }

    /// Returns the smallest item in the heap, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new(|a: &i32, b: &i32| a < b);
    /// assert_eq!(heap.peek(), None);
    ///
    /// heap.push_all([1, 5, 2]);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The predicate the heap was built with.
    #[must_use]
    pub fn comparator(&self) -> &F {
        &self.less
    }

    /// The backing array, laid out as an implicit binary tree: the children
    /// of index `i` live at `2i + 1` and `2i + 2`.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the number of elements the heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves the minimum capacity for exactly `additional` more elements.
    /// Does nothing if the capacity is already sufficient.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new(|a: &i32, b: &i32| a < b);
    /// heap.reserve(100);
    /// assert!(heap.capacity() >= 100);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Tries to reserve the minimum capacity for exactly `additional` more
    /// elements.
    ///
    /// # Errors
    ///
    /// If the capacity overflows, or the allocator reports a failure, then an error
    /// is returned.
    pub fn try_reserve_exact(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.data.try_reserve_exact(additional)
    }

    /// Tries to reserve capacity for at least `additional` more elements.
    ///
    /// # Errors
    ///
    /// If the capacity overflows, or the allocator reports a failure, then an error
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// use std::collections::TryReserveError;
    ///
    /// fn smallest(data: &[u32]) -> Result<Option<u32>, TryReserveError> {
    ///     let mut heap = MinHeap::new(|a: &u32, b: &u32| a < b);
    ///
    ///     // Pre-reserve the memory, exiting if we can't
    ///     heap.try_reserve(data.len())?;
    ///
    ///     heap.extend(data);
    ///     Ok(heap.pop())
    /// }
    /// assert_eq!(smallest(&[3, 1, 2]), Ok(Some(1)));
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.data.try_reserve(additional)
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Discards capacity down to, but not below, `min_capacity` and the
    /// current length.
    #[inline]
    pub fn shrink_to(&mut self, min_capacity: usize) {
        self.data.shrink_to(min_capacity)
    }

    /// Consumes the `MinHeap` and returns the backing vector in arbitrary
    /// order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new(|a: &i32, b: &i32| a < b);
    ///
    /// assert!(heap.is_empty());
    /// heap.push(3);
    /// assert!(!heap.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the heap, returning an iterator over the removed elements in
    /// arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::from_vec(vec![1, 3], |a: &i32, b: &i32| a < b);
    ///
    /// assert_eq!(heap.drain().count(), 2);
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain {
            iter: self.data.drain(..),
        }
    }

    /// Drops all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T, fn(&T, &T) -> bool> {
    /// Converts a `Vec<T>` into an `OrdHeap<T>`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> Self {
        MinHeap::from_vec(vec, natural_less::<T> as fn(&T, &T) -> bool)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for MinHeap<T, fn(&T, &T) -> bool> {
    /// ```
    /// use min_heap::OrdHeap;
    ///
    /// let mut h1 = OrdHeap::from([1, 4, 2, 3]);
    /// let mut h2: OrdHeap<_> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().zip(h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, F> From<MinHeap<T, F>> for Vec<T> {
    /// Converts a `MinHeap<T, F>` into its backing `Vec<T>`.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: MinHeap<T, F>) -> Vec<T> {
        heap.data
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T, fn(&T, &T) -> bool> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MinHeap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, F> IntoIterator for MinHeap<T, F> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator that moves each value out of the heap
    /// in arbitrary order.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            iter: self.data.into_iter(),
        }
    }
}

impl<'a, T, F> IntoIterator for &'a MinHeap<T, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, F: Fn(&T, &T) -> bool> Extend<T> for MinHeap<T, F> {
    /// Appends everything, then repairs the tail either by sifting each new
    /// element up or by rebuilding the whole heap, whichever is cheaper.
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let start = self.len();
        self.data.extend(iter);
        self.rebuild_tail(start);
    }
}

impl<'a, T: 'a + Copy, F: Fn(&T, &T) -> bool> Extend<&'a T> for MinHeap<T, F> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
