use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use std::slice;
use std::vec;

use crate::MinHeap;

/// An iterator over the elements of a `MinHeap`, in backing-array order.
///
/// This `struct` is created by [`MinHeap::iter()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    pub(crate) iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `MinHeap`, in arbitrary order.
///
/// This `struct` is created by `MinHeap::into_iter()` (provided by the
/// [`IntoIterator`] trait).
#[derive(Clone)]
pub struct IntoIter<T> {
    pub(crate) iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter")
            .field(&self.iter.as_slice())
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// An owning iterator that yields elements in pop order, smallest first.
///
/// This `struct` is created by [`MinHeap::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct IntoIterSorted<T, F> {
    pub(crate) inner: MinHeap<T, F>,
}

impl<T: fmt::Debug, F> fmt::Debug for IntoIterSorted<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIterSorted")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<T, F: Fn(&T, &T) -> bool> Iterator for IntoIterSorted<T, F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, F: Fn(&T, &T) -> bool> ExactSizeIterator for IntoIterSorted<T, F> {}

impl<T, F: Fn(&T, &T) -> bool> FusedIterator for IntoIterSorted<T, F> {}

/// A draining iterator over the elements of a `MinHeap`, in arbitrary order.
///
/// This `struct` is created by [`MinHeap::drain()`].
#[derive(Debug)]
pub struct Drain<'a, T: 'a> {
    pub(crate) iter: vec::Drain<'a, T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

/// A draining iterator that yields elements in pop order, smallest first.
///
/// This `struct` is created by [`MinHeap::drain_sorted()`]. Dropping it early
/// still empties the heap, removing the rest in pop order.
pub struct DrainSorted<'a, T, F: Fn(&T, &T) -> bool> {
    pub(crate) inner: &'a mut MinHeap<T, F>,
}

impl<T: fmt::Debug, F: Fn(&T, &T) -> bool> fmt::Debug for DrainSorted<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrainSorted")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<'a, T, F: Fn(&T, &T) -> bool> Drop for DrainSorted<'a, T, F> {
    fn drop(&mut self) {
        // Keeps popping if an element's destructor panics.
        struct DropGuard<'r, 'a, T, F: Fn(&T, &T) -> bool>(&'r mut DrainSorted<'a, T, F>);

        impl<'r, 'a, T, F: Fn(&T, &T) -> bool> Drop for DropGuard<'r, 'a, T, F> {
            fn drop(&mut self) {
                while self.0.inner.pop().is_some() {}
            }
        }

        while let Some(item) = self.inner.pop() {
            let guard = DropGuard(self);
            drop(item);
            mem::forget(guard);
        }
    }
}

impl<T, F: Fn(&T, &T) -> bool> Iterator for DrainSorted<'_, T, F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, F: Fn(&T, &T) -> bool> ExactSizeIterator for DrainSorted<'_, T, F> {}

impl<T, F: Fn(&T, &T) -> bool> FusedIterator for DrainSorted<'_, T, F> {}
