use core::mem::ManuallyDrop;
use core::ptr;

/// A vacated slot in the heap's backing slice.
///
/// The element that used to live at `pos` is held aside in `elt` while the
/// sift routines shift parents or children into the gap. Whatever happens,
/// including a panic inside the caller's comparator, dropping the `Hole`
/// writes `elt` back at the current position so the slice is whole again.
pub(crate) struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Lifts the element at `pos` out of `data`.
    ///
    /// # Safety
    ///
    /// `pos` must be in bounds of `data`.
    #[inline]
    #[allow(unused_unsafe)]
    pub(crate) unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFETY: pos is in bounds; the copy is owned by the hole until drop.
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole {
            data,
            elt: ManuallyDrop::new(elt),
            pos,
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// The element lifted out of the slice.
    #[inline]
    pub(crate) fn element(&self) -> &T {
        &self.elt
    }

    /// # Safety
    ///
    /// `index` must be in bounds and must not be the hole itself.
    #[inline]
    #[allow(unused_unsafe)]
    pub(crate) unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Shifts the element at `index` into the hole, leaving the hole at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and must not be the hole itself.
    #[inline]
    #[allow(unused_unsafe)]
    pub(crate) unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let base = self.data.as_mut_ptr();
            let src: *const T = base.add(index);
            let dst = base.add(self.pos);
            ptr::copy_nonoverlapping(src, dst, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: pos is always in bounds and currently holds a stale copy.
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}
