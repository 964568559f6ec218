//! Element-typed view of a raw byte allocator.

use core::{alloc::Layout, marker::PhantomData, mem, ptr::{self, NonNull}};

use allocator_api2::alloc::{Allocator, Global};

use crate::error::{Error, Result};

/// Adapts a byte-level [`Allocator`] to whole elements of `T`.
///
/// This is the contract the container is written against: obtain raw slots,
/// release them, and construct or destroy one element in place. The wrapped
/// allocator decides where memory comes from; it may be shared with other
/// containers (e.g. `&bumpalo::Bump`).
pub struct TypedAllocator<T, A: Allocator = Global> {
    inner: A,
    element: PhantomData<fn() -> T>,
}

impl<T, A: Allocator> TypedAllocator<T, A> {
    pub const fn new(inner: A) -> Self {
        Self {
            inner,
            element: PhantomData,
        }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// The largest element count a single buffer may hold.
    #[inline]
    pub fn max_size(&self) -> usize {
        isize::MAX as usize / mem::size_of::<T>().max(1)
    }

    /// Obtains uninitialized storage for `n` elements, `n > 0`.
    pub fn allocate(&self, n: usize) -> Result<NonNull<T>> {
        debug_assert!(n > 0, "zero-length allocations are never requested");
        let max = self.max_size();
        if n > max {
            tracing::debug!(requested = n, max, "allocation exceeds max_size");
            return Err(Error::CapacityExceeded { requested: n, max });
        }
        let layout = Layout::array::<T>(n)
            .map_err(|_| Error::CapacityExceeded { requested: n, max })?;
        match self.inner.allocate(layout) {
            Ok(bytes) => Ok(bytes.cast()),
            Err(_) => {
                tracing::debug!(bytes = layout.size(), "allocator failed");
                Err(Error::Alloc { layout })
            }
        }
    }

    /// Releases storage obtained from [`allocate`](Self::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must come from `self.allocate(n)` with the same `n`, and must not
    /// have been released already. Live elements are not destroyed.
    pub unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize) {
        // SAFETY: the same layout was accepted by `allocate`.
        unsafe {
            let layout = Layout::from_size_align_unchecked(mem::size_of::<T>() * n, mem::align_of::<T>());
            self.inner.deallocate(ptr.cast(), layout);
        }
    }

    /// Moves `value` into an uninitialized slot.
    ///
    /// # Safety
    ///
    /// `slot` must be valid for writes and properly aligned. Whatever it held
    /// before is overwritten without being dropped.
    #[inline]
    pub unsafe fn construct(&self, slot: *mut T, value: T) {
        // SAFETY: upheld by the caller.
        unsafe { slot.write(value) }
    }

    /// Drops the element in `slot`, leaving the storage uninitialized.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live element that is not used again.
    #[inline]
    pub unsafe fn destroy(&self, slot: *mut T) {
        // SAFETY: upheld by the caller.
        unsafe { ptr::drop_in_place(slot) }
    }

    /// Drops `count` consecutive elements starting at `first`.
    ///
    /// If one of the destructors panics the remaining ones still run.
    ///
    /// # Safety
    ///
    /// As for [`destroy`](Self::destroy), for every slot in the range.
    #[inline]
    pub unsafe fn destroy_range(&self, first: *mut T, count: usize) {
        // SAFETY: upheld by the caller.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, count)) }
    }
}

impl<T, A: Allocator + Clone> Clone for TypedAllocator<T, A> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T, A: Allocator + Default> Default for TypedAllocator<T, A> {
    fn default() -> Self {
        Self::new(A::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_size_scales_with_element_size() {
        assert_eq!(TypedAllocator::<u8>::default().max_size(), isize::MAX as usize);
        assert_eq!(TypedAllocator::<u64>::default().max_size(), isize::MAX as usize / 8);
        assert_eq!(TypedAllocator::<[u8; 3]>::default().max_size(), isize::MAX as usize / 3);
    }

    #[test]
    fn test_allocate_beyond_max_size() {
        let typed = TypedAllocator::<u32>::default();
        let requested = typed.max_size() + 1;

        assert_eq!(
            typed.allocate(requested),
            Err(Error::CapacityExceeded { requested, max: typed.max_size() })
        );
    }

    #[test]
    fn test_construct_and_destroy_in_place() {
        let typed = TypedAllocator::<alloc::string::String>::default();
        let slots = typed.allocate(2).unwrap();

        unsafe {
            typed.construct(slots.as_ptr(), "first".into());
            typed.construct(slots.as_ptr().add(1), "second".into());
            assert_eq!(&*slots.as_ptr().add(1), "second");
            typed.destroy_range(slots.as_ptr(), 2);
            typed.deallocate(slots, 2);
        }
    }
}
