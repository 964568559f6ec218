use core::{marker::PhantomData, mem, ptr::{self, NonNull}};

use allocator_api2::alloc::Allocator;

use crate::{allocator::TypedAllocator, error::Result};

/// The single owned allocation behind a [`Vector`](crate::Vector).
///
/// Knows its capacity but not how many slots are live: the owner passes that
/// in where it matters. Dropping the buffer releases the memory without
/// touching any element.
pub(crate) struct RawBuffer<T, A: Allocator> {
    /// `None` exactly when `capacity == 0`.
    ptr: Option<NonNull<T>>,
    capacity: usize,
    alloc: TypedAllocator<T, A>,
    _owns: PhantomData<T>,
}

// SAFETY: the buffer uniquely owns its slots, like a `Box<[T]>`.
unsafe impl<T: Send, A: Allocator + Send> Send for RawBuffer<T, A> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBuffer<T, A> {}

impl<T, A: Allocator> RawBuffer<T, A> {
    pub(crate) fn new_in(alloc: A) -> Self {
        const {
            assert!(mem::size_of::<T>() != 0, "zero-sized element types are not supported");
        }
        Self {
            ptr: None,
            capacity: 0,
            alloc: TypedAllocator::new(alloc),
            _owns: PhantomData,
        }
    }

    /// A buffer of exactly `capacity` uninitialized slots.
    pub(crate) fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self> {
        let mut buf = Self::new_in(alloc);
        if capacity > 0 {
            buf.ptr = Some(buf.alloc.allocate(capacity)?);
            buf.capacity = capacity;
        }
        Ok(buf)
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Base address, null while nothing is allocated.
    #[inline(always)]
    pub(crate) fn ptr(&self) -> *mut T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// Base address for slice construction, dangling while nothing is allocated.
    #[inline(always)]
    pub(crate) fn non_null(&self) -> NonNull<T> {
        self.ptr.unwrap_or(NonNull::dangling())
    }

    #[inline(always)]
    pub(crate) fn alloc(&self) -> &TypedAllocator<T, A> {
        &self.alloc
    }

    /// Moves the first `live` elements into a fresh buffer of exactly
    /// `new_capacity` slots and releases the old one.
    ///
    /// Every growth and shrink path goes through here. The only fallible step
    /// is the allocation, which happens before anything is touched, so on
    /// error the buffer and its elements are unchanged. A capacity of zero
    /// releases the buffer entirely.
    ///
    /// # Safety
    ///
    /// `live <= self.capacity()`, `live <= new_capacity`, and exactly the slots
    /// `[0, live)` are initialized.
    pub(crate) unsafe fn reallocate(&mut self, live: usize, new_capacity: usize) -> Result<()> {
        debug_assert!(live <= self.capacity && live <= new_capacity);
        if new_capacity == self.capacity {
            return Ok(());
        }

        let new_ptr = if new_capacity == 0 {
            None
        } else {
            Some(self.alloc.allocate(new_capacity)?)
        };
        tracing::trace!(
            old_capacity = self.capacity,
            new_capacity,
            live,
            "reallocating buffer"
        );

        if let Some(old_ptr) = self.ptr {
            // SAFETY: both regions hold at least `live` slots and are distinct
            // allocations. After the copy the old slots are logically
            // uninitialized, so they are released without being dropped.
            unsafe {
                if let Some(new_ptr) = new_ptr {
                    ptr::copy_nonoverlapping(old_ptr.as_ptr(), new_ptr.as_ptr(), live);
                }
                self.alloc.deallocate(old_ptr, self.capacity);
            }
        }

        self.ptr = new_ptr;
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<T, A: Allocator> Drop for RawBuffer<T, A> {
    fn drop(&mut self) {
        if let Some(ptr) = self.ptr {
            // SAFETY: `ptr` was allocated with exactly `capacity` slots.
            unsafe { self.alloc.deallocate(ptr, self.capacity) }
        }
    }
}
