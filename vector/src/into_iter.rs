use core::{fmt, iter::FusedIterator, ptr, slice};

use allocator_api2::alloc::{Allocator, Global};

use crate::{raw::RawBuffer, vector::Vector};

/// Moves the elements out of a [`Vector`], front to back.
///
/// Owns the buffer: elements not yet yielded are dropped, and the memory is
/// released, when the iterator is dropped.
pub struct IntoIter<T, A: Allocator = Global> {
    buf: RawBuffer<T, A>,
    /// Live slots are `[start, end)`.
    start: usize,
    end: usize,
}

impl<T, A: Allocator> IntoIter<T, A> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[start, end)` is live; `start == end` covers the empty buffer.
        unsafe { slice::from_raw_parts(self.buf.non_null().as_ptr().add(self.start), self.end - self.start) }
    }
}

impl<T, A: Allocator> IntoIterator for Vector<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        let (buf, len) = self.into_raw_parts();
        IntoIter {
            buf,
            start: 0,
            end: len,
        }
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: the slot is live and leaves the live range right away.
        let item = unsafe { ptr::read(self.buf.ptr().add(self.start)) };
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: as in `next`.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.end)) })
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let remaining = self.end - self.start;
        if remaining == 0 {
            return;
        }
        let first = self.start;
        self.start = self.end;
        // SAFETY: `[first, first + remaining)` was live and is no longer
        // reachable. `buf` releases the memory afterwards.
        unsafe { self.buf.alloc().destroy_range(self.buf.ptr().add(first), remaining) }
    }
}
