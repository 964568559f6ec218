use core::{
    cmp::{self, Ordering},
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr, slice,
};

use allocator_api2::alloc::{Allocator, Global};
use ft_iterator::{ConstCursor, ConstRevCursor, Cursor, RevCursor, ReverseIterator};

use crate::{
    error::{Error, Result},
    raw::RawBuffer,
};

/// A growable contiguous array.
///
/// Slots `[0, size)` of the buffer hold live elements; slots
/// `[size, capacity)` are allocated but uninitialized. Storage comes from the
/// injected allocator `A` and is only ever replaced through one reallocation
/// routine, so a failed growth leaves the container untouched.
///
/// Cursors returned by [`begin`](Self::begin) and friends are raw snapshots of
/// "base address + offset". They are invalidated by any reallocation, and by
/// insertion or erasure at or before their position.
///
/// # Zero-sized elements
///
/// Cursors into a buffer of zero-sized elements cannot tell positions apart,
/// so element types with `size_of::<T>() == 0` are rejected when the vector
/// is instantiated:
///
/// ```compile_fail
/// use ft_vector::Vector;
///
/// let units: Vector<()> = Vector::new();
/// ```
pub struct Vector<T, A: Allocator = Global> {
    buf: RawBuffer<T, A>,
    len: usize,
}

impl<T> Vector<T> {
    /// An empty vector. Does not allocate.
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// An empty vector with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_in(capacity, Global)
    }

    /// `n` copies of `value` in a buffer of exactly `n` slots.
    pub fn from_elem(n: usize, value: T) -> Result<Self>
    where
        T: Clone,
    {
        Self::from_elem_in(n, value, Global)
    }

    /// The elements of `range`, in order, in a buffer of exactly
    /// `range.len()` slots.
    pub fn from_range<I>(range: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        Self::from_range_in(range, Global)
    }
}

impl<T, A: Allocator> Vector<T, A> {
    pub fn new_in(alloc: A) -> Self {
        Self {
            buf: RawBuffer::new_in(alloc),
            len: 0,
        }
    }

    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self> {
        Ok(Self {
            buf: RawBuffer::with_capacity_in(capacity, alloc)?,
            len: 0,
        })
    }

    pub fn from_elem_in(n: usize, value: T, alloc: A) -> Result<Self>
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity_in(n, alloc)?;
        vec.extend_with(n, value);
        Ok(vec)
    }

    pub fn from_range_in<I>(range: I, alloc: A) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let range = range.into_iter();
        let mut vec = Self::with_capacity_in(range.len(), alloc)?;
        vec.extend_exact(range);
        Ok(vec)
    }

    /// A deep copy holding exactly `size()` slots, reporting allocation
    /// failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
        A: Clone,
    {
        Self::from_range_in(self.iter().cloned(), self.allocator().clone())
    }

    // ---------------------------------------------------------------------
    // Capacity
    // ---------------------------------------------------------------------

    /// Number of live elements.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The largest size the allocator can service for `T`.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.buf.alloc().max_size()
    }

    #[inline(always)]
    pub fn empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn allocator(&self) -> &A {
        self.buf.alloc().inner()
    }

    /// Grows the buffer to exactly `n` slots if it is smaller.
    ///
    /// Fails with [`Error::CapacityExceeded`] if `n > max_size()`, and with
    /// [`Error::Alloc`] if the allocator refuses; in both cases nothing
    /// changes. Afterwards no insertion reallocates until `size()` exceeds `n`.
    pub fn reserve(&mut self, n: usize) -> Result<()> {
        let max = self.max_size();
        if n > max {
            tracing::debug!(requested = n, max, "reserve exceeds max_size");
            return Err(Error::CapacityExceeded { requested: n, max });
        }
        if n <= self.capacity() {
            return Ok(());
        }
        self.reallocate(n)
    }

    /// Sets `size()` to `n`, dropping the excess or appending clones of
    /// `value`.
    ///
    /// Requests beyond `max_size()` are ignored. Growth reserves exactly `n`
    /// slots.
    pub fn resize(&mut self, n: usize, value: T) -> Result<()>
    where
        T: Clone,
    {
        if n > self.max_size() {
            tracing::debug!(requested = n, "resize beyond max_size ignored");
            return Ok(());
        }
        if n < self.len {
            self.truncate(n);
        } else if n > self.len {
            self.reserve(n)?;
            self.extend_with(n - self.len, value);
        }
        Ok(())
    }

    /// Releases unused slots so that `capacity() == size()`.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        if self.capacity() > self.len {
            self.reallocate(self.len)?;
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Element access
    // ---------------------------------------------------------------------

    /// Bounds-checked access.
    pub fn at(&self, index: usize) -> Result<&T> {
        let size = self.len;
        self.as_slice().get(index).ok_or_else(|| {
            tracing::debug!(index, size, "index out of range");
            Error::OutOfRange { index, size }
        })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.len;
        self.as_mut_slice().get_mut(index).ok_or_else(|| {
            tracing::debug!(index, size, "index out of range");
            Error::OutOfRange { index, size }
        })
    }

    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Base address of the buffer, null while nothing is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is live; the pointer is dangling only when len == 0.
        unsafe { slice::from_raw_parts(self.buf.non_null().as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.buf.non_null().as_ptr(), self.len) }
    }

    // ---------------------------------------------------------------------
    // Cursors
    // ---------------------------------------------------------------------

    #[inline]
    pub fn begin(&mut self) -> Cursor<T> {
        Cursor::new(self.buf.ptr())
    }

    #[inline]
    pub fn end(&mut self) -> Cursor<T> {
        self.begin() + self.len as isize
    }

    #[inline]
    pub fn rbegin(&mut self) -> RevCursor<T> {
        ReverseIterator::new(self.end())
    }

    #[inline]
    pub fn rend(&mut self) -> RevCursor<T> {
        ReverseIterator::new(self.begin())
    }

    #[inline]
    pub fn cbegin(&self) -> ConstCursor<T> {
        ConstCursor::new(self.buf.ptr())
    }

    #[inline]
    pub fn cend(&self) -> ConstCursor<T> {
        self.cbegin() + self.len as isize
    }

    #[inline]
    pub fn crbegin(&self) -> ConstRevCursor<T> {
        ReverseIterator::new(self.cend())
    }

    #[inline]
    pub fn crend(&self) -> ConstRevCursor<T> {
        ReverseIterator::new(self.cbegin())
    }

    // ---------------------------------------------------------------------
    // Modifiers
    // ---------------------------------------------------------------------

    /// Appends `value`, doubling the capacity first if the buffer is full.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        if self.len == self.capacity() {
            self.grow_for(1)?;
        }
        // SAFETY: `len < capacity`, so the slot is allocated and uninitialized.
        unsafe { self.buf.alloc().construct(self.buf.ptr().add(self.len), value) };
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot was live and is now outside `[0, len)`.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Inserts `value` before `position` and returns a cursor to it.
    pub fn insert(&mut self, position: impl Into<ConstCursor<T>>, value: T) -> Result<Cursor<T>> {
        let index = self.position_index(position.into())?;
        let mut value = Some(value);
        self.insert_with(index, 1, || value.take())?;
        Ok(self.begin() + index as isize)
    }

    /// Inserts `n` copies of `value` before `position` and returns a cursor to
    /// the first of them (or `position` if `n == 0`).
    pub fn insert_n(
        &mut self,
        position: impl Into<ConstCursor<T>>,
        n: usize,
        value: T,
    ) -> Result<Cursor<T>>
    where
        T: Clone,
    {
        let index = self.position_index(position.into())?;
        let mut remaining = n;
        let mut value = Some(value);
        self.insert_with(index, n, || {
            remaining -= 1;
            if remaining == 0 {
                value.take()
            } else {
                value.clone()
            }
        })?;
        Ok(self.begin() + index as isize)
    }

    /// Inserts the elements of `range`, in order, before `position` and
    /// returns a cursor to the first of them.
    ///
    /// Capacity is checked once, against `range.len()`. If the iterator ends
    /// early the gap is closed behind the elements it did produce.
    pub fn insert_range<I>(
        &mut self,
        position: impl Into<ConstCursor<T>>,
        range: I,
    ) -> Result<Cursor<T>>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let index = self.position_index(position.into())?;
        let mut range = range.into_iter();
        let n = range.len();
        self.insert_with(index, n, || range.next())?;
        Ok(self.begin() + index as isize)
    }

    /// Drops the element at `position`, closes the gap, and returns a cursor
    /// to the element that followed it.
    pub fn erase(&mut self, position: impl Into<ConstCursor<T>>) -> Result<Cursor<T>> {
        let index = self.position_index(position.into())?;
        if index == self.len {
            tracing::debug!(index, "erase at end()");
            return Err(Error::InvalidPosition {
                offset: index as isize,
                size: self.len,
            });
        }
        self.remove_range(index, index + 1);
        Ok(self.begin() + index as isize)
    }

    /// Drops `[first, last)`, closes the gap, and returns a cursor to the
    /// element that followed the range.
    pub fn erase_range(
        &mut self,
        first: impl Into<ConstCursor<T>>,
        last: impl Into<ConstCursor<T>>,
    ) -> Result<Cursor<T>> {
        let start = self.position_index(first.into())?;
        let end = self.position_index(last.into())?;
        if end < start {
            tracing::debug!(start, end, "erase range out of order");
            return Err(Error::InvalidPosition {
                offset: end as isize,
                size: self.len,
            });
        }
        self.remove_range(start, end);
        Ok(self.begin() + start as isize)
    }

    /// Replaces the contents with `n` copies of `value`. Never shrinks the
    /// buffer.
    pub fn assign_n(&mut self, n: usize, value: T) -> Result<()>
    where
        T: Clone,
    {
        self.reserve(n)?;
        self.clear();
        self.extend_with(n, value);
        Ok(())
    }

    /// Replaces the contents with the elements of `range`. Never shrinks the
    /// buffer.
    pub fn assign_range<I>(&mut self, range: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let range = range.into_iter();
        self.reserve(range.len())?;
        self.clear();
        self.extend_exact(range);
        Ok(())
    }

    /// Exchanges buffers, sizes and allocators in O(1). Cursors keep pointing
    /// at the same elements, which now belong to `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Drops every element. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    // ---------------------------------------------------------------------
    // Storage management
    // ---------------------------------------------------------------------

    fn reallocate(&mut self, new_capacity: usize) -> Result<()> {
        // SAFETY: exactly `[0, len)` is live and `len <= new_capacity` at every
        // call site.
        unsafe { self.buf.reallocate(self.len, new_capacity) }
    }

    /// Makes room for `additional` more elements, doubling the capacity (at
    /// least to 1) or growing to the exact requirement, whichever is larger.
    fn grow_for(&mut self, additional: usize) -> Result<()> {
        let max = self.max_size();
        let required = match self.len.checked_add(additional) {
            Some(required) if required <= max => required,
            _ => {
                tracing::debug!(size = self.len, additional, max, "growth exceeds max_size");
                return Err(Error::CapacityExceeded {
                    requested: self.len.saturating_add(additional),
                    max,
                });
            }
        };
        if required <= self.capacity() {
            return Ok(());
        }
        let doubled = cmp::max(1, self.capacity().saturating_mul(2));
        self.reallocate(cmp::max(required, doubled).min(max))
    }

    /// Offset of `position` from `begin()`, which must lie in `[0, size]`.
    fn position_index(&self, position: ConstCursor<T>) -> Result<usize> {
        let offset = position - self.cbegin();
        if offset < 0 || offset as usize > self.len {
            tracing::debug!(offset, size = self.len, "cursor outside the container");
            return Err(Error::InvalidPosition {
                offset,
                size: self.len,
            });
        }
        Ok(offset as usize)
    }

    /// Drops the elements past `n`.
    fn truncate(&mut self, n: usize) {
        if n >= self.len {
            return;
        }
        let tail = self.len - n;
        // Shrink first: if a destructor panics the rest leak instead of being
        // dropped twice.
        self.len = n;
        // SAFETY: `[n, n + tail)` was live and is now outside `[0, len)`.
        unsafe { self.buf.alloc().destroy_range(self.buf.ptr().add(n), tail) }
    }

    /// Appends `n` clones of `value`, moving `value` itself into the last slot.
    ///
    /// The capacity must already suffice.
    fn extend_with(&mut self, n: usize, value: T)
    where
        T: Clone,
    {
        debug_assert!(self.len + n <= self.capacity());
        if n == 0 {
            return;
        }
        let base = self.buf.ptr();
        for _ in 1..n {
            let item = value.clone();
            // SAFETY: `len < capacity`. `len` only advances after the write,
            // so a panicking clone leaves every live slot accounted for.
            unsafe { self.buf.alloc().construct(base.add(self.len), item) };
            self.len += 1;
        }
        // SAFETY: as above.
        unsafe { self.buf.alloc().construct(base.add(self.len), value) };
        self.len += 1;
    }

    /// Appends at most `range.len()` elements. The capacity must already
    /// suffice for that many.
    fn extend_exact<I: ExactSizeIterator<Item = T>>(&mut self, range: I) {
        let n = range.len();
        debug_assert!(self.len + n <= self.capacity());
        let base = self.buf.ptr();
        for item in range.take(n) {
            // SAFETY: at most `n` writes, all within capacity.
            unsafe { self.buf.alloc().construct(base.add(self.len), item) };
            self.len += 1;
        }
    }

    /// Shifts `[index, size)` right by `count`, then fills the gap with
    /// whatever `fill` produces.
    ///
    /// The gap is closed again on every exit: normally, when `fill` runs dry
    /// early, and when it panics. Elements written so far are kept.
    fn insert_with<F>(&mut self, index: usize, count: usize, mut fill: F) -> Result<()>
    where
        F: FnMut() -> Option<T>,
    {
        debug_assert!(index <= self.len);
        if count == 0 {
            return Ok(());
        }
        self.grow_for(count)?;

        let base = self.buf.ptr();
        let tail = self.len - index;
        // SAFETY: `len + count <= capacity`, so the shifted tail stays in
        // bounds. `ptr::copy` handles the overlap.
        unsafe { ptr::copy(base.add(index), base.add(index + count), tail) };

        let mut gap = Gap::open(self, index, count, tail);
        while gap.filled < count {
            let Some(item) = fill() else { break };
            // SAFETY: the slot lies inside the gap and is uninitialized.
            unsafe {
                gap.vec
                    .buf
                    .alloc()
                    .construct(base.add(index + gap.filled), item)
            };
            gap.filled += 1;
        }
        Ok(())
    }

    /// Drops `[start, end)` and shifts the tail left over it.
    fn remove_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.len);
        let count = end - start;
        if count == 0 {
            return;
        }
        let tail = self.len - end;
        let base = self.buf.ptr();
        let gap = Gap::open(self, start, count, tail);
        // SAFETY: the erased elements are live and, with `gap` open, outside
        // `[0, len)`. The gap closes even if a destructor panics.
        unsafe { gap.vec.buf.alloc().destroy_range(base.add(start), count) };
    }
}

/// An uninitialized hole of `count` slots at `index`, with `tail` live
/// elements parked right after it.
///
/// While the gap is open only `[0, index)` counts as live. Dropping the guard
/// keeps the first `filled` slots of the gap, slides the tail down onto the
/// rest, and restores `len`.
struct Gap<'a, T, A: Allocator> {
    vec: &'a mut Vector<T, A>,
    index: usize,
    count: usize,
    filled: usize,
    tail: usize,
}

impl<'a, T, A: Allocator> Gap<'a, T, A> {
    fn open(vec: &'a mut Vector<T, A>, index: usize, count: usize, tail: usize) -> Self {
        vec.len = index;
        Self {
            vec,
            index,
            count,
            filled: 0,
            tail,
        }
    }
}

impl<T, A: Allocator> Drop for Gap<'_, T, A> {
    fn drop(&mut self) {
        let kept = self.index + self.filled;
        if self.filled < self.count {
            let base = self.vec.buf.ptr();
            // SAFETY: the tail is live at `index + count`; the destination is
            // the unfilled part of the gap, followed by the tail's old slots.
            unsafe { ptr::copy(base.add(self.index + self.count), base.add(kept), self.tail) };
        }
        self.vec.len = kept + self.tail;
    }
}

impl<T, A: Allocator> Drop for Vector<T, A> {
    fn drop(&mut self) {
        // The buffer itself is released by `RawBuffer`.
        self.clear();
    }
}

#[cold]
fn capacity_failure(error: Error) -> ! {
    match error {
        Error::Alloc { layout } => alloc::alloc::handle_alloc_error(layout),
        error => panic!("{error}"),
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for Vector<T, A> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|error| capacity_failure(error))
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Allocator> Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for Vector<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Unchecked in the container sense: out-of-range indices panic like a slice
/// rather than returning [`Error::OutOfRange`]. Use [`Vector::at`] for that.
impl<T, A: Allocator> Index<usize> for Vector<T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T, A: Allocator> IndexMut<usize> for Vector<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U, A1, A2> PartialEq<Vector<U, A2>> for Vector<T, A1>
where
    T: PartialEq<U>,
    A1: Allocator,
    A2: Allocator,
{
    fn eq(&self, other: &Vector<U, A2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<[U]> for Vector<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<&[U]> for Vector<T, A> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for Vector<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Allocator> Eq for Vector<T, A> {}

impl<T: PartialOrd, A: Allocator> PartialOrd for Vector<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, A: Allocator> Ord for Vector<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, A: Allocator> Hash for Vector<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, A: Allocator> Extend<T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > self.capacity() - self.len {
            self.grow_for(lower).unwrap_or_else(|error| capacity_failure(error));
        }
        for item in iter {
            self.push_back(item).unwrap_or_else(|error| capacity_failure(error));
        }
    }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(items: &[T]) -> Self {
        Self::from_range(items.iter().cloned()).unwrap_or_else(|error| capacity_failure(error))
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_range(items).unwrap_or_else(|error| capacity_failure(error))
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, A: Allocator> Vector<T, A> {
    /// Splits into the raw buffer and the live count without dropping
    /// anything. Used by the owning iterator.
    pub(crate) fn into_raw_parts(self) -> (RawBuffer<T, A>, usize) {
        let this = mem::ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so the buffer is moved out exactly
        // once.
        let buf = unsafe { ptr::read(&this.buf) };
        (buf, this.len)
    }
}

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;
