//! The forward random-access cursor and the [`RandomAccess`] seam shared with
//! [`ReverseIterator`](crate::ReverseIterator).

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ops::{Add, AddAssign, Sub, SubAssign},
    ptr,
};

mod private {
    pub trait Sealed {}
}

/// Marker selecting what a cursor may do with the element it designates.
///
/// This is a sealed trait: only [`Mutable`] and [`Const`] implement it.
pub trait Mutability: private::Sealed {}

/// The cursor hands out shared and exclusive references.
#[derive(Debug)]
pub enum Mutable {}

/// The cursor only hands out shared references.
#[derive(Debug)]
pub enum Const {}

impl private::Sealed for Mutable {}
impl private::Sealed for Const {}
impl Mutability for Mutable {}
impl Mutability for Const {}

/// Constant-time cursor movement over a contiguous buffer.
///
/// Implementors only provide the three primitives; stepping, offsetting and
/// dereferencing are derived from them. Moving a cursor never touches memory,
/// so it is always safe. Dereferencing is `unsafe`: a cursor carries no bounds
/// and no owner, and keeping it inside a live buffer is the caller's job.
pub trait RandomAccess: Copy + Ord {
    /// The element type designated by the cursor.
    type Target;

    /// Moves the cursor by `n` elements (negative moves backward).
    fn advance(&mut self, n: isize);

    /// Signed number of elements from `origin` to `self`.
    ///
    /// Both cursors must point into the same buffer for the result to mean
    /// anything.
    fn distance(self, origin: Self) -> isize;

    /// Address of the element this cursor designates.
    fn address(self) -> *mut Self::Target;

    /// Pre-increment: steps forward and returns the moved cursor.
    #[inline]
    fn increment(&mut self) -> &mut Self {
        self.advance(1);
        self
    }

    /// Pre-decrement: steps backward and returns the moved cursor.
    #[inline]
    fn decrement(&mut self) -> &mut Self {
        self.advance(-1);
        self
    }

    /// Post-increment: steps forward and returns the position held before.
    #[inline]
    fn post_increment(&mut self) -> Self {
        let old = *self;
        self.advance(1);
        old
    }

    /// Post-decrement: steps backward and returns the position held before.
    #[inline]
    fn post_decrement(&mut self) -> Self {
        let old = *self;
        self.advance(-1);
        old
    }

    /// Returns a copy of the cursor moved by `n` elements.
    #[inline]
    #[must_use]
    fn offset(self, n: isize) -> Self {
        let mut moved = self;
        moved.advance(n);
        moved
    }

    /// Shared reference to the designated element (`*it`).
    ///
    /// # Safety
    ///
    /// The cursor must designate a live element of a buffer that outlives
    /// `'a`, and no exclusive reference to that element may exist for `'a`.
    /// The end position is never dereferenceable.
    #[inline]
    unsafe fn get<'a>(self) -> &'a Self::Target
    where
        Self::Target: 'a,
    {
        let address = self.address();
        debug_assert!(!address.is_null(), "dereferenced a null cursor");
        // SAFETY: upheld by the caller.
        unsafe { &*address }
    }

    /// Shared reference to the element `n` positions away (`it[n]`).
    ///
    /// # Safety
    ///
    /// Same as [`get`](Self::get), for the cursor `self + n`.
    #[inline]
    unsafe fn at<'a>(self, n: isize) -> &'a Self::Target
    where
        Self::Target: 'a,
    {
        // SAFETY: upheld by the caller.
        unsafe { self.offset(n).get() }
    }
}

/// Cursors that may also write through the designated element.
pub trait RandomAccessMut: RandomAccess {
    /// Exclusive reference to the designated element.
    ///
    /// # Safety
    ///
    /// As for [`RandomAccess::get`], and additionally no other reference to
    /// the element may exist for `'a`.
    #[inline]
    unsafe fn get_mut<'a>(self) -> &'a mut Self::Target
    where
        Self::Target: 'a,
    {
        let address = self.address();
        debug_assert!(!address.is_null(), "dereferenced a null cursor");
        // SAFETY: upheld by the caller.
        unsafe { &mut *address }
    }

    /// Exclusive reference to the element `n` positions away.
    ///
    /// # Safety
    ///
    /// Same as [`get_mut`](Self::get_mut), for the cursor `self + n`.
    #[inline]
    unsafe fn at_mut<'a>(self, n: isize) -> &'a mut Self::Target
    where
        Self::Target: 'a,
    {
        // SAFETY: upheld by the caller.
        unsafe { self.offset(n).get_mut() }
    }
}

/// A bare address into a contiguous buffer of `T`.
///
/// The cursor is exactly one pointer wide. It compares, orders and subtracts
/// by address and is copied freely; it never owns or frees anything.
/// Which references it hands out is selected by `M`.
pub struct RandomAccessIterator<T, M: Mutability = Mutable> {
    ptr: *mut T,
    mutability: PhantomData<M>,
}

/// A cursor that can read and write the designated element.
pub type Cursor<T> = RandomAccessIterator<T, Mutable>;

/// A cursor that can only read the designated element.
pub type ConstCursor<T> = RandomAccessIterator<T, Const>;

impl<T> RandomAccessIterator<T, Mutable> {
    /// Wraps a raw element address.
    #[inline]
    pub const fn new(ptr: *mut T) -> Self {
        Self {
            ptr,
            mutability: PhantomData,
        }
    }

    #[inline]
    pub const fn as_mut_ptr(self) -> *mut T {
        self.ptr
    }
}

impl<T> RandomAccessIterator<T, Const> {
    /// Wraps a raw element address.
    #[inline]
    pub const fn new(ptr: *const T) -> Self {
        Self {
            ptr: ptr.cast_mut(),
            mutability: PhantomData,
        }
    }
}

impl<T, M: Mutability> RandomAccessIterator<T, M> {
    /// A cursor that designates nothing. Two null cursors compare equal.
    #[inline]
    pub const fn null() -> Self {
        Self {
            ptr: ptr::null_mut(),
            mutability: PhantomData,
        }
    }

    /// The raw address (`it.operator->()`).
    #[inline]
    pub const fn as_ptr(self) -> *const T {
        self.ptr
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.ptr.is_null()
    }
}

impl<T, M: Mutability> RandomAccess for RandomAccessIterator<T, M> {
    type Target = T;

    #[inline]
    fn advance(&mut self, n: isize) {
        self.ptr = self.ptr.wrapping_offset(n);
    }

    #[inline]
    fn distance(self, origin: Self) -> isize {
        // Zero-sized elements all share one address.
        let size = mem::size_of::<T>().max(1) as isize;
        (self.ptr.addr() as isize).wrapping_sub(origin.ptr.addr() as isize) / size
    }

    #[inline]
    fn address(self) -> *mut T {
        self.ptr
    }
}

impl<T> RandomAccessMut for RandomAccessIterator<T, Mutable> {}

impl<T> From<RandomAccessIterator<T, Mutable>> for RandomAccessIterator<T, Const> {
    #[inline]
    fn from(cursor: RandomAccessIterator<T, Mutable>) -> Self {
        Self::new(cursor.ptr)
    }
}

impl<T, M: Mutability> Clone for RandomAccessIterator<T, M> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, M: Mutability> Copy for RandomAccessIterator<T, M> {}

impl<T, M: Mutability> Default for RandomAccessIterator<T, M> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T, M: Mutability> fmt::Debug for RandomAccessIterator<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RandomAccessIterator").field(&self.ptr).finish()
    }
}

impl<T, M: Mutability> PartialEq for RandomAccessIterator<T, M> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.ptr, other.ptr)
    }
}

impl<T, M: Mutability> Eq for RandomAccessIterator<T, M> {}

impl<T, M: Mutability> PartialOrd for RandomAccessIterator<T, M> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, M: Mutability> Ord for RandomAccessIterator<T, M> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.ptr.addr().cmp(&other.ptr.addr())
    }
}

impl<T, M: Mutability> Hash for RandomAccessIterator<T, M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.addr().hash(state);
    }
}

impl<T, M: Mutability> Add<isize> for RandomAccessIterator<T, M> {
    type Output = Self;

    #[inline]
    fn add(self, n: isize) -> Self {
        self.offset(n)
    }
}

impl<T, M: Mutability> Add<RandomAccessIterator<T, M>> for isize {
    type Output = RandomAccessIterator<T, M>;

    #[inline]
    fn add(self, cursor: RandomAccessIterator<T, M>) -> Self::Output {
        cursor.offset(self)
    }
}

impl<T, M: Mutability> Sub<isize> for RandomAccessIterator<T, M> {
    type Output = Self;

    #[inline]
    fn sub(self, n: isize) -> Self {
        self.offset(n.wrapping_neg())
    }
}

impl<T, M: Mutability> Sub for RandomAccessIterator<T, M> {
    type Output = isize;

    #[inline]
    fn sub(self, origin: Self) -> isize {
        self.distance(origin)
    }
}

impl<T, M: Mutability> AddAssign<isize> for RandomAccessIterator<T, M> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.advance(n);
    }
}

impl<T, M: Mutability> SubAssign<isize> for RandomAccessIterator<T, M> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.advance(n.wrapping_neg());
    }
}
