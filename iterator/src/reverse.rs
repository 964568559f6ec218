use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::random_access::{Const, Mutable, RandomAccess, RandomAccessIterator, RandomAccessMut};

/// Walks a random-access cursor backward.
///
/// The adaptor stores the wrapped cursor by value, positioned *one past* the
/// element it designates: `*rev == *(rev.base() - 1)`. This is what lets
/// `ReverseIterator::new(end)` designate the last element and
/// `ReverseIterator::new(begin)` act as the reverse end, without ever forming
/// an address before the start of the buffer.
///
/// Every operation is phrased in terms of [`base`](Self::base): moving
/// forward here moves the wrapped cursor backward, and the difference of two
/// reverse cursors is the difference of their bases with the operands
/// swapped.
#[derive(Clone, Copy, Default, Hash)]
pub struct ReverseIterator<I> {
    current: I,
}

/// A reverse cursor that can read and write the designated element.
pub type RevCursor<T> = ReverseIterator<RandomAccessIterator<T, Mutable>>;

/// A reverse cursor that can only read the designated element.
pub type ConstRevCursor<T> = ReverseIterator<RandomAccessIterator<T, Const>>;

impl<I: RandomAccess> ReverseIterator<I> {
    #[inline]
    pub const fn new(base: I) -> Self {
        Self { current: base }
    }

    /// The wrapped cursor, one past the designated element.
    #[inline]
    pub fn base(self) -> I {
        self.current
    }
}

impl<I: RandomAccess> RandomAccess for ReverseIterator<I> {
    type Target = I::Target;

    #[inline]
    fn advance(&mut self, n: isize) {
        self.current.advance(n.wrapping_neg());
    }

    #[inline]
    fn distance(self, origin: Self) -> isize {
        origin.current.distance(self.current)
    }

    #[inline]
    fn address(self) -> *mut I::Target {
        let mut previous = self.current;
        previous.decrement();
        previous.address()
    }
}

impl<I: RandomAccessMut> RandomAccessMut for ReverseIterator<I> {}

impl<T> From<ReverseIterator<RandomAccessIterator<T, Mutable>>>
    for ReverseIterator<RandomAccessIterator<T, Const>>
{
    #[inline]
    fn from(rev: ReverseIterator<RandomAccessIterator<T, Mutable>>) -> Self {
        Self::new(rev.current.into())
    }
}

impl<I: fmt::Debug> fmt::Debug for ReverseIterator<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReverseIterator").field(&self.current).finish()
    }
}

impl<I: RandomAccess> PartialEq for ReverseIterator<I> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<I: RandomAccess> Eq for ReverseIterator<I> {}

impl<I: RandomAccess> PartialOrd for ReverseIterator<I> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: RandomAccess> Ord for ReverseIterator<I> {
    /// Reverse order of the bases, so that `a < b` exactly when `b - a > 0`.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other.current.cmp(&self.current)
    }
}

impl<I: RandomAccess> Add<isize> for ReverseIterator<I> {
    type Output = Self;

    #[inline]
    fn add(self, n: isize) -> Self {
        self.offset(n)
    }
}

impl<I: RandomAccess> Add<ReverseIterator<I>> for isize {
    type Output = ReverseIterator<I>;

    #[inline]
    fn add(self, rev: ReverseIterator<I>) -> ReverseIterator<I> {
        rev.offset(self)
    }
}

impl<I: RandomAccess> Sub<isize> for ReverseIterator<I> {
    type Output = Self;

    #[inline]
    fn sub(self, n: isize) -> Self {
        self.offset(n.wrapping_neg())
    }
}

impl<I: RandomAccess> Sub for ReverseIterator<I> {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: Self) -> isize {
        self.distance(rhs)
    }
}

impl<I: RandomAccess> AddAssign<isize> for ReverseIterator<I> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.advance(n);
    }
}

impl<I: RandomAccess> SubAssign<isize> for ReverseIterator<I> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.advance(n.wrapping_neg());
    }
}

#[cfg(test)]
#[path = "reverse_test.rs"]
mod reverse_test;
