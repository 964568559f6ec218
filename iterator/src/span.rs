use core::{fmt, iter::FusedIterator, marker::PhantomData};

use crate::random_access::RandomAccess;

/// A half-open cursor range `[first, last)` viewed as a Rust iterator.
///
/// Yields shared references to the designated elements in cursor order, so a
/// span of reverse cursors walks the buffer backward. The span is exact-size,
/// which is what range constructors and range inserts need to allocate
/// precisely once.
pub struct Span<'a, I: RandomAccess> {
    first: I,
    last: I,
    marker: PhantomData<&'a I::Target>,
}

impl<'a, I: RandomAccess> Span<'a, I> {
    /// # Safety
    ///
    /// `first` and `last` must belong to the same buffer with `first <= last`,
    /// every position in `[first, last)` must hold a live element for `'a`,
    /// and none of those elements may be mutated during `'a`.
    #[inline]
    pub unsafe fn new(first: I, last: I) -> Self {
        debug_assert!(first <= last, "span bounds are out of order");
        Self {
            first,
            last,
            marker: PhantomData,
        }
    }

    /// Remaining `(first, last)` bounds.
    pub fn bounds(&self) -> (I, I) {
        (self.first, self.last)
    }
}

impl<'a, I: RandomAccess> Iterator for Span<'a, I>
where
    I::Target: 'a,
{
    type Item = &'a I::Target;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.first == self.last {
            return None;
        }
        // SAFETY: `first` is inside `[first, last)`, which the constructor's
        // contract keeps live for 'a.
        let item = unsafe { self.first.get() };
        self.first.increment();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, I: RandomAccess> DoubleEndedIterator for Span<'a, I>
where
    I::Target: 'a,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.first == self.last {
            return None;
        }
        self.last.decrement();
        // SAFETY: see `next`.
        Some(unsafe { self.last.get() })
    }
}

impl<'a, I: RandomAccess> ExactSizeIterator for Span<'a, I>
where
    I::Target: 'a,
{
    #[inline]
    fn len(&self) -> usize {
        self.last.distance(self.first) as usize
    }
}

impl<'a, I: RandomAccess> FusedIterator for Span<'a, I> where I::Target: 'a {}

impl<I: RandomAccess> Clone for Span<'_, I> {
    fn clone(&self) -> Self {
        Self {
            first: self.first,
            last: self.last,
            marker: PhantomData,
        }
    }
}

impl<I: RandomAccess + fmt::Debug> fmt::Debug for Span<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("first", &self.first)
            .field("last", &self.last)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cursor, ReverseIterator};

    #[test]
    fn test_forward_span() {
        let mut data = [1, 2, 3, 4];
        let begin = Cursor::new(data.as_mut_ptr());
        let span = unsafe { Span::new(begin, begin + 4) };

        assert_eq!(span.len(), 4);
        let mut out = [0; 4];
        for (slot, value) in out.iter_mut().zip(span) {
            *slot = *value;
        }
        assert_eq!(out, [1, 2, 3, 4]);
    }

    #[test]
    fn test_reverse_span() {
        let mut data = [1, 2, 3, 4];
        let begin = Cursor::new(data.as_mut_ptr());
        let span = unsafe { Span::new(ReverseIterator::new(begin + 4), ReverseIterator::new(begin)) };

        let mut out = [0; 4];
        for (slot, value) in out.iter_mut().zip(span) {
            *slot = *value;
        }
        assert_eq!(out, [4, 3, 2, 1]);
    }

    #[test]
    fn test_both_ends() {
        let mut data = [1, 2, 3, 4, 5];
        let begin = Cursor::new(data.as_mut_ptr());
        let mut span = unsafe { Span::new(begin, begin + 5) };

        assert_eq!(span.next(), Some(&1));
        assert_eq!(span.next_back(), Some(&5));
        assert_eq!(span.len(), 3);
        assert_eq!(span.bounds(), (begin + 1, begin + 4));
        assert_eq!(span.next_back(), Some(&4));
        assert_eq!(span.next(), Some(&2));
        assert_eq!(span.next(), Some(&3));
        assert_eq!(span.next(), None);
        assert_eq!(span.next_back(), None);
    }

    #[test]
    fn test_empty_span() {
        let mut data = [0u8; 0];
        let begin = Cursor::new(data.as_mut_ptr());
        let mut span = unsafe { Span::new(begin, begin) };

        assert_eq!(span.len(), 0);
        assert_eq!(span.next(), None);
    }
}
