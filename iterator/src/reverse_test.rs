//! Tests for the reverse adaptor

use pretty_assertions::assert_eq;

use super::ReverseIterator;
use crate::{ConstCursor, Cursor, RandomAccess, RandomAccessMut};

fn bounds(data: &mut [i32]) -> (Cursor<i32>, Cursor<i32>) {
    let begin = Cursor::new(data.as_mut_ptr());
    (begin, begin + data.len() as isize)
}

#[test]
fn test_dereference_reads_one_before_base() {
    let mut data = [1, 2, 3, 4];
    let (begin, end) = bounds(&mut data);

    let rbegin = ReverseIterator::new(end);
    assert_eq!(rbegin.base(), end);
    assert_eq!(unsafe { *rbegin.get() }, 4);

    let last = ReverseIterator::new(begin + 1);
    assert_eq!(unsafe { *last.get() }, 1);
}

#[test]
fn test_walks_backward() {
    let mut data = [1, 2, 3, 4];
    let (begin, end) = bounds(&mut data);
    let rend = ReverseIterator::new(begin);

    let mut seen = [0; 4];
    let mut slot = 0;
    let mut it = ReverseIterator::new(end);
    while it != rend {
        seen[slot] = unsafe { *it.get() };
        slot += 1;
        it.increment();
    }
    assert_eq!(seen, [4, 3, 2, 1]);
}

#[test]
fn test_steps_invert_direction() {
    let mut data = [1, 2, 3, 4];
    let (_, end) = bounds(&mut data);
    let mut it = ReverseIterator::new(end);

    let before = it.post_increment();
    assert_eq!(before.base(), end);
    assert_eq!(it.base(), end - 1);

    it.decrement();
    assert_eq!(it.base(), end);

    let before = it.post_decrement();
    assert_eq!(before.base(), end);
    assert_eq!(it.base(), end + 1);
}

#[test]
fn test_offsets_move_the_base_the_other_way() {
    let mut data = [10, 20, 30, 40, 50];
    let (begin, end) = bounds(&mut data);
    let rbegin = ReverseIterator::new(end);

    assert_eq!((rbegin + 2).base(), end - 2);
    assert_eq!((2 + rbegin).base(), end - 2);
    assert_eq!(((rbegin + 3) - 1).base(), end - 2);
    assert_eq!(unsafe { *(rbegin + 2).get() }, 30);

    let mut it = rbegin;
    it += 4;
    assert_eq!(it.base(), begin + 1);
    it -= 1;
    assert_eq!(it.base(), begin + 2);
}

#[test]
fn test_indexing_matches_base_offset() {
    let mut data = [10, 20, 30, 40, 50];
    let (_, end) = bounds(&mut data);
    let rbegin = ReverseIterator::new(end);

    for n in 0..5 {
        let via_index = unsafe { *rbegin.at(n) };
        let via_base = unsafe { *rbegin.base().at(-n - 1) };
        assert_eq!(via_index, via_base);
    }
    assert_eq!(unsafe { *rbegin.at(0) }, 50);
    assert_eq!(unsafe { *rbegin.at(4) }, 10);
}

#[test]
fn test_difference_swaps_operands() {
    let mut data = [0; 6];
    let (begin, end) = bounds(&mut data);
    let rbegin = ReverseIterator::new(end);
    let rend = ReverseIterator::new(begin);

    assert_eq!(rend - rbegin, 6);
    assert_eq!(rbegin - rend, -6);
    assert_eq!(rend - rbegin, rbegin.base() - rend.base());
}

#[test]
fn test_ordering_follows_reverse_traversal() {
    let mut data = [0; 3];
    let (begin, end) = bounds(&mut data);
    let rbegin = ReverseIterator::new(end);
    let rend = ReverseIterator::new(begin);

    assert!(rbegin < rend);
    assert!(rend > rbegin);
    assert!(rbegin <= rbegin);
    assert!(rend >= rbegin);
    assert!(rbegin != rend);
    assert!(rbegin + 3 == rend);
}

#[test]
fn test_write_through_reverse_cursor() {
    let mut data = [1, 2, 3];
    let (_, end) = bounds(&mut data);
    let rbegin = ReverseIterator::new(end);

    unsafe {
        *rbegin.get_mut() = 30;
        *rbegin.at_mut(2) = 10;
    }
    assert_eq!(data, [10, 2, 30]);
}

#[test]
fn test_reverse_of_reverse_is_forward() {
    let mut data = [1, 2, 3];
    let (begin, end) = bounds(&mut data);

    // The outer adaptor designates one before its base, which is one after
    // the inner adaptor's base.
    let inner = ReverseIterator::new(begin + 1);
    let outer = ReverseIterator::new(inner);
    assert_eq!(unsafe { *outer.get() }, 2);
    assert_eq!(unsafe { *(outer + 1).get() }, 3);
    assert_eq!(ReverseIterator::new(ReverseIterator::new(end)) - outer, 2);
}

#[test]
fn test_const_conversion() {
    let mut data = [1, 2, 3];
    let (_, end) = bounds(&mut data);
    let rbegin = ReverseIterator::new(end);
    let read_only: ReverseIterator<ConstCursor<i32>> = rbegin.into();

    assert_eq!(read_only.base().as_ptr(), end.as_ptr());
    assert_eq!(unsafe { *read_only.get() }, 3);
}
