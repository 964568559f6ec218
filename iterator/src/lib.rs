//! Random-access cursors over contiguous buffers.
//!
//! A cursor is a single address into a buffer of elements. It can be moved by
//! any number of elements in constant time, compared and subtracted against
//! other cursors into the same buffer, and dereferenced. It carries no bounds
//! and no owner: it is exactly one pointer wide and costs nothing to copy.
//!
//! ```text
//!   begin              end
//!     │                 │
//!     ▼                 ▼
//!   [ a | b | c | d ] ─ ─
//!             ▲
//!     rev ────┘  (rev.base() points at d)
//! ```
//!
//! - [`RandomAccessIterator`] is the forward cursor. Its [`Mutability`]
//!   parameter decides whether it hands out `&mut` ([`Cursor`]) or only `&`
//!   ([`ConstCursor`]).
//! - [`ReverseIterator`] wraps any [`RandomAccess`] cursor and walks it
//!   backward, designating the element *before* its base.
//! - [`Span`] turns a `[first, last)` pair into an [`Iterator`].
//!
//! # Example
//!
//! ```
//! use ft_iterator::{Cursor, RandomAccess, ReverseIterator, Span};
//!
//! let mut data = [1, 2, 3];
//! let begin = Cursor::new(data.as_mut_ptr());
//! let end = begin + 3;
//!
//! assert_eq!(end - begin, 3);
//! assert_eq!(unsafe { *begin.at(2) }, 3);
//!
//! let reversed: Vec<i32> = unsafe { Span::new(ReverseIterator::new(end), ReverseIterator::new(begin)) }
//!     .copied()
//!     .collect();
//! assert_eq!(reversed, [3, 2, 1]);
//! ```
//!
//! # Gotchas
//!
//! - **Moving is safe, reading is not**: arithmetic uses wrapping address math
//!   and never touches memory. Every dereference is `unsafe` because the
//!   cursor cannot know whether its buffer is still alive.
//! - **Zero-sized elements**: all positions share one address, so distances
//!   between such cursors are always zero. Containers built on these cursors
//!   (such as `ft_vector::Vector`) reject zero-sized element types.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

mod random_access;
mod reverse;
mod span;

pub use random_access::{
    Const, ConstCursor, Cursor, Mutability, Mutable, RandomAccess, RandomAccessIterator,
    RandomAccessMut,
};
pub use reverse::{ConstRevCursor, RevCursor, ReverseIterator};
pub use span::Span;

static_assertions::assert_eq_size!(Cursor<u64>, usize);
static_assertions::assert_eq_size!(ConstCursor<[u8; 3]>, usize);
static_assertions::assert_eq_size!(ReverseIterator<Cursor<u64>>, usize);
static_assertions::assert_not_impl_any!(Cursor<u64>: Send, Sync);
