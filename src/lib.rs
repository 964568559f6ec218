//! ft-containers - a growable vector and the cursors that walk it
//!
//! # Overview
//!
//! This crate bundles two building blocks:
//!
//! - [`Vector`]: a contiguous, growable array that owns one buffer from an
//!   injected allocator and manages its capacity explicitly (`reserve`,
//!   `resize`, `shrink_to_fit`), reporting failures as [`Error`] values.
//! - [`RandomAccessIterator`] and [`ReverseIterator`]: pointer-sized cursors
//!   with constant-time arithmetic, used by [`Vector`] to designate positions
//!   for `insert` and `erase`.
//!
//! # Quick Start
//!
//! ```
//! use ft_containers::{RandomAccess, Vector};
//!
//! let mut vec = Vector::from_elem(5, 42).unwrap();
//! vec.push_back(7).unwrap();
//! vec.erase(vec.cbegin()).unwrap();
//! vec.insert_n(vec.cbegin(), 3, 9).unwrap();
//! assert_eq!(vec, [9, 9, 9, 42, 42, 42, 42, 7]);
//!
//! // Walk backward with reverse cursors.
//! let mut it = vec.crbegin();
//! assert_eq!(unsafe { *it.get() }, 7);
//! it += 4;
//! assert_eq!(unsafe { *it.get() }, 42);
//! assert_eq!(vec.crend() - vec.crbegin(), 8);
//! ```
//!
//! # Features
//!
//! - `std`: links the standard library. Off by default; everything works on
//!   `no_std` targets with an allocator.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

pub use ft_iterator::{
    Const, ConstCursor, ConstRevCursor, Cursor, Mutability, Mutable, RandomAccess,
    RandomAccessIterator, RandomAccessMut, RevCursor, ReverseIterator, Span,
};
pub use ft_vector::{Error, IntoIter, Result, Vector, allocator};
