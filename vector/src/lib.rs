//! A growable contiguous array with explicit storage management.
//!
//! [`Vector`] owns a single heap buffer obtained from an injected
//! [`Allocator`](allocator_api2::alloc::Allocator). Live elements occupy the
//! front of the buffer; the rest is allocated but uninitialized:
//!
//! ```text
//!   base
//!    │
//!    ▼
//!   [ live | live | live | ---- | ---- ]
//!    └──────── size ────┘
//!    └──────────── capacity ───────────┘
//! ```
//!
//! - Appending to a full buffer doubles the capacity (`max(1, 2 * capacity)`).
//! - [`Vector::reserve`] grows to exactly the requested count.
//! - Every reallocation moves the live elements into a fresh buffer and only
//!   then releases the old one. If the allocator fails, the container is left
//!   exactly as it was and the error is returned.
//!
//! Positions are expressed with the cursors from [`ft_iterator`]:
//! `begin()`/`end()` hand out [`Cursor`](ft_iterator::Cursor)s,
//! `cbegin()`/`cend()` read-only [`ConstCursor`](ft_iterator::ConstCursor)s,
//! and the `r`-prefixed variants their reverse adaptors.
//!
//! # Example
//!
//! ```
//! use ft_vector::{Error, Vector};
//!
//! let mut vec = Vector::from_elem(5, 42).unwrap();
//! vec.push_back(7).unwrap();
//! assert_eq!(vec.size(), 6);
//! assert_eq!(vec.back(), Some(&7));
//!
//! vec.erase(vec.cbegin()).unwrap();
//! vec.insert_n(vec.cbegin(), 3, 9).unwrap();
//! assert_eq!(vec, [9, 9, 9, 42, 42, 42, 42, 7]);
//!
//! assert_eq!(vec.at(8), Err(Error::OutOfRange { index: 8, size: 8 }));
//! ```
//!
//! # Custom allocators
//!
//! ```
//! use bumpalo::Bump;
//! use ft_vector::Vector;
//!
//! let arena = Bump::new();
//! let mut vec = Vector::new_in(&arena);
//! for i in 0..10 {
//!     vec.push_back(i).unwrap();
//! }
//! assert_eq!(vec.iter().sum::<i32>(), 45);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod allocator;
mod error;
mod into_iter;
mod raw;
mod vector;

pub use error::{Error, Result};
pub use into_iter::IntoIter;
pub use vector::Vector;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(Vector<u64>, [usize; 3]);
