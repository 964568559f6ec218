use core::alloc::Layout;

use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Recoverable failures of [`Vector`](crate::Vector) operations.
///
/// Whenever one of these is returned the container is exactly as it was
/// before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Checked element access past the live elements.
    #[error("index {index} is out of range for size {size}")]
    OutOfRange { index: usize, size: usize },

    /// A cursor handed to `insert`/`erase` does not designate a valid position
    /// of this container. `offset` is its distance from `begin()`.
    #[error("cursor at offset {offset} is not a valid position for size {size}")]
    InvalidPosition { offset: isize, size: usize },

    /// The requested element count exceeds what the allocator can address.
    #[error("requested capacity {requested} exceeds the maximum of {max}")]
    CapacityExceeded { requested: usize, max: usize },

    /// The allocator could not satisfy the request.
    #[error("allocation of {} bytes aligned to {} failed", .layout.size(), .layout.align())]
    Alloc { layout: Layout },
}
