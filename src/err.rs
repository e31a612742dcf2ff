//! Errors reported by a [`VecList`](crate::VecList) and its allocators.

use thiserror::Error;

/// A [`NodeAlloc`](crate::NodeAlloc) refused to grant memory for a `Node`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq,)]
pub enum AllocError {
    /// The allocator has no room left for another `Node`.
    #[error("refused a {size} byte node with {live} nodes live")]
    Refused {
        /// The size of the requested `Node`.
        size: usize,
        /// The number of `Node`s the allocator had granted and not yet had returned.
        live: usize,
    },
}

/// A misuse of a [`VecList`](crate::VecList) or one of its cursors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq,)]
pub enum ListError {
    /// The list holds no values.
    #[error("the list is empty")]
    Empty,
    /// The cursor is at a boundary it cannot move past or read from.
    #[error("the position is outside of the list")]
    OutOfRange,
    /// The position names a `Node` which has since been removed.
    #[error("the position refers to a removed node")]
    StalePosition,
    /// A `Node` could not be allocated.
    #[error(transparent)]
    Alloc(#[from] AllocError),
}
