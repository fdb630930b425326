//! The error type shared by the containers in this crate.

use thiserror::Error;

/// Errors reported by [`List`](crate::List) and its adapters.
///
/// Accessors on empty containers and cursor moves across the list
/// boundary are recoverable conditions, so they are reported through
/// this type instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// `front`, `back` or `top` was called on an empty container.
    #[error("element access on an empty container")]
    EmptyAccess,

    /// A list node could not be allocated. The requested mutation did
    /// not happen and the container is unchanged.
    #[error("failed to allocate a list node")]
    NodeAlloc,

    /// A cursor step would have crossed the ghost node.
    #[error("cursor step across the list boundary")]
    CursorBoundary,
}
