use thiserror::Error;

/// Errors reported by the fallible parts of the [`Tree`](crate::Tree) API.
///
/// Lookups that simply miss (`find`, `delete`, `depth`) return `None` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value is already stored in the tree.
    #[error("value is already present in the tree")]
    AlreadyExists,

    /// The in-order sequence is not strictly increasing at `position`.
    #[error("values are out of order at in-order position {position}")]
    OutOfOrder {
        /// Zero-based in-order index of the first offending value.
        position: usize,
    },

    /// The recorded element count disagrees with the nodes reachable from the root.
    #[error("tree records {recorded} elements but {reachable} are reachable from the root")]
    SizeMismatch {
        /// The count the tree keeps.
        recorded: usize,
        /// The count found by walking the tree.
        reachable: usize,
    },
}

/// Result alias for [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
