//! Error types for the page segmentation core.

/// Result type alias for this crate's operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building transforms or running the
/// segmenter's neighbor-search helpers.
///
/// Empty input to the segmenter is not an error (see [`crate::layout::get_blocks`]);
/// it simply produces an empty block list.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A constructor or helper received arguments it cannot use: a
    /// `Transform::from_array` slice whose length isn't 4, 6, or 9, or an
    /// empty candidate set passed to `find_index_nearest`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A `Transform` was indexed with a row or column outside `[0, 3)`.
    #[error("matrix index out of range: row={row}, col={col}")]
    OutOfRange {
        /// Row index requested.
        row: isize,
        /// Column index requested.
        col: isize,
    },
}
