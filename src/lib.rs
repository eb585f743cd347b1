// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::type_complexity)]

//! # pagesplit_core
//!
//! Document page segmentation core for a PDF text-analysis pipeline.
//!
//! Given the words already recognized on a rendered page, this crate
//! decomposes the page into text blocks — contiguous regions that
//! naturally belong together, such as paragraphs, columns, or captions —
//! using the classical **Recursive X-Y Cut** algorithm over bounding-box
//! projection profiles, with gap thresholds adapted from the page's own
//! dominant font metrics.
//!
//! ## Scope
//!
//! This is the core only: the affine transform used to map PDF device-space
//! geometry, the recursive segmenter, and the geometric neighbor-search
//! primitives downstream layout analysis builds on. PDF parsing, glyph
//! decoding, and turning a leaf's words into a fully laid-out `TextBlock`
//! are the caller's concern — see [`layout::TextBlock::from_words`] for the
//! crate's own minimal default.
//!
//! ## Quick start
//!
//! ```
//! use pagesplit_core::geometry::Rectangle;
//! use pagesplit_core::layout::Word;
//! use pagesplit_core::layout::xycut::get_blocks_with_constant_thresholds;
//! use rust_decimal::Decimal;
//!
//! let words = vec![
//!     Word::new("hello", Rectangle::new(0.into(), 5.into(), 0.into(), 5.into()), vec![]),
//!     Word::new("world", Rectangle::new(6.into(), 11.into(), 0.into(), 5.into()), vec![]),
//! ];
//! // A gap of 1 between the words, below a dominant-width threshold of 2,
//! // keeps them in the same run.
//! let blocks = get_blocks_with_constant_thresholds(
//!     words,
//!     Decimal::ZERO,
//!     Decimal::from(2),
//!     Decimal::from(2),
//! );
//! assert_eq!(blocks.len(), 1);
//! ```
//!
//! ## Numeric policy
//!
//! Coordinates and matrix entries are [`rust_decimal::Decimal`] throughout.
//! Floating point appears only where the algorithm genuinely needs a square
//! root or arctangent: [`transform::Transform::scaling_factor_x`] and the
//! `euclidean`/`weighted_euclidean`/`angle` functions in
//! [`geometry::distance`].
//!
//! ## Concurrency
//!
//! Every type here is an immutable value; there is no shared mutable state
//! and no I/O. Callers may process independent pages concurrently on
//! separate threads without synchronization.
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

/// Error types for the crate.
pub mod error;

/// Geometric primitives: points, vectors, rectangles, line segments, and
/// the distance/nearest-neighbor toolkit.
pub mod geometry;

/// The `Word`/`Letter` consumer contract and the `TextBlock` output shape,
/// plus the `xycut` segmenter built on top of them.
pub mod layout;

/// The affine transformation matrix used to map between PDF device space
/// and analysis space.
pub mod transform;

pub use error::{Error, Result};
pub use geometry::{LineSegment, Point, Rectangle, Vector};
pub use layout::xycut::{
    get_blocks, get_blocks_with_config, get_blocks_with_constant_thresholds,
    get_blocks_with_minimum_width, PartitionNode, SegmenterConfig,
};
pub use layout::{Letter, TextBlock, TextLine, Word};
pub use transform::Transform;

/// Library version, from `CARGO_PKG_VERSION`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name, from `CARGO_PKG_NAME`.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with('0'));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "pagesplit_core");
    }
}
