//! Error types for slab partitioning operations.

use thiserror::Error;

/// Errors that can occur while resolving slab thicknesses or querying
/// slabs.
#[derive(Debug, Error)]
pub enum SliceError {
    /// The cell is not orthogonal, so slabs along z are not well defined.
    #[error("Cell is not orthogonal (off-diagonal terms exceed {tolerance:e})")]
    NonOrthogonalCell {
        /// Tolerance the off-diagonal terms were checked against.
        tolerance: f64,
    },

    /// Resolved thicknesses do not span the cell height.
    #[error("Slab thicknesses sum to {sum} but the cell height is {expected}")]
    ThicknessSumMismatch {
        /// Sum of the resolved thicknesses.
        sum: f64,
        /// The cell height the sum must match.
        expected: f64,
    },

    /// Resolution produced a different slab count than was requested.
    #[error("Resolved {actual} slabs but {requested} were requested")]
    SlabCountMismatch {
        /// Number of thickness entries after resolution.
        actual: usize,
        /// Externally constrained slab count.
        requested: usize,
    },

    /// A thickness value that cannot form a slab.
    #[error("Invalid slab thickness: {0} (must be > 0 and finite)")]
    InvalidThickness(f64),

    /// A plane-detection tolerance that cannot bucket coordinates.
    #[error("Invalid plane tolerance: {0} (must be > 0 and finite)")]
    InvalidTolerance(f64),

    /// A padding value that cannot widen a slab.
    #[error("Invalid padding: {0} (must be >= 0 and finite)")]
    InvalidPadding(f64),

    /// A specification kind the height-only resolver cannot act on.
    #[error(
        "Unsupported thickness specification: crystal-plane detection needs atomic positions \
         (run crystal_plane_thicknesses and pass the result as an explicit sequence)"
    )]
    UnsupportedSpec,

    /// Slab index past the end of the stack.
    #[error("Slab index {index} out of range for {num_slabs} slabs")]
    SlabIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of slabs in the stack.
        num_slabs: usize,
    },

    /// A slab range that selects nothing.
    #[error("Slab range {first}..{last} is empty")]
    EmptySlabRange {
        /// First requested slab.
        first: usize,
        /// Requested end of the range.
        last: usize,
    },
}

/// Result type for slab partitioning operations.
pub type SliceResult<T> = std::result::Result<T, SliceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SliceError::SlabIndexOutOfRange {
            index: 7,
            num_slabs: 4,
        };
        assert_eq!(format!("{err}"), "Slab index 7 out of range for 4 slabs");

        let err = SliceError::InvalidPadding(-0.5);
        assert!(format!("{err}").contains("-0.5"));

        let err = SliceError::ThicknessSumMismatch {
            sum: 9.9,
            expected: 10.0,
        };
        assert!(format!("{err}").contains("9.9"));
        assert!(format!("{err}").contains("10"));
    }
}
