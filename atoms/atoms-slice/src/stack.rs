//! Resolved slab stacks and slab addressing.

use atoms_types::{AtomicStructure, Cell, Vector3};
use tracing::debug;

use crate::error::{SliceError, SliceResult};
use crate::thickness::{SlabLimits, SlabThicknesses, ThicknessSpec};

/// A structure together with its resolved slab partition.
///
/// Owns the atoms and the per-slab geometry shared by every slicing
/// strategy: thicknesses, entry/exit limits and index checking. The two
/// strategies in this crate ([`crate::IndexedSlices`] and
/// [`crate::PaddedSlices`]) wrap one of these.
#[derive(Debug, Clone)]
pub struct SliceStack {
    structure: AtomicStructure,
    thicknesses: SlabThicknesses,
    limits: Vec<SlabLimits>,
}

impl SliceStack {
    /// Partition `structure` along z according to `spec`.
    ///
    /// # Errors
    ///
    /// - [`SliceError::NonOrthogonalCell`] if the cell has off-diagonal
    ///   terms
    /// - any error from [`ThicknessSpec::resolve`]
    pub fn new(structure: AtomicStructure, spec: &ThicknessSpec) -> SliceResult<Self> {
        if !structure.cell.is_orthogonal() {
            return Err(SliceError::NonOrthogonalCell {
                tolerance: Cell::ORTHOGONAL_TOLERANCE,
            });
        }
        let thicknesses = spec.resolve(structure.cell.height())?;
        let limits = thicknesses.limits();
        debug!(
            atoms = structure.atom_count(),
            slabs = thicknesses.len(),
            "Resolved slab stack"
        );
        Ok(Self {
            structure,
            thicknesses,
            limits,
        })
    }

    /// The partitioned structure.
    #[inline]
    #[must_use]
    pub const fn structure(&self) -> &AtomicStructure {
        &self.structure
    }

    /// Cell extents along x, y and z.
    #[inline]
    #[must_use]
    pub fn box_extents(&self) -> Vector3<f64> {
        self.structure.cell.extents()
    }

    /// Number of slabs in the partition.
    #[inline]
    #[must_use]
    pub fn num_slabs(&self) -> usize {
        self.thicknesses.len()
    }

    /// Per-slab thicknesses.
    #[inline]
    #[must_use]
    pub const fn thicknesses(&self) -> &SlabThicknesses {
        &self.thicknesses
    }

    /// Entry/exit limits for every slab, front to back.
    #[inline]
    #[must_use]
    pub fn limits(&self) -> &[SlabLimits] {
        &self.limits
    }

    /// Entry/exit limits of one slab.
    ///
    /// # Errors
    ///
    /// [`SliceError::SlabIndexOutOfRange`] if `index` is out of range.
    pub fn limit(&self, index: usize) -> SliceResult<SlabLimits> {
        self.check_slab_index(index)?;
        Ok(self.limits[index])
    }

    /// Fail unless `index` addresses a slab.
    ///
    /// # Errors
    ///
    /// [`SliceError::SlabIndexOutOfRange`] if `index >= num_slabs`.
    pub fn check_slab_index(&self, index: usize) -> SliceResult<()> {
        if index < self.num_slabs() {
            Ok(())
        } else {
            Err(SliceError::SlabIndexOutOfRange {
                index,
                num_slabs: self.num_slabs(),
            })
        }
    }
}

/// One slab or a run of slabs, for [`crate::SlicedStructure::get`].
///
/// Converts from `usize` and the standard range types:
///
/// ```
/// use atoms_slice::SlabItem;
///
/// assert_eq!(SlabItem::from(2), SlabItem::Index(2));
/// assert_eq!(
///     SlabItem::from(1..3),
///     SlabItem::Range { start: Some(1), stop: Some(3) }
/// );
/// assert_eq!(SlabItem::from(..), SlabItem::Range { start: None, stop: None });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlabItem {
    /// A single slab.
    Index(usize),

    /// A half-open run of slabs; `None` bounds mean "from the front" and
    /// "to the back".
    Range {
        /// First slab of the run, defaulting to 0.
        start: Option<usize>,
        /// One past the last slab, defaulting to the slab count.
        stop: Option<usize>,
    },
}

impl SlabItem {
    /// Resolve to a concrete `(first, last)` pair against a slab count.
    ///
    /// The stop bound is clamped to `num_slabs`, matching slice-style
    /// indexing; an out-of-range single index therefore degenerates to an
    /// empty run.
    ///
    /// # Errors
    ///
    /// [`SliceError::EmptySlabRange`] if the resolved run contains no
    /// slabs.
    pub fn resolve(self, num_slabs: usize) -> SliceResult<(usize, usize)> {
        let (first, last) = match self {
            Self::Index(index) => (index, index.saturating_add(1)),
            Self::Range { start, stop } => (start.unwrap_or(0), stop.unwrap_or(num_slabs)),
        };
        let last = last.min(num_slabs);
        if first >= last {
            return Err(SliceError::EmptySlabRange { first, last });
        }
        Ok((first, last))
    }
}

impl From<usize> for SlabItem {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<std::ops::Range<usize>> for SlabItem {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::Range {
            start: Some(range.start),
            stop: Some(range.end),
        }
    }
}

impl From<std::ops::RangeFrom<usize>> for SlabItem {
    fn from(range: std::ops::RangeFrom<usize>) -> Self {
        Self::Range {
            start: Some(range.start),
            stop: None,
        }
    }
}

impl From<std::ops::RangeTo<usize>> for SlabItem {
    fn from(range: std::ops::RangeTo<usize>) -> Self {
        Self::Range {
            start: None,
            stop: Some(range.end),
        }
    }
}

impl From<std::ops::RangeFull> for SlabItem {
    fn from(_: std::ops::RangeFull) -> Self {
        Self::Range {
            start: None,
            stop: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use atoms_types::{simple_cubic, Atom, Matrix3};

    #[test]
    fn stack_resolves_spec_against_cell_height() {
        let structure = simple_cubic(79, 2.0, [2, 2, 4]);
        let stack = SliceStack::new(structure, &ThicknessSpec::Uniform(2.0)).unwrap();

        assert_eq!(stack.num_slabs(), 4);
        assert_relative_eq!(stack.thicknesses()[2], 2.0);
        assert_relative_eq!(stack.box_extents().z, 8.0);
        assert_relative_eq!(stack.limit(3).unwrap().exit, 8.0);
        assert_eq!(stack.structure().atom_count(), 16);
    }

    #[test]
    fn stack_rejects_sheared_cells() {
        let matrix = Matrix3::new(4.0, 0.0, 0.5, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0);
        let mut structure = AtomicStructure::new(Cell::from_matrix(matrix));
        structure.atoms.push(Atom::from_coords(6, 1.0, 1.0, 1.0));

        let err = SliceStack::new(structure, &ThicknessSpec::default()).unwrap_err();
        assert!(matches!(err, SliceError::NonOrthogonalCell { .. }));
    }

    #[test]
    fn index_checks_report_the_slab_count() {
        let structure = simple_cubic(79, 2.0, [1, 1, 2]);
        let stack = SliceStack::new(structure, &ThicknessSpec::Uniform(2.0)).unwrap();

        assert!(stack.check_slab_index(1).is_ok());
        let err = stack.limit(2).unwrap_err();
        assert!(matches!(
            err,
            SliceError::SlabIndexOutOfRange {
                index: 2,
                num_slabs: 2
            }
        ));
    }

    #[test]
    fn items_resolve_like_slices() {
        assert_eq!(SlabItem::Index(1).resolve(4).unwrap(), (1, 2));
        assert_eq!(SlabItem::from(1..3).resolve(4).unwrap(), (1, 3));
        assert_eq!(SlabItem::from(2..).resolve(4).unwrap(), (2, 4));
        assert_eq!(SlabItem::from(..3).resolve(4).unwrap(), (0, 3));
        assert_eq!(SlabItem::from(..).resolve(4).unwrap(), (0, 4));
        assert_eq!(SlabItem::from(1..99).resolve(4).unwrap(), (1, 4));
    }

    #[test]
    fn empty_runs_are_rejected() {
        assert!(matches!(
            SlabItem::from(2..2).resolve(4),
            Err(SliceError::EmptySlabRange { first: 2, last: 2 })
        ));
        assert!(matches!(
            SlabItem::from(3..1).resolve(4),
            Err(SliceError::EmptySlabRange { .. })
        ));
        // An out-of-range single index degenerates to an empty run through
        // the clamp
        assert!(matches!(
            SlabItem::Index(4).resolve(4),
            Err(SliceError::EmptySlabRange { first: 4, last: 4 })
        ));
        // The successor saturates, so the far end of the index space is an
        // ordinary empty run rather than an overflow
        assert!(matches!(
            SlabItem::Index(usize::MAX).resolve(4),
            Err(SliceError::EmptySlabRange {
                first: usize::MAX,
                last: 4
            })
        ));
    }
}
