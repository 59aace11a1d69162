//! The strategy-independent slicing interface.

use atoms_types::{AtomicNumber, AtomicStructure, Vector3};

use crate::error::SliceResult;
use crate::stack::{SlabItem, SliceStack};
use crate::thickness::{SlabLimits, SlabThicknesses};

/// Common interface over slab-partitioned structures.
///
/// Implementors wrap a [`SliceStack`] and decide which atoms belong to a
/// slab; everything else (geometry accessors, iteration, item-style
/// lookup) is provided on top of that.
///
/// # Example
///
/// ```
/// use atoms_slice::{IndexedSlices, SlicedStructure, ThicknessSpec};
/// use atoms_types::simple_cubic;
///
/// let structure = simple_cubic(79, 2.0, [2, 2, 4]);
/// let slices = IndexedSlices::new(structure, &ThicknessSpec::Uniform(2.0))?;
///
/// assert_eq!(slices.num_slabs(), 4);
/// for slab in slices.slabs(0, None, None) {
///     assert_eq!(slab?.atom_count(), 4);
/// }
/// # Ok::<(), atoms_slice::SliceError>(())
/// ```
pub trait SlicedStructure {
    /// The underlying stack.
    fn stack(&self) -> &SliceStack;

    /// Extract the atoms of slabs `first_slab..last_slab` as a fresh
    /// structure.
    ///
    /// `last_slab` of `None` means the single slab `first_slab`. How an
    /// explicit `last_slab` is interpreted (exclusive or inclusive) is the
    /// strategy's convention; see the implementor docs. `species`, when
    /// set, keeps only atoms of that atomic number and never widens
    /// membership.
    ///
    /// # Errors
    ///
    /// - [`crate::SliceError::SlabIndexOutOfRange`] for an out-of-range
    ///   `first_slab` (and, for strategies with inclusive bounds, an
    ///   out-of-range `last_slab`)
    /// - [`crate::SliceError::EmptySlabRange`] if the range contains no
    ///   slabs
    fn atoms_in_range(
        &self,
        first_slab: usize,
        last_slab: Option<usize>,
        species: Option<AtomicNumber>,
    ) -> SliceResult<AtomicStructure>;

    /// The partitioned structure.
    fn structure(&self) -> &AtomicStructure {
        self.stack().structure()
    }

    /// Cell extents along x, y and z.
    fn box_extents(&self) -> Vector3<f64> {
        self.stack().box_extents()
    }

    /// Number of slabs in the partition.
    fn num_slabs(&self) -> usize {
        self.stack().num_slabs()
    }

    /// Per-slab thicknesses.
    fn thicknesses(&self) -> &SlabThicknesses {
        self.stack().thicknesses()
    }

    /// Entry/exit limits for every slab, front to back.
    fn limits(&self) -> &[SlabLimits] {
        self.stack().limits()
    }

    /// Entry/exit limits of one slab.
    ///
    /// # Errors
    ///
    /// [`crate::SliceError::SlabIndexOutOfRange`] if `index` is out of
    /// range.
    fn limit(&self, index: usize) -> SliceResult<SlabLimits> {
        self.stack().limit(index)
    }

    /// Iterate over single-slab extractions for `first_slab..last_slab`.
    ///
    /// The iterator is lazy and can be restarted by calling again; each
    /// item is an independent [`Self::atoms_in_range`] call for one slab.
    /// `last_slab` of `None` means "to the back", and bounds beyond the
    /// slab count yield nothing rather than an error.
    fn slabs(
        &self,
        first_slab: usize,
        last_slab: Option<usize>,
        species: Option<AtomicNumber>,
    ) -> impl Iterator<Item = SliceResult<AtomicStructure>> {
        let last = last_slab
            .unwrap_or_else(|| self.num_slabs())
            .min(self.num_slabs());
        (first_slab..last).map(move |index| self.atoms_in_range(index, None, species))
    }

    /// Extract by slab index or range, slice-style.
    ///
    /// Accepts anything convertible to [`SlabItem`]: `get(2)`,
    /// `get(1..3)`, `get(..)` and friends. The resolved bounds are handed
    /// to [`Self::atoms_in_range`] under the strategy's own convention.
    ///
    /// # Errors
    ///
    /// Any error from [`SlabItem::resolve`] or
    /// [`Self::atoms_in_range`].
    fn get(&self, item: impl Into<SlabItem>) -> SliceResult<AtomicStructure> {
        let (first, last) = item.into().resolve(self.num_slabs())?;
        self.atoms_in_range(first, Some(last), None)
    }
}
