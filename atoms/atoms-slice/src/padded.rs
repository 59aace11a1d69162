//! Padded interval extraction.

use atoms_types::{AtomicNumber, AtomicStructure, Cell};

use crate::error::{SliceError, SliceResult};
use crate::sliced::SlicedStructure;
use crate::stack::SliceStack;
use crate::thickness::ThicknessSpec;

/// Slab extraction with a z apron, atoms selected per query.
///
/// Membership is evaluated against the slab interval widened by
/// `z_padding` on both sides: `entry - z_padding <= z < exit + z_padding`.
/// Atoms near a boundary therefore appear in the extractions of both
/// neighbouring slabs, which is what potential-buildup schemes want.
/// Coordinates are kept in the frame of the full structure (no re-basing),
/// while the box still reports the unpadded slab depth.
///
/// An explicit `last_slab` is inclusive and must itself be in range,
/// matching single-index semantics. `xy_padding` is carried for consumers
/// that widen the transverse window downstream; it never affects
/// membership here.
///
/// # Example
///
/// ```
/// use atoms_slice::{PaddedSlices, SlicedStructure, ThicknessSpec};
/// use atoms_types::simple_cubic;
///
/// let structure = simple_cubic(79, 1.0, [4, 4, 4]);
/// let slices = PaddedSlices::new(structure, &ThicknessSpec::Uniform(1.0), 0.0, 0.5)?;
///
/// // Slab 1 spans [1, 2); the 0.5 Å apron pulls in the z = 2 layer
/// let slab = slices.atoms_in_range(1, None, None)?;
/// assert_eq!(slab.atom_count(), 32);
/// # Ok::<(), atoms_slice::SliceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PaddedSlices {
    stack: SliceStack,
    xy_padding: f64,
    z_padding: f64,
}

impl PaddedSlices {
    /// Partition `structure` and record the paddings.
    ///
    /// # Errors
    ///
    /// - [`SliceError::InvalidPadding`] if a padding is negative or
    ///   non-finite
    /// - any error from [`SliceStack::new`]
    pub fn new(
        structure: AtomicStructure,
        spec: &ThicknessSpec,
        xy_padding: f64,
        z_padding: f64,
    ) -> SliceResult<Self> {
        for padding in [xy_padding, z_padding] {
            if !(padding.is_finite() && padding >= 0.0) {
                return Err(SliceError::InvalidPadding(padding));
            }
        }
        let stack = SliceStack::new(structure, spec)?;
        Ok(Self {
            stack,
            xy_padding,
            z_padding,
        })
    }

    /// Transverse padding, in ångström.
    #[inline]
    #[must_use]
    pub const fn xy_padding(&self) -> f64 {
        self.xy_padding
    }

    /// Apron added to both sides of the z interval, in ångström.
    #[inline]
    #[must_use]
    pub const fn z_padding(&self) -> f64 {
        self.z_padding
    }
}

impl SlicedStructure for PaddedSlices {
    fn stack(&self) -> &SliceStack {
        &self.stack
    }

    fn atoms_in_range(
        &self,
        first_slab: usize,
        last_slab: Option<usize>,
        species: Option<AtomicNumber>,
    ) -> SliceResult<AtomicStructure> {
        self.stack.check_slab_index(first_slab)?;
        let last_slab = last_slab.unwrap_or(first_slab);
        self.stack.check_slab_index(last_slab)?;
        if last_slab < first_slab {
            return Err(SliceError::EmptySlabRange {
                first: first_slab,
                last: last_slab,
            });
        }

        let entry = self.stack.limits()[first_slab].entry;
        let exit = self.stack.limits()[last_slab].exit;
        let floor = entry - self.z_padding;
        let ceiling = exit + self.z_padding;

        let structure = self.stack.structure();
        let mut indices = Vec::new();
        for (index, atom) in structure.atoms.iter().enumerate() {
            let z = atom.position.z;
            if z >= floor && z < ceiling {
                indices.push(index);
            }
        }
        if let Some(number) = species {
            indices.retain(|&index| structure.atoms[index].number == number);
        }

        let extents = self.stack.box_extents();
        let mut slab = structure.select(&indices);
        slab.cell = Cell::orthorhombic(extents.x, extents.y, exit - entry);
        Ok(slab)
    }
}
