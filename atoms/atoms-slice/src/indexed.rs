//! Exact per-slab binning.

use atoms_types::{AtomicNumber, AtomicStructure, Cell, Vector3};
use tracing::debug;

use crate::error::{SliceError, SliceResult};
use crate::sliced::SlicedStructure;
use crate::stack::SliceStack;
use crate::thickness::ThicknessSpec;

/// Slab extraction with exact membership, each atom owned by one slab.
///
/// Atoms are binned once at construction under the half-open rule
/// `entry <= z < exit`, so an atom sitting exactly on a boundary belongs
/// to the slab beginning there and an atom exactly on the cell's top face
/// belongs to no slab. Atoms below the cell floor clamp into the first
/// slab. Extracted structures are re-based: the first queried slab starts
/// at local z = 0, and the box shrinks to the queried depth.
///
/// An explicit `last_slab` is exclusive and clamped to the slab count,
/// matching slice-style indexing.
///
/// # Example
///
/// ```
/// use atoms_slice::{IndexedSlices, SlicedStructure, ThicknessSpec};
/// use atoms_types::simple_cubic;
///
/// let structure = simple_cubic(79, 1.0, [4, 4, 4]);
/// let slices = IndexedSlices::new(structure, &ThicknessSpec::Uniform(1.0))?;
///
/// assert_eq!(slices.num_slabs(), 4);
/// assert_eq!(slices.get(0)?.atom_count(), 16);
/// # Ok::<(), atoms_slice::SliceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IndexedSlices {
    stack: SliceStack,
    bins: Vec<Vec<usize>>,
}

impl IndexedSlices {
    /// Partition `structure` and bin every atom into its slab.
    ///
    /// # Errors
    ///
    /// Any error from [`SliceStack::new`].
    pub fn new(structure: AtomicStructure, spec: &ThicknessSpec) -> SliceResult<Self> {
        let stack = SliceStack::new(structure, spec)?;

        let mut bins = vec![Vec::new(); stack.num_slabs()];
        let mut dropped = 0_usize;
        for (index, atom) in stack.structure().atoms.iter().enumerate() {
            let z = atom.position.z;
            let slab = stack.limits().partition_point(|limit| limit.exit <= z);
            if slab < bins.len() {
                bins[slab].push(index);
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            debug!(dropped, "Atoms at or above the cell top excluded from binning");
        }

        Ok(Self { stack, bins })
    }
}

impl SlicedStructure for IndexedSlices {
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
        let last_slab = last_slab
            .unwrap_or(first_slab + 1)
            .min(self.stack.num_slabs());
        if last_slab <= first_slab {
            return Err(SliceError::EmptySlabRange {
                first: first_slab,
                last: last_slab,
            });
        }

        let mut indices: Vec<usize> = if last_slab - first_slab == 1 {
            self.bins[first_slab].clone()
        } else {
            self.bins[first_slab..last_slab]
                .iter()
                .flatten()
                .copied()
                .collect()
        };
        if let Some(number) = species {
            let atoms = &self.stack.structure().atoms;
            indices.retain(|&index| atoms[index].number == number);
        }

        let thicknesses = self.stack.thicknesses();
        let depth = thicknesses.span(first_slab, last_slab);
        let offset = thicknesses.span(0, first_slab);
        let extents = self.stack.box_extents();

        let mut slab = self.stack.structure().select(&indices);
        slab.cell = Cell::orthorhombic(extents.x, extents.y, depth);
        slab.translate(Vector3::new(0.0, 0.0, -offset));
        Ok(slab)
    }
}
