//! Atomic structure: a cell plus its atoms.

use crate::{Atom, AtomicNumber, Cell};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An atomic structure: a simulation cell and the atoms inside it.
///
/// Atoms are stored as a flat `Vec<Atom>`; species and positions always
/// stay index-aligned because both live inside [`Atom`]. Positions are
/// Cartesian world coordinates, not fractional coordinates.
///
/// # Example
///
/// ```
/// use atoms_types::{Atom, AtomicStructure, Cell};
///
/// let mut structure = AtomicStructure::new(Cell::orthorhombic(4.0, 4.0, 10.0));
/// structure.atoms.push(Atom::from_coords(14, 2.0, 2.0, 1.0));
/// structure.atoms.push(Atom::from_coords(8, 2.0, 2.0, 6.0));
///
/// assert_eq!(structure.atom_count(), 2);
/// assert_eq!(structure.numbers().collect::<Vec<_>>(), vec![14, 8]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtomicStructure {
    /// The simulation cell.
    pub cell: Cell,

    /// The atoms inside the cell.
    pub atoms: Vec<Atom>,
}

impl AtomicStructure {
    /// Create an empty structure with the given cell.
    #[inline]
    #[must_use]
    pub const fn new(cell: Cell) -> Self {
        Self {
            cell,
            atoms: Vec::new(),
        }
    }

    /// Create an empty structure with pre-allocated atom capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(cell: Cell, atom_count: usize) -> Self {
        Self {
            cell,
            atoms: Vec::with_capacity(atom_count),
        }
    }

    /// Create a structure from a cell and its atoms.
    ///
    /// # Example
    ///
    /// ```
    /// use atoms_types::{Atom, AtomicStructure, Cell};
    ///
    /// let atoms = vec![
    ///     Atom::from_coords(79, 0.0, 0.0, 0.0),
    ///     Atom::from_coords(79, 2.0, 2.0, 2.0),
    /// ];
    /// let structure = AtomicStructure::from_parts(Cell::cubic(4.0), atoms);
    /// assert_eq!(structure.atom_count(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(cell: Cell, atoms: Vec<Atom>) -> Self {
        Self { cell, atoms }
    }

    /// Number of atoms.
    #[inline]
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Check if the structure has no atoms.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Iterate over atom positions.
    pub fn positions(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.atoms.iter().map(|atom| &atom.position)
    }

    /// Iterate over species codes.
    pub fn numbers(&self) -> impl Iterator<Item = AtomicNumber> + '_ {
        self.atoms.iter().map(|atom| atom.number)
    }

    /// Copy a subset of atoms into a new structure sharing this cell.
    ///
    /// Atoms appear in the order of `indices`.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            cell: self.cell,
            atoms: indices.iter().map(|&index| self.atoms[index]).collect(),
        }
    }

    /// Translate every atom by `offset`.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for atom in &mut self.atoms {
            atom.position += offset;
        }
    }
}

/// Helper to build a simple-cubic crystal of one species.
///
/// Places one atom per cubic unit cell at spacing `lattice_constant`,
/// repeated `repeats` times along x, y, z, inside a tight orthorhombic
/// cell. Atoms sit at multiples of the lattice constant starting at the
/// origin, so none touch the far faces of the cell.
///
/// # Example
///
/// ```
/// use atoms_types::simple_cubic;
///
/// let crystal = simple_cubic(79, 2.0, [3, 3, 4]);
/// assert_eq!(crystal.atom_count(), 36);
/// assert_eq!(crystal.cell.height(), 8.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)] // Repeat counts are small integers, exactly representable
pub fn simple_cubic(
    number: AtomicNumber,
    lattice_constant: f64,
    repeats: [usize; 3],
) -> AtomicStructure {
    let [nx, ny, nz] = repeats;
    let cell = Cell::orthorhombic(
        lattice_constant * nx as f64,
        lattice_constant * ny as f64,
        lattice_constant * nz as f64,
    );

    let mut structure = AtomicStructure::with_capacity(cell, nx * ny * nz);
    for ix in 0..nx {
        for iy in 0..ny {
            for iz in 0..nz {
                structure.atoms.push(Atom::from_coords(
                    number,
                    ix as f64 * lattice_constant,
                    iy as f64 * lattice_constant,
                    iz as f64 * lattice_constant,
                ));
            }
        }
    }
    structure
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn structure_construction() {
        let structure = AtomicStructure::new(Cell::cubic(4.0));
        assert!(structure.is_empty());
        assert_eq!(structure.atom_count(), 0);

        let atoms = vec![
            Atom::from_coords(14, 0.0, 0.0, 0.0),
            Atom::from_coords(14, 2.0, 0.0, 0.0),
        ];
        let structure = AtomicStructure::from_parts(Cell::cubic(4.0), atoms);
        assert_eq!(structure.atom_count(), 2);
        assert!(!structure.is_empty());
    }

    #[test]
    fn select_copies_subset_in_order() {
        let atoms = vec![
            Atom::from_coords(1, 0.0, 0.0, 0.0),
            Atom::from_coords(2, 1.0, 0.0, 0.0),
            Atom::from_coords(3, 2.0, 0.0, 0.0),
        ];
        let structure = AtomicStructure::from_parts(Cell::cubic(4.0), atoms);

        let subset = structure.select(&[2, 0]);
        assert_eq!(subset.atom_count(), 2);
        assert_eq!(subset.atoms[0].number, 3);
        assert_eq!(subset.atoms[1].number, 1);
        assert_eq!(subset.cell, structure.cell);
    }

    #[test]
    fn translate_moves_every_atom() {
        let atoms = vec![
            Atom::from_coords(6, 0.0, 0.0, 0.0),
            Atom::from_coords(6, 1.0, 1.0, 1.0),
        ];
        let mut structure = AtomicStructure::from_parts(Cell::cubic(4.0), atoms);
        structure.translate(Vector3::new(0.0, 0.0, -1.0));

        assert_relative_eq!(structure.atoms[0].position.z, -1.0);
        assert_relative_eq!(structure.atoms[1].position.z, 0.0);
        // x and y untouched by a z translation
        assert_relative_eq!(structure.atoms[1].position.x, 1.0);
    }

    #[test]
    fn iterators_stay_aligned() {
        let atoms = vec![
            Atom::from_coords(14, 0.0, 0.0, 1.0),
            Atom::from_coords(8, 0.0, 0.0, 2.0),
        ];
        let structure = AtomicStructure::from_parts(Cell::cubic(4.0), atoms);

        let numbers: Vec<_> = structure.numbers().collect();
        let heights: Vec<_> = structure.positions().map(|p| p.z).collect();
        assert_eq!(numbers, vec![14, 8]);
        assert_relative_eq!(heights[0], 1.0);
        assert_relative_eq!(heights[1], 2.0);
    }

    #[test]
    fn simple_cubic_layout() {
        let crystal = simple_cubic(79, 2.0, [2, 2, 3]);
        assert_eq!(crystal.atom_count(), 12);
        assert_relative_eq!(crystal.cell.extents().x, 4.0);
        assert_relative_eq!(crystal.cell.height(), 6.0);

        // Atoms occupy z = 0, 2, 4; none reach the top face at 6
        let max_z = crystal.positions().map(|p| p.z).fold(f64::MIN, f64::max);
        assert_relative_eq!(max_z, 4.0);
    }
}
