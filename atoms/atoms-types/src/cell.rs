//! Simulation cell.

use nalgebra::{Matrix3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A simulation cell: three lattice vectors stored as the rows of a
/// 3x3 matrix.
///
/// Arbitrary cells can be stored and inspected, but slicing and multislice
/// work require an orthogonal cell, i.e. a matrix that is diagonal up to a
/// small tolerance. [`Cell::is_orthogonal`] checks this.
///
/// # Example
///
/// ```
/// use atoms_types::Cell;
///
/// let cell = Cell::orthorhombic(8.0, 8.0, 20.0);
/// assert!(cell.is_orthogonal());
/// assert_eq!(cell.extents().z, 20.0);
/// assert_eq!(cell.height(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    /// Lattice vectors as matrix rows, in ångström.
    pub matrix: Matrix3<f64>,
}

impl Cell {
    /// Tolerance on off-diagonal terms used by [`Cell::is_orthogonal`],
    /// in ångström.
    pub const ORTHOGONAL_TOLERANCE: f64 = 1e-12;

    /// Create a cell from a full lattice matrix.
    #[inline]
    #[must_use]
    pub const fn from_matrix(matrix: Matrix3<f64>) -> Self {
        Self { matrix }
    }

    /// Create an orthorhombic cell with edge lengths `a`, `b`, `c`.
    ///
    /// # Example
    ///
    /// ```
    /// use atoms_types::Cell;
    ///
    /// let cell = Cell::orthorhombic(4.0, 5.0, 6.0);
    /// assert_eq!(cell.extents().x, 4.0);
    /// assert_eq!(cell.extents().y, 5.0);
    /// assert_eq!(cell.extents().z, 6.0);
    /// ```
    #[must_use]
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
        Self {
            matrix: Matrix3::new(a, 0.0, 0.0, 0.0, b, 0.0, 0.0, 0.0, c),
        }
    }

    /// Create a cubic cell with edge length `a`.
    #[inline]
    #[must_use]
    pub fn cubic(a: f64) -> Self {
        Self::orthorhombic(a, a, a)
    }

    /// The diagonal of the lattice matrix: the cell extents along x, y, z.
    ///
    /// Only meaningful as box dimensions when the cell is orthogonal.
    #[inline]
    #[must_use]
    pub fn extents(&self) -> Vector3<f64> {
        self.matrix.diagonal()
    }

    /// The cell extent along the propagation axis (z).
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.matrix[(2, 2)]
    }

    /// The cell volume.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.matrix.determinant().abs()
    }

    /// Check that the cell is orthogonal within
    /// [`Cell::ORTHOGONAL_TOLERANCE`].
    #[inline]
    #[must_use]
    pub fn is_orthogonal(&self) -> bool {
        self.is_orthogonal_with(Self::ORTHOGONAL_TOLERANCE)
    }

    /// Check that every off-diagonal term is at most `tolerance` in
    /// magnitude.
    ///
    /// # Example
    ///
    /// ```
    /// use atoms_types::{Cell, Matrix3};
    ///
    /// let sheared = Cell::from_matrix(Matrix3::new(
    ///     4.0, 0.0, 0.0,
    ///     0.1, 4.0, 0.0,
    ///     0.0, 0.0, 4.0,
    /// ));
    /// assert!(!sheared.is_orthogonal());
    /// assert!(sheared.is_orthogonal_with(0.2));
    /// ```
    #[must_use]
    pub fn is_orthogonal_with(&self, tolerance: f64) -> bool {
        for row in 0..3 {
            for col in 0..3 {
                if row != col && self.matrix[(row, col)].abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}
