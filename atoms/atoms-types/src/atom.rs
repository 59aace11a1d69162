//! Atoms and species codes.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Species code: the atomic number of an element (1 = H, 14 = Si,
/// 79 = Au, ...).
pub type AtomicNumber = u32;

/// A point particle: a species code plus a position.
///
/// Keeping the species inside the atom means positions and species can
/// never fall out of alignment the way parallel arrays can.
///
/// # Example
///
/// ```
/// use atoms_types::{Atom, Point3};
///
/// let silicon = Atom::new(14, Point3::new(1.0, 2.0, 3.0));
/// assert_eq!(silicon.number, 14);
/// assert_eq!(silicon.position.z, 3.0);
///
/// let gold = Atom::from_coords(79, 0.0, 0.0, 0.0);
/// assert_eq!(gold.number, 79);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Atom {
    /// Atomic number of the species.
    pub number: AtomicNumber,

    /// Position in ångström.
    pub position: Point3<f64>,
}

impl Atom {
    /// Create an atom from a species code and a position.
    #[inline]
    #[must_use]
    pub const fn new(number: AtomicNumber, position: Point3<f64>) -> Self {
        Self { number, position }
    }

    /// Create an atom from a species code and raw coordinates.
    #[inline]
    #[must_use]
    pub fn from_coords(number: AtomicNumber, x: f64, y: f64, z: f64) -> Self {
        Self {
            number,
            position: Point3::new(x, y, z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn atom_construction() {
        let a = Atom::from_coords(6, 1.0, 2.0, 3.0);
        assert_eq!(a.number, 6);
        assert_relative_eq!(a.position.x, 1.0);
        assert_relative_eq!(a.position.y, 2.0);
        assert_relative_eq!(a.position.z, 3.0);

        let b = Atom::new(6, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(a, b);
    }
}
