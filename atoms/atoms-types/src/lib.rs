//! Core atomic-structure types for multislice simulation pipelines.
//!
//! This crate provides the foundational types for working with atomic
//! structures:
//!
//! - [`Cell`] - A simulation box described by three lattice vectors
//! - [`Atom`] - A point particle with a species code and a position
//! - [`AtomicStructure`] - A cell together with the atoms inside it
//!
//! # Units
//!
//! All coordinates and cell dimensions are `f64` ångström (Å).
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**:
//! - X, Y: transverse plane
//! - Z: propagation direction (the beam axis in downstream simulation)
//!
//! # Example
//!
//! ```
//! use atoms_types::{Atom, AtomicStructure, Cell};
//!
//! // Two gold atoms in a 4 Å cube
//! let mut structure = AtomicStructure::new(Cell::cubic(4.08));
//! structure.atoms.push(Atom::from_coords(79, 0.0, 0.0, 0.0));
//! structure.atoms.push(Atom::from_coords(79, 2.04, 2.04, 2.04));
//!
//! assert_eq!(structure.atom_count(), 2);
//! assert!(structure.cell.is_orthogonal());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod atom;
mod cell;
mod structure;

// Re-export core types
pub use atom::{Atom, AtomicNumber};
pub use cell::Cell;
pub use structure::{simple_cubic, AtomicStructure};

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Point3, Vector3};
