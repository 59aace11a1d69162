//! Slab partitioning of atomic structures for multislice simulation.
//!
//! Multislice propagation advances a wave through a specimen one thin
//! slab at a time, so the first step of any such calculation is cutting
//! the structure into slabs along the propagation axis. This crate
//! resolves slab thicknesses and extracts per-slab structures:
//!
//! - [`ThicknessSpec`] and [`crystal_plane_thicknesses`] turn a uniform
//!   target, explicit values or detected crystal planes into
//!   [`SlabThicknesses`]
//! - [`SliceStack`] pairs a structure with its resolved partition
//! - [`IndexedSlices`] and [`PaddedSlices`] extract slab contents under
//!   exact or padded membership, behind the common [`SlicedStructure`]
//!   interface
//!
//! # Example
//!
//! ```
//! use atoms_slice::{IndexedSlices, SlicedStructure, ThicknessSpec};
//! use atoms_types::simple_cubic;
//!
//! // A silicon block, 4 layers of 16 atoms, in an 8 Å cell
//! let structure = simple_cubic(14, 2.0, [4, 4, 4]);
//!
//! let slices = IndexedSlices::new(structure, &ThicknessSpec::Uniform(2.0))?;
//! assert_eq!(slices.num_slabs(), 4);
//!
//! for slab in slices.slabs(0, None, None) {
//!     let slab = slab?;
//!     assert_eq!(slab.atom_count(), 16);
//!     assert_eq!(slab.cell.height(), 2.0);
//! }
//! # Ok::<(), atoms_slice::SliceError>(())
//! ```
//!
//! # Coordinate System
//!
//! Lengths are in ångström. The propagation axis is z: slabs stack from
//! the cell floor at z = 0 towards the exit face, and x/y span the
//! transverse plane. Cells must be orthogonal.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod indexed;
mod padded;
mod sliced;
mod stack;
mod thickness;

pub use error::{SliceError, SliceResult};
pub use indexed::IndexedSlices;
pub use padded::PaddedSlices;
pub use sliced::SlicedStructure;
pub use stack::{SlabItem, SliceStack};
pub use thickness::{
    crystal_plane_thicknesses, SlabLimits, SlabThicknesses, SUM_RELATIVE_TOLERANCE,
    ThicknessSpec,
};

pub use atoms_types::{Atom, AtomicNumber, AtomicStructure, Cell};
pub use nalgebra::{Point3, Vector3};
