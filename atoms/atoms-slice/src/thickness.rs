//! Slab thickness resolution.
//!
//! A [`ThicknessSpec`] describes how thick the slabs of a partition should
//! be; resolving it against a cell height produces the concrete
//! [`SlabThicknesses`] the rest of this crate consumes.

// Slab counts and bucket indices fit their integer types for any physical cell
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use std::collections::BTreeSet;

use approx::relative_eq;
use atoms_types::AtomicStructure;
use tracing::debug;

use crate::error::{SliceError, SliceResult};

/// Relative tolerance for thickness-sum validation.
pub const SUM_RELATIVE_TOLERANCE: f64 = 1e-8;

/// How to derive per-slab thicknesses for a cell.
///
/// # Example
///
/// ```
/// use atoms_slice::ThicknessSpec;
///
/// // A 10 Å cell split against a 3 Å target: 4 slabs of 2.5 Å
/// let thicknesses = ThicknessSpec::Uniform(3.0).resolve(10.0)?;
/// assert_eq!(thicknesses.len(), 4);
/// assert_eq!(thicknesses[0], 2.5);
/// # Ok::<(), atoms_slice::SliceError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ThicknessSpec {
    /// Split the height into equal slabs of roughly this thickness.
    ///
    /// The value is a target: the height is divided into
    /// `ceil(height / target)` slabs of exactly `height / n` each, so the
    /// partition always spans the cell with no short trailing slab.
    Uniform(f64),

    /// Use these thicknesses verbatim, one slab each.
    ///
    /// Entries must be positive and sum to the cell height.
    Explicit(Vec<f64>),

    /// Derive thicknesses from detected crystallographic planes.
    ///
    /// This kind needs atomic positions and therefore cannot be resolved
    /// from a height alone; run [`crystal_plane_thicknesses`] and pass its
    /// values as [`ThicknessSpec::Explicit`].
    CrystalPlanes {
        /// Bucketing tolerance for grouping z coordinates, in ångström.
        tolerance: f64,
    },
}

impl Default for ThicknessSpec {
    /// A 0.5 Å uniform target, the customary multislice default.
    fn default() -> Self {
        Self::Uniform(0.5)
    }
}

impl ThicknessSpec {
    /// Resolve the spec against a cell height.
    ///
    /// A non-positive height resolves a uniform target to zero slabs.
    ///
    /// # Errors
    ///
    /// - [`SliceError::InvalidThickness`] for a non-positive or non-finite
    ///   target or entry
    /// - [`SliceError::ThicknessSumMismatch`] if explicit entries do not
    ///   sum to `height` within [`SUM_RELATIVE_TOLERANCE`]
    /// - [`SliceError::UnsupportedSpec`] for
    ///   [`ThicknessSpec::CrystalPlanes`]
    pub fn resolve(&self, height: f64) -> SliceResult<SlabThicknesses> {
        match self {
            Self::Uniform(target) => {
                if !(target.is_finite() && *target > 0.0) {
                    return Err(SliceError::InvalidThickness(*target));
                }
                let count = (height / target).ceil().max(0.0) as usize;
                if count == 0 {
                    return Ok(SlabThicknesses::uniform(0.0, 0));
                }
                Ok(SlabThicknesses::uniform(height / count as f64, count))
            }
            Self::Explicit(values) => {
                let thicknesses = SlabThicknesses::try_from_values(values.clone())?;
                thicknesses.check_total(height)?;
                Ok(thicknesses)
            }
            Self::CrystalPlanes { .. } => Err(SliceError::UnsupportedSpec),
        }
    }

    /// Resolve the spec against a cell height and an externally
    /// constrained slab count.
    ///
    /// # Errors
    ///
    /// As [`ThicknessSpec::resolve`], plus
    /// [`SliceError::SlabCountMismatch`] if resolution produces a
    /// different number of slabs than `num_slabs`.
    pub fn resolve_with_count(
        &self,
        height: f64,
        num_slabs: usize,
    ) -> SliceResult<SlabThicknesses> {
        let thicknesses = self.resolve(height)?;
        if thicknesses.len() == num_slabs {
            Ok(thicknesses)
        } else {
            Err(SliceError::SlabCountMismatch {
                actual: thicknesses.len(),
                requested: num_slabs,
            })
        }
    }
}

/// Resolved per-slab thicknesses, in ångström.
///
/// Ordered front to back along z, one entry per slab. Instances come from
/// [`ThicknessSpec::resolve`], [`crystal_plane_thicknesses`] or the
/// constructors here, and are immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SlabThicknesses(Vec<f64>);

impl SlabThicknesses {
    /// `count` equal slabs of exactly `thickness` each.
    ///
    /// This is the count-constrained path: no height target is involved,
    /// so no sum validation happens here.
    ///
    /// # Example
    ///
    /// ```
    /// use atoms_slice::SlabThicknesses;
    ///
    /// let thicknesses = SlabThicknesses::uniform(1.5, 3);
    /// assert_eq!(thicknesses.len(), 3);
    /// assert_eq!(thicknesses.total(), 4.5);
    /// ```
    #[must_use]
    pub fn uniform(thickness: f64, count: usize) -> Self {
        Self(vec![thickness; count])
    }

    /// Wrap explicit values, validating every entry.
    ///
    /// # Errors
    ///
    /// [`SliceError::InvalidThickness`] if an entry is not positive and
    /// finite.
    pub fn try_from_values(values: Vec<f64>) -> SliceResult<Self> {
        for &value in &values {
            if !(value.is_finite() && value > 0.0) {
                return Err(SliceError::InvalidThickness(value));
            }
        }
        Ok(Self(values))
    }

    /// Number of slabs.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no slabs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The thicknesses as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterate over the thicknesses.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Total height spanned by all slabs.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Height spanned by slabs `first..last` (half-open, clamped to the
    /// slab count).
    #[must_use]
    pub fn span(&self, first: usize, last: usize) -> f64 {
        let last = last.min(self.0.len());
        let first = first.min(last);
        self.0[first..last].iter().sum()
    }

    /// Fail unless the total matches `expected` within
    /// [`SUM_RELATIVE_TOLERANCE`].
    ///
    /// # Errors
    ///
    /// [`SliceError::ThicknessSumMismatch`] with both values on failure.
    pub fn check_total(&self, expected: f64) -> SliceResult<()> {
        let sum = self.total();
        if relative_eq!(sum, expected, max_relative = SUM_RELATIVE_TOLERANCE) {
            Ok(())
        } else {
            Err(SliceError::ThicknessSumMismatch { sum, expected })
        }
    }

    /// Per-slab entry/exit table.
    ///
    /// Boundaries are accumulated left to right, so `exit` of one slab and
    /// `entry` of the next are the same value, bit for bit.
    ///
    /// # Example
    ///
    /// ```
    /// use atoms_slice::SlabThicknesses;
    ///
    /// let thicknesses = SlabThicknesses::try_from_values(vec![2.0, 3.0, 5.0])?;
    /// let limits = thicknesses.limits();
    /// assert_eq!((limits[1].entry, limits[1].exit), (2.0, 5.0));
    /// assert_eq!(limits[2].exit, 10.0);
    /// # Ok::<(), atoms_slice::SliceError>(())
    /// ```
    #[must_use]
    pub fn limits(&self) -> Vec<SlabLimits> {
        let mut limits = Vec::with_capacity(self.0.len());
        let mut entry = 0.0;
        for &thickness in &self.0 {
            limits.push(SlabLimits {
                entry,
                exit: entry + thickness,
            });
            entry += thickness;
        }
        limits
    }
}

impl std::ops::Index<usize> for SlabThicknesses {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a SlabThicknesses {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Entry and exit coordinates of one slab, in ångström from the cell
/// floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlabLimits {
    /// Coordinate where the slab begins.
    pub entry: f64,

    /// Coordinate where the slab ends.
    pub exit: f64,
}

impl SlabLimits {
    /// Thickness spanned by this slab.
    #[inline]
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.exit - self.entry
    }
}

/// Derive slab thicknesses from crystallographic planes.
///
/// Groups atomic z coordinates into buckets of width `tolerance`, treats
/// each occupied bucket's midpoint as a plane, adds sentinel planes at the
/// cell floor and ceiling, and returns the gaps between consecutive planes
/// as thicknesses. Atoms sharing a plane up to the tolerance therefore end
/// up inside the same slab, with empty space between planes absorbed by
/// wider slabs.
///
/// The tolerance must evenly bucket the cell height (for example 0.2 for a
/// 10 Å cell); otherwise the derived thicknesses cannot span the cell and
/// the sum check fails.
///
/// # Errors
///
/// - [`SliceError::InvalidTolerance`] for a non-positive or non-finite
///   tolerance
/// - [`SliceError::ThicknessSumMismatch`] if the gaps do not sum to the
///   cell height, either because the tolerance does not evenly bucket it
///   or because atoms outside the cell contribute planes past its faces
///
/// # Example
///
/// ```
/// use atoms_slice::{crystal_plane_thicknesses, ThicknessSpec};
/// use atoms_types::{Atom, AtomicStructure, Cell};
///
/// let atoms = vec![
///     Atom::from_coords(14, 0.0, 0.0, 0.95),
///     Atom::from_coords(14, 0.0, 0.0, 1.05),
///     Atom::from_coords(14, 0.0, 0.0, 3.0),
/// ];
/// let structure = AtomicStructure::from_parts(Cell::orthorhombic(4.0, 4.0, 4.0), atoms);
///
/// let thicknesses = crystal_plane_thicknesses(&structure, 0.5)?;
/// let spec = ThicknessSpec::Explicit(thicknesses.as_slice().to_vec());
/// assert!(spec.resolve(4.0).is_ok());
/// # Ok::<(), atoms_slice::SliceError>(())
/// ```
pub fn crystal_plane_thicknesses(
    structure: &AtomicStructure,
    tolerance: f64,
) -> SliceResult<SlabThicknesses> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(SliceError::InvalidTolerance(tolerance));
    }
    let height = structure.cell.height();

    // Occupied z buckets, with sentinels at the floor and ceiling so the
    // first and last gaps reach the cell faces.
    let mut buckets = BTreeSet::new();
    buckets.insert(bucket_of(0.0, tolerance));
    buckets.insert(bucket_of(height, tolerance));
    for atom in &structure.atoms {
        buckets.insert(bucket_of(atom.position.z, tolerance));
    }

    let planes: Vec<f64> = buckets
        .iter()
        .map(|&bucket| (bucket as f64 + 0.5) * tolerance)
        .collect();
    let values: Vec<f64> = planes.windows(2).map(|pair| pair[1] - pair[0]).collect();

    debug!(
        planes = planes.len(),
        slabs = values.len(),
        "Detected crystal planes"
    );

    let thicknesses = SlabThicknesses::try_from_values(values)?;
    thicknesses.check_total(height)?;
    Ok(thicknesses)
}

fn bucket_of(z: f64, tolerance: f64) -> i64 {
    (z / tolerance).floor() as i64
}
