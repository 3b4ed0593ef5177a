//! `Voxel`: a strong, fixed-arity handle for 3D grid cells
//!
//! Every point of an edited skeleton is a discrete grid cell addressed by a
//! non-negative integer triple `(x, y, z)`. `Voxel` wraps the triple in a
//! dedicated value type so membership tests, set operations, and slice
//! queries are type-checked at compile time instead of flowing through
//! loosely shaped tuples.
//!
//! This module provides:
//! - A `Voxel` tuple struct with structural equality, ordering, and hashing
//!   so it can be used directly as a map/set key.
//! - Serde derives that serialize a voxel as a bare `[x, y, z]` array, which
//!   is exactly the element shape of the persisted point-set schema
//!   (see [`crate::io::points`]).
//! - Component accessors and a `(x, y)` projection used by slice queries.
//!
//! Equality is exact integer equality; no tolerance comparison exists
//! anywhere in this crate.

use std::fmt;

/// A discrete 3D grid coordinate `(x, y, z)`.
///
/// The tuple-struct representation matters: serde derives turn it into a
/// three-element JSON array rather than an object, matching the on-disk
/// point-set schema with no custom serializer.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Voxel(pub u32, pub u32, pub u32);

impl Voxel {
    /// Creates a voxel from its three grid components.
    #[inline]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Voxel(x, y, z)
    }

    /// X component.
    #[inline]
    pub const fn x(self) -> u32 {
        self.0
    }

    /// Y component.
    #[inline]
    pub const fn y(self) -> u32 {
        self.1
    }

    /// Z component (the slicing axis).
    #[inline]
    pub const fn z(self) -> u32 {
        self.2
    }

    /// In-plane projection `(x, y)`, as returned by slice queries.
    #[inline]
    pub const fn xy(self) -> (u32, u32) {
        (self.0, self.1)
    }
}

impl From<(u32, u32, u32)> for Voxel {
    #[inline]
    fn from((x, y, z): (u32, u32, u32)) -> Self {
        Voxel(x, y, z)
    }
}

impl From<[u32; 3]> for Voxel {
    #[inline]
    fn from([x, y, z]: [u32; 3]) -> Self {
        Voxel(x, y, z)
    }
}

/// Prints as `Voxel(x, y, z)`.
impl fmt::Debug for Voxel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Voxel")
            .field(&self.0)
            .field(&self.1)
            .field(&self.2)
            .finish()
    }
}

/// Prints as `(x, y, z)` for log lines.
impl fmt::Display for Voxel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertion that `Voxel` stays three packed `u32`s.
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Voxel, [u32; 3]);
}
