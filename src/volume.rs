//! `LabelVolume`: read-only adapter over a labeled 3D grid
//!
//! Wraps the flat label buffer a volumetric decoder produces (decoding
//! itself is out of scope) and answers the two questions the editing core
//! needs: what is the grid shape, and which `(x, y)` positions of a given
//! Z plane carry a given foreground label. The volume is never mutated by
//! this crate.
//!
//! Layout is C order with `x` major, matching `index = (x * Y + y) * Z + z`,
//! i.e. the layout of a row-major `(X, Y, Z)` array.

use crate::skel_error::SkelEditError;
use crate::voxel::Voxel;

/// Immutable labeled volume with shape `(X, Y, Z)`.
#[derive(Clone, Debug)]
pub struct LabelVolume {
    data: Vec<u8>,
    shape: (usize, usize, usize),
}

impl LabelVolume {
    /// Wraps a flat label buffer with its declared shape.
    ///
    /// # Errors
    /// Returns [`SkelEditError::VolumeShapeMismatch`] if the buffer length
    /// does not equal `X * Y * Z`.
    pub fn from_vec(
        data: Vec<u8>,
        shape: (usize, usize, usize),
    ) -> Result<Self, SkelEditError> {
        let expected = shape.0 * shape.1 * shape.2;
        if data.len() != expected {
            return Err(SkelEditError::VolumeShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Grid shape `(X, Y, Z)`. `Z` bounds the slice index a UI slider may
    /// request.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        self.shape
    }

    /// Label at `(x, y, z)`, or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<u8> {
        let (sx, sy, sz) = self.shape;
        if x >= sx || y >= sy || z >= sz {
            return None;
        }
        Some(self.data[(x * sy + y) * sz + z])
    }

    /// Lazily enumerates the `(x, y)` positions on plane `z` whose label
    /// equals `foreground`.
    ///
    /// An out-of-range `z` yields an empty iterator.
    pub fn slice_mask(
        &self,
        z: usize,
        foreground: u8,
    ) -> impl Iterator<Item = (u32, u32)> + '_ {
        let (sx, sy, sz) = self.shape;
        let valid = z < sz;
        (0..if valid { sx } else { 0 }).flat_map(move |x| {
            (0..sy).filter_map(move |y| {
                (self.data[(x * sy + y) * sz + z] == foreground)
                    .then_some((x as u32, y as u32))
            })
        })
    }

    /// Lazily enumerates every voxel whose label equals `foreground`, in
    /// x-major scan order.
    pub fn foreground_points(&self, foreground: u8) -> impl Iterator<Item = Voxel> + '_ {
        let (_, sy, sz) = self.shape;
        self.data.iter().enumerate().filter_map(move |(i, &l)| {
            (l == foreground).then(|| {
                let z = i % sz;
                let y = (i / sz) % sy;
                let x = i / (sy * sz);
                Voxel::new(x as u32, y as u32, z as u32)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2x2 volume with label 1 on the z=0 plane at (0,0) and (1,1),
    /// and label 2 at (0,1,1).
    fn sample() -> LabelVolume {
        let mut data = vec![0u8; 8];
        data[(0 * 2 + 0) * 2 + 0] = 1; // (0,0,0)
        data[(1 * 2 + 1) * 2 + 0] = 1; // (1,1,0)
        data[(0 * 2 + 1) * 2 + 1] = 2; // (0,1,1)
        LabelVolume::from_vec(data, (2, 2, 2)).unwrap()
    }

    #[test]
    fn from_vec_rejects_bad_length() {
        let err = LabelVolume::from_vec(vec![0; 7], (2, 2, 2)).unwrap_err();
        assert!(matches!(
            err,
            SkelEditError::VolumeShapeMismatch {
                expected: 8,
                actual: 7
            }
        ));
    }

    #[test]
    fn shape_and_get() {
        let vol = sample();
        assert_eq!(vol.shape(), (2, 2, 2));
        assert_eq!(vol.get(0, 0, 0), Some(1));
        assert_eq!(vol.get(0, 1, 1), Some(2));
        assert_eq!(vol.get(1, 0, 1), Some(0));
        assert_eq!(vol.get(2, 0, 0), None);
    }

    #[test]
    fn slice_mask_picks_matching_labels_only() {
        let vol = sample();
        let mut mask: Vec<_> = vol.slice_mask(0, 1).collect();
        mask.sort();
        assert_eq!(mask, vec![(0, 0), (1, 1)]);
        assert_eq!(vol.slice_mask(1, 1).count(), 0);
        assert_eq!(vol.slice_mask(1, 2).collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn slice_mask_out_of_range_is_empty() {
        let vol = sample();
        assert_eq!(vol.slice_mask(5, 1).count(), 0);
    }

    #[test]
    fn foreground_points_match_get() {
        let vol = sample();
        let pts: Vec<_> = vol.foreground_points(1).collect();
        assert_eq!(pts, vec![Voxel::new(0, 0, 0), Voxel::new(1, 1, 0)]);
        for p in pts {
            assert_eq!(
                vol.get(p.x() as usize, p.y() as usize, p.z() as usize),
                Some(1)
            );
        }
    }
}
