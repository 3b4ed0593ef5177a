//! `SkeletonPointStore`: the mutable sparse point set behind an editing session
//!
//! The store owns the set of [`Voxel`]s that make up the current skeleton and
//! is the central entity mutated by interactive edits. It maintains:
//! - a lookup `index` from each voxel to its slot in `order`,
//! - an `order` vector preserving insertion order for deterministic
//!   serialization (removed voxels leave a tombstone that is compacted away
//!   once tombstones dominate),
//! - a `live` count and a `version` that changes on every structural
//!   mutation.
//!
//! # Invariants
//!
//! - Every voxel appears at most once among the occupied slots of `order`.
//! - `index` contains precisely the occupied slots, each mapping back to its
//!   own position.
//! - `live` equals the number of occupied slots.
//!
//! These invariants are checked after mutations in debug builds via
//! [`debug_assert_invariants`](SkeletonPointStore::debug_assert_invariants).
//!
//! Bounds against a volume shape are deliberately *not* enforced here: the
//! store stays decoupled from any particular volume, and rejecting
//! out-of-range coordinates is the boundary layer's contract.

use crate::voxel::Voxel;
use hashbrown::HashMap;

/// Mutable sparse set of skeleton voxels with insertion-order snapshots.
#[derive(Clone, Debug, Default)]
pub struct SkeletonPointStore {
    /// Maps each live voxel to its slot in `order`.
    index: HashMap<Voxel, usize>,
    /// Insertion order; `None` marks a removed slot awaiting compaction.
    order: Vec<Option<Voxel>>,
    /// Number of occupied slots in `order`.
    live: usize,
    /// Monotonic version that changes on any structural modification.
    version: u64,
}

impl SkeletonPointStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an initial point sequence, typically the output
    /// of an external thinning producer. Duplicates are ignored.
    pub fn from_points<I: IntoIterator<Item = Voxel>>(points: I) -> Self {
        let mut store = Self::default();
        store.seed_from_points(points);
        store
    }

    /// Returns true iff `p` is currently part of the skeleton.
    ///
    /// # Complexity
    /// **O(1)** amortized.
    #[inline]
    pub fn contains(&self, p: Voxel) -> bool {
        self.index.contains_key(&p)
    }

    /// Number of live skeleton points.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the skeleton is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Monotonic version that changes whenever the point set changes.
    ///
    /// Read-only queries (`contains`, `slice`, `snapshot`) never bump it, so
    /// callers can detect interleaved mutation between two reads.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Inserts `p`. Idempotent: returns `false` (and changes nothing) if the
    /// voxel was already present.
    ///
    /// # Complexity
    /// Amortized **O(1)**; preserves insertion order of prior points.
    pub fn insert(&mut self, p: Voxel) -> bool {
        if self.index.contains_key(&p) {
            return false;
        }
        self.index.insert(p, self.order.len());
        self.order.push(Some(p));
        self.live += 1;
        self.version = self.version.wrapping_add(1);
        #[cfg(debug_assertions)]
        self.debug_assert_invariants();
        true
    }

    /// Removes `p`. Idempotent: returns `false` (and changes nothing) if the
    /// voxel was absent.
    ///
    /// # Complexity
    /// Amortized **O(1)**: the slot becomes a tombstone and the order vector
    /// is compacted only when tombstones outnumber live entries.
    pub fn remove(&mut self, p: Voxel) -> bool {
        let Some(slot) = self.index.remove(&p) else {
            return false;
        };
        self.order[slot] = None;
        self.live -= 1;
        self.version = self.version.wrapping_add(1);
        if self.order.len() > 2 * self.live + 8 {
            self.compact();
        }
        #[cfg(debug_assertions)]
        self.debug_assert_invariants();
        true
    }

    /// Flips membership of `p`: inserts it if absent, removes it if present.
    ///
    /// This is the sole mutation primitive the interactive session needs;
    /// applying it twice restores the original membership for `p`.
    ///
    /// Returns whether `p` is present *after* the call.
    pub fn toggle(&mut self, p: Voxel) -> bool {
        if self.remove(p) { false } else { self.insert(p) }
    }

    /// Moves a point: removes `from` (no-op if absent), then inserts `to`.
    ///
    /// A single `&mut self` call, so under the session lock no observer can
    /// see the intermediate state where neither point exists. An absent
    /// `from` is not an error; `to` is inserted regardless.
    pub fn move_point(&mut self, from: Voxel, to: Voxel) {
        self.remove(from);
        self.insert(to);
    }

    /// Replaces the entire contents with `points`, dropping whatever was
    /// stored before. Later duplicates in the input are ignored.
    ///
    /// Used once at session start when no persisted file exists.
    pub fn seed_from_points<I: IntoIterator<Item = Voxel>>(&mut self, points: I) {
        self.index.clear();
        self.order.clear();
        self.live = 0;
        for p in points {
            if !self.index.contains_key(&p) {
                self.index.insert(p, self.order.len());
                self.order.push(Some(p));
                self.live += 1;
            }
        }
        self.version = self.version.wrapping_add(1);
        #[cfg(debug_assertions)]
        self.debug_assert_invariants();
    }

    /// Lazily enumerates the `(x, y)` positions of all stored points lying
    /// on plane `z`.
    ///
    /// A `z` matching no point yields an empty iterator, never an error. The
    /// result is stable while the store is unmutated; interleaved mutation
    /// invalidates no memory safety but changes what a re-query returns.
    pub fn slice(&self, z: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.order
            .iter()
            .flatten()
            .filter(move |p| p.z() == z)
            .map(|p| p.xy())
    }

    /// Borrowing iterator over all points in insertion (canonical) order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Voxel> + '_ {
        self.order.iter().flatten().copied()
    }

    /// Full export in canonical iteration order, for serialization.
    ///
    /// Insertion order keeps successive saves of a lightly edited skeleton
    /// diff-friendly.
    pub fn snapshot(&self) -> Vec<Voxel> {
        self.iter().collect()
    }

    /// Rebuilds `order` without tombstones, preserving relative order.
    fn compact(&mut self) {
        let mut packed = Vec::with_capacity(self.live);
        for p in self.order.iter().flatten() {
            self.index.insert(*p, packed.len());
            packed.push(Some(*p));
        }
        self.order = packed;
    }

    /// Validates the structural invariants; called after every mutation in
    /// debug builds.
    pub fn debug_assert_invariants(&self) {
        let occupied = self.order.iter().flatten().count();
        debug_assert_eq!(occupied, self.live, "live count out of sync");
        debug_assert_eq!(self.index.len(), self.live, "index size out of sync");
        for (slot, p) in self.order.iter().enumerate() {
            if let Some(p) = p {
                debug_assert_eq!(
                    self.index.get(p),
                    Some(&slot),
                    "slot mismatch for {p}"
                );
            }
        }
    }
}

impl FromIterator<Voxel> for SkeletonPointStore {
    fn from_iter<I: IntoIterator<Item = Voxel>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}
