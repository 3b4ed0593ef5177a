//! `EditSession`: one owned store behind an explicit handle
//!
//! The interactive boundary emits exactly three kinds of events: a voxel
//! toggle, a slice request, and a save/load request. `EditSession` receives
//! them against a single owned [`SkeletonPointStore`] instead of the
//! ambient global state an event-callback UI tends to grow.
//!
//! Locking discipline: one `parking_lot::RwLock` around the store. Mutators
//! (`toggle`, `move_point`, `reload`) hold the write lock for the duration
//! of the call; `slice`, `snapshot`, and the snapshot phase of `save` hold
//! the read lock and may run concurrently with each other. Point-level
//! operations are O(1), so no finer-grained locking is warranted.

use crate::io::points;
use crate::skel_error::SkelEditError;
use crate::store::SkeletonPointStore;
use crate::voxel::Voxel;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};

/// An interactive editing session over one skeleton point set.
#[derive(Debug)]
pub struct EditSession {
    store: RwLock<SkeletonPointStore>,
    path: PathBuf,
}

impl EditSession {
    /// Opens a session with the load-else-seed policy: restore the point
    /// set persisted at `path` if one exists, otherwise run the `seed`
    /// producer (typically a thinning pass). Corrupt or unreadable files
    /// are errors, not a reason to silently re-seed.
    pub fn open<F, I>(path: impl Into<PathBuf>, seed: F) -> Result<Self, SkelEditError>
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = Voxel>,
    {
        let path = path.into();
        let store = points::load_or_seed(&path, seed)?;
        log::info!(
            "editing session opened with {} points ({})",
            store.len(),
            path.display()
        );
        Ok(Self {
            store: RwLock::new(store),
            path,
        })
    }

    /// Starts a session from an already-built store, persisting to `path`.
    pub fn with_store(store: SkeletonPointStore, path: impl Into<PathBuf>) -> Self {
        Self {
            store: RwLock::new(store),
            path: path.into(),
        }
    }

    /// Persistence destination for this session.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flips membership of `v`; returns whether it is present afterwards.
    pub fn toggle(&self, v: Voxel) -> bool {
        let present = self.store.write().toggle(v);
        if present {
            log::debug!("added point to skeleton: {v}");
        } else {
            log::debug!("removed point from skeleton: {v}");
        }
        present
    }

    /// Moves a point under a single write lock; an absent `from` is not an
    /// error and `to` is inserted regardless.
    pub fn move_point(&self, from: Voxel, to: Voxel) {
        self.store.write().move_point(from, to);
        log::debug!("moved skeleton point {from} -> {to}");
    }

    /// Membership test.
    pub fn contains(&self, v: Voxel) -> bool {
        self.store.read().contains(v)
    }

    /// Number of points currently in the skeleton.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// Whether the skeleton is empty.
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    /// The `(x, y)` positions on plane `z`, collected under the read lock
    /// so the result is a consistent snapshot of that instant.
    pub fn slice(&self, z: u32) -> Vec<(u32, u32)> {
        self.store.read().slice(z).collect()
    }

    /// Full point export in canonical order.
    pub fn snapshot(&self) -> Vec<Voxel> {
        self.store.read().snapshot()
    }

    /// Persists the current point set atomically to the session path.
    pub fn save(&self) -> Result<(), SkelEditError> {
        // Read lock held across the write so no mutator interleaves mid-save.
        let store = self.store.read();
        points::save(&store, &self.path)
    }

    /// Re-reads the session path, replacing the in-memory point set only if
    /// the load fully succeeds; on any failure the prior state is kept.
    pub fn reload(&self) -> Result<(), SkelEditError> {
        let loaded = points::load(&self.path)?;
        *self.store.write() = loaded;
        Ok(())
    }
}
