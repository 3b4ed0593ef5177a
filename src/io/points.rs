//! Point-set persistence: plain JSON, atomic saves, load-else-seed.
//!
//! # On-disk schema
//! A single JSON array of 3-integer arrays, nothing else:
//!
//! ```json
//! [[12,34,5],[12,35,5],[13,34,6]]
//! ```
//!
//! No wrapper object, no metadata, no version field. Element order reflects
//! the store's insertion order at save time and is not semantically
//! significant on reload (the content is a set).
//!
//! # Atomicity
//! [`save`] writes to a `.tmp` sibling and renames it into place, so an
//! interrupted save never leaves the destination holding a partially
//! written file. A drop guard removes the temporary on every early exit,
//! including I/O failure, so no stray temp files persist.

use crate::skel_error::SkelEditError;
use crate::store::SkeletonPointStore;
use crate::voxel::Voxel;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Removes the temporary file on drop unless the save completed and
/// disarmed it.
struct TempGuard {
    path: PathBuf,
    armed: bool,
}

impl TempGuard {
    fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for TempGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != ErrorKind::NotFound {
                log::warn!(
                    "could not clean up temp file {}: {err}",
                    self.path.display()
                );
            }
        }
    }
}

/// `<name>.tmp` next to the destination, so the final rename stays on one
/// filesystem.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Loads a persisted point set into a fresh store.
///
/// # Errors
/// - [`SkelEditError::NotFound`] if `path` does not exist. Recoverable: the
///   caller decides whether to seed instead (see [`load_or_seed`]).
/// - [`SkelEditError::CorruptData`] if the content does not parse as an
///   array of 3-integer arrays. Never substitutes partial data.
pub fn load(path: impl AsRef<Path>) -> Result<SkeletonPointStore, SkelEditError> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(SkelEditError::NotFound(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };
    let points: Vec<Voxel> =
        serde_json::from_str(&contents).map_err(|source| SkelEditError::CorruptData {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("loaded {} skeleton points from {}", points.len(), path.display());
    Ok(SkeletonPointStore::from_points(points))
}

/// Serializes `store.snapshot()` to `path`, atomically.
///
/// Either the new file is fully written or the previous file is left
/// intact; on success no temp sibling remains.
pub fn save(store: &SkeletonPointStore, path: impl AsRef<Path>) -> Result<(), SkelEditError> {
    let path = path.as_ref();
    let tmp = temp_sibling(path);
    let mut guard = TempGuard::new(tmp.clone());

    let bytes = serde_json::to_vec(&store.snapshot()).map_err(std::io::Error::from)?;
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    guard.disarm();

    log::info!("saved {} skeleton points to {}", store.len(), path.display());
    Ok(())
}

/// Session-start policy: load the persisted point set if one exists,
/// otherwise build the store from the seed producer (typically a thinning
/// pass over the label volume).
///
/// Only [`SkelEditError::NotFound`] triggers the seed path; corrupt data
/// and I/O failures propagate unchanged rather than silently re-seeding
/// over a file the user may want to inspect.
pub fn load_or_seed<F, I>(
    path: impl AsRef<Path>,
    seed: F,
) -> Result<SkeletonPointStore, SkelEditError>
where
    F: FnOnce() -> I,
    I: IntoIterator<Item = Voxel>,
{
    let path = path.as_ref();
    match load(path) {
        Ok(store) => Ok(store),
        Err(SkelEditError::NotFound(_)) => {
            log::info!(
                "no persisted skeleton at {}; seeding from producer",
                path.display()
            );
            Ok(SkeletonPointStore::from_points(seed()))
        }
        Err(err) => Err(err),
    }
}
