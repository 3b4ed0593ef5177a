//! # skel-edit
//!
//! skel-edit maintains and edits a sparse geometric skeleton derived from a
//! labeled 3D volume: a thinned representation of tubular structures (e.g.,
//! vessels) kept either as a voxel point set or as a vertex/edge graph,
//! subject to interactive point-level edits and persisted across sessions.
//!
//! ## Features
//! - A strong [`Voxel`](voxel::Voxel) coordinate type and the mutable
//!   [`SkeletonPointStore`](store::SkeletonPointStore) with O(1) toggle
//!   edits, slice-restricted queries, and deterministic snapshots
//! - A line-oriented graph-description decoder producing a canonical
//!   [`SkeletonGraph`](graph::SkeletonGraph) even for sparse, out-of-order,
//!   or forward-referencing vertex ids
//! - Lossless JSON persistence with atomic saves and a load-else-seed
//!   session policy
//! - A read-only [`LabelVolume`](volume::LabelVolume) adapter for shape and
//!   per-slice foreground queries
//! - [`EditSession`](session::EditSession): the single-writer lock
//!   discipline around one owned store
//!
//! Thinning itself, volumetric file decoding, and rendering are external
//! collaborators: this crate consumes their outputs (a point sequence, a
//! label grid, user events) and hands back point sets and graphs.
//!
//! ## Determinism
//!
//! Snapshots and saves follow insertion order, so repeated saves of the
//! same edit history produce identical files. Decoding assigns canonical
//! vertex indices by order of first appearance, independent of the source's
//! own identifiers.

pub mod graph;
pub mod io;
pub mod session;
pub mod skel_error;
pub mod store;
pub mod volume;
pub mod voxel;

/// A convenient prelude importing the most-used types.
pub mod prelude {
    pub use crate::graph::{SkeletonGraph, UNKNOWN_RADIUS};
    pub use crate::io::points::{load, load_or_seed, save};
    pub use crate::io::swc::decode;
    pub use crate::session::EditSession;
    pub use crate::skel_error::{FormatError, SkelEditError};
    pub use crate::store::SkeletonPointStore;
    pub use crate::volume::LabelVolume;
    pub use crate::voxel::Voxel;
}
