//! Skeleton I/O: graph-description decoding and point-set persistence.
//!
//! Two independent paths in and out of the crate:
//! - [`swc`] decodes a line-oriented graph description (id/type/position/
//!   radius/parent records) into a canonical [`SkeletonGraph`].
//! - [`points`] persists the edited [`SkeletonPointStore`] as a plain JSON
//!   array of `[x, y, z]` integer triples, with atomic saves and a
//!   load-else-seed policy for session start.
//!
//! [`SkeletonGraph`]: crate::graph::SkeletonGraph
//! [`SkeletonPointStore`]: crate::store::SkeletonPointStore

pub mod points;
pub mod swc;

pub use points::{load, load_or_seed, save};
pub use swc::decode;
