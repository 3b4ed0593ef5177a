//! `SkeletonGraph`: canonical vertex/edge form of a decoded skeleton
//!
//! A skeleton sometimes arrives as a graph description (vertices, edges,
//! radii) rather than as a raw point set. This module holds the decoded,
//! canonical form: vertices live in a dense zero-based index space assigned
//! by order of first appearance, decoupled from whatever identifiers the
//! source description used. The graph is an import/export representation
//! consumed by rendering; it is *not* the editable entity (that is the
//! [`SkeletonPointStore`](crate::store::SkeletonPointStore)).

/// Sentinel radius meaning "radius unknown" for a vertex whose radius field
/// failed to parse. Valid radii are always `>= 0`.
pub const UNKNOWN_RADIUS: f64 = -1.0;

/// Canonical skeleton graph with per-vertex attributes.
///
/// # Invariants
///
/// - `vertices`, `radii`, and `vertex_types` have equal lengths.
/// - Every edge `(a, b)` satisfies `a <= b < vertices.len()` and appears
///   at most once.
/// - A vertex's index is its position of first appearance in the source.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SkeletonGraph {
    /// Vertex positions in float coordinates.
    pub vertices: Vec<[f64; 3]>,
    /// Unordered vertex-index pairs, stored `(lo, hi)`.
    pub edges: Vec<(usize, usize)>,
    /// Per-vertex radius, aligned with `vertices`; [`UNKNOWN_RADIUS`] when
    /// the source did not carry one.
    pub radii: Vec<f64>,
    /// Per-vertex classification codes, aligned with `vertices`. Structural
    /// metadata only; never interpreted by this crate.
    pub vertex_types: Vec<i32>,
}

impl SkeletonGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph holds no vertices (and therefore no edges).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks the structural invariants; used by the decoder's tests and in
    /// debug builds after assembly.
    pub fn debug_assert_invariants(&self) {
        debug_assert_eq!(self.vertices.len(), self.radii.len(), "radii misaligned");
        debug_assert_eq!(
            self.vertices.len(),
            self.vertex_types.len(),
            "vertex_types misaligned"
        );
        for &(a, b) in &self.edges {
            debug_assert!(a <= b, "edge not canonicalized: ({a}, {b})");
            debug_assert!(b < self.vertices.len(), "edge index out of range: {b}");
        }
    }
}
