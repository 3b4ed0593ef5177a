//! Decoding a realistic graph description, header comments and all.

use skel_edit::prelude::*;

const DESCRIPTION: &str = "\
# vessel skeleton export
# id type x y z radius parent
\n\
12 0 10.0 10.0 2.0 1.5 -1
47 0 11.0 10.0 2.0 1.25 12
9  0 12.0 10.0 3.0 1.0  47
30 2 11.0 11.0 2.0 n/a  47
";

#[test]
fn decode_assigns_dense_indices_in_appearance_order() {
    let g = decode(DESCRIPTION).unwrap();
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.vertices[0], [10.0, 10.0, 2.0]);
    assert_eq!(g.vertices[3], [11.0, 11.0, 2.0]);
    assert_eq!(g.vertex_types, vec![0, 0, 0, 2]);

    // Branch at input id 47 (canonical 1): edges to 12 (0), 9 (2), 30 (3).
    let mut edges = g.edges.clone();
    edges.sort();
    assert_eq!(edges, vec![(0, 1), (1, 2), (1, 3)]);

    // The malformed radius degrades to the sentinel; the rest survive.
    assert_eq!(g.radii[..3], [1.5, 1.25, 1.0]);
    assert_eq!(g.radii[3], UNKNOWN_RADIUS);
}

#[test]
fn decode_failures_carry_the_format_taxonomy() {
    let truncated = "12 0 10.0 10.0 2.0 1.5\n";
    assert!(matches!(
        decode(truncated).unwrap_err(),
        SkelEditError::Format(FormatError::FieldCount { line: 1, found: 6 })
    ));

    let dangling = "12 0 10.0 10.0 2.0 1.5 404\n";
    assert!(matches!(
        decode(dangling).unwrap_err(),
        SkelEditError::Format(FormatError::UnresolvedParent { id: 404 })
    ));
}

#[test]
fn graph_import_and_point_editing_stay_independent() {
    // The graph path feeds rendering; the point store remains the editable
    // entity. Projecting decoded vertices to voxels is a caller concern.
    let g = decode(DESCRIPTION).unwrap();
    let store = SkeletonPointStore::from_points(g.vertices.iter().map(|&[x, y, z]| {
        Voxel::new(x as u32, y as u32, z as u32)
    }));
    assert_eq!(store.len(), 4);
    let mut plane2: Vec<_> = store.slice(2).collect();
    plane2.sort();
    assert_eq!(plane2, vec![(10, 10), (11, 10), (11, 11)]);
}
