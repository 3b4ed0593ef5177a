//! Line-oriented skeleton graph decoder.
//!
//! # Supported format
//! One record per line, 7 whitespace-separated fields:
//!
//! ```text
//! id  type  x  y  z  radius  parent_id
//! ```
//!
//! Comment lines start with `#`. Vertex ids are externally defined and may
//! be sparse, out of order, or forward-referencing (a record's `parent_id`
//! may be defined on a *later* line), so ids are never used as array
//! positions. Instead each first-seen id is assigned the next dense
//! canonical index, and edges are collected against original ids and
//! translated only after the whole input has been read. A `parent_id` of
//! `-1` (or any negative value) means "no parent".
//!
//! # Limitations
//! - A `radius` field that fails to parse degrades to
//!   [`UNKNOWN_RADIUS`](crate::graph::UNKNOWN_RADIUS) rather than failing
//!   the decode; every other field must parse.
//! - No directed parent/child meaning survives decoding: edges come out as
//!   unordered index pairs.

use crate::graph::{SkeletonGraph, UNKNOWN_RADIUS};
use crate::skel_error::{FormatError, SkelEditError};
use hashbrown::HashMap;
use itertools::Itertools;

const COMMENT: char = '#';

fn parse_int(line: usize, field: &'static str, raw: &str) -> Result<i64, FormatError> {
    raw.parse::<i64>().map_err(|_| FormatError::InvalidField {
        line,
        field,
        value: raw.to_string(),
    })
}

fn parse_coord(line: usize, field: &'static str, raw: &str) -> Result<f64, FormatError> {
    raw.parse::<f64>().map_err(|_| FormatError::InvalidField {
        line,
        field,
        value: raw.to_string(),
    })
}

/// Decodes a graph-description text into a canonical [`SkeletonGraph`].
///
/// Empty input (or input that is nothing but leading blank/comment lines)
/// decodes to the empty graph.
///
/// # Errors
/// - [`FormatError::FieldCount`] if a data line does not split into exactly
///   7 fields.
/// - [`FormatError::InvalidField`] if `id`, `type`, a coordinate, or
///   `parent_id` fails to parse.
/// - [`FormatError::DuplicateId`] if two lines define the same vertex id.
/// - [`FormatError::UnresolvedParent`] if some `parent_id` was never defined
///   as an `id` anywhere in the input (referential-integrity violation).
///
/// All surface as [`SkelEditError::Format`]; a failed decode never leaves
/// partial state anywhere.
pub fn decode(text: &str) -> Result<SkeletonGraph, SkelEditError> {
    let mut lines = text.lines().enumerate().peekable();

    // Discard leading blank and comment lines.
    while let Some((_, line)) = lines.peek() {
        let t = line.trim();
        if t.is_empty() || t.starts_with(COMMENT) {
            lines.next();
        } else {
            break;
        }
    }

    let mut graph = SkeletonGraph::new();
    // input id -> canonical index, assigned by order of first appearance.
    let mut canonical: HashMap<i64, usize> = HashMap::new();
    // Edges collected against original ids, smaller id first; translated
    // only after every id has been seen so forward references resolve.
    let mut raw_edges: Vec<(i64, i64)> = Vec::new();

    for (idx, line) in lines {
        let lineno = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 7 {
            return Err(FormatError::FieldCount {
                line: lineno,
                found: fields.len(),
            }
            .into());
        }

        let id = parse_int(lineno, "id", fields[0])?;
        let vtype = parse_int(lineno, "type", fields[1])? as i32;
        let x = parse_coord(lineno, "x", fields[2])?;
        let y = parse_coord(lineno, "y", fields[3])?;
        let z = parse_coord(lineno, "z", fields[4])?;
        // Per-field fallback: an unparsable radius is "unknown", not fatal.
        let radius = fields[5].parse::<f64>().unwrap_or(UNKNOWN_RADIUS);
        let parent = parse_int(lineno, "parent_id", fields[6])?;

        let next = graph.vertices.len();
        if canonical.insert(id, next).is_some() {
            return Err(FormatError::DuplicateId { line: lineno, id }.into());
        }
        graph.vertices.push([x, y, z]);
        graph.radii.push(radius);
        graph.vertex_types.push(vtype);

        if parent >= 0 {
            raw_edges.push((id.min(parent), id.max(parent)));
        }
    }

    // Second pass: translate id pairs into canonical index pairs.
    let resolve = |id: i64| -> Result<usize, FormatError> {
        canonical
            .get(&id)
            .copied()
            .ok_or(FormatError::UnresolvedParent { id })
    };
    graph.edges = raw_edges
        .into_iter()
        .map(|(a, b)| -> Result<(usize, usize), FormatError> {
            let (ca, cb) = (resolve(a)?, resolve(b)?);
            Ok((ca.min(cb), ca.max(cb)))
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .unique()
        .collect();

    graph.debug_assert_invariants();
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt_err(r: Result<SkeletonGraph, SkelEditError>) -> FormatError {
        match r {
            Err(SkelEditError::Format(e)) => e,
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn two_vertex_chain() {
        let g = decode("1 0 0.0 0.0 0.0 1.0 -1\n2 0 1.0 0.0 0.0 1.0 1\n").unwrap();
        assert_eq!(g.vertices, vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
        assert_eq!(g.edges, vec![(0, 1)]);
        assert_eq!(g.radii, vec![1.0, 1.0]);
        assert_eq!(g.vertex_types, vec![0, 0]);
    }

    #[test]
    fn empty_and_comment_only_input_decode_to_empty_graph() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("\n\n").unwrap().is_empty());
        assert!(decode("# header\n# more header\n\n").unwrap().is_empty());
    }

    #[test]
    fn leading_comments_and_blanks_are_skipped() {
        let g = decode("# a comment\n\n10 3 1.5 2.5 3.5 0.5 -1\n").unwrap();
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.vertices[0], [1.5, 2.5, 3.5]);
        assert_eq!(g.vertex_types, vec![3]);
        assert!(g.edges.is_empty());
    }

    #[test]
    fn sparse_out_of_order_ids_get_dense_indices() {
        let g = decode(
            "100 0 0.0 0.0 0.0 1.0 -1\n\
             7 0 1.0 0.0 0.0 1.0 100\n\
             55 0 2.0 0.0 0.0 1.0 7\n",
        )
        .unwrap();
        assert_eq!(g.vertex_count(), 3);
        let mut edges = g.edges.clone();
        edges.sort();
        assert_eq!(edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn forward_reference_resolves_after_full_read() {
        // id=5 references parent 10, defined only on the next line.
        let g = decode(
            "5 0 0.0 0.0 0.0 1.0 10\n\
             10 0 1.0 1.0 1.0 1.0 -1\n",
        )
        .unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edges, vec![(0, 1)]);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let g = decode(
            "1 0 0.0 0.0 0.0 1.0 2\n\
             2 0 1.0 0.0 0.0 1.0 1\n",
        )
        .unwrap();
        assert_eq!(g.edges, vec![(0, 1)]);
    }

    #[test]
    fn unparsable_radius_degrades_to_sentinel() {
        let g = decode("1 0 0.0 0.0 0.0 n/a -1\n").unwrap();
        assert_eq!(g.radii, vec![UNKNOWN_RADIUS]);
    }

    #[test]
    fn six_fields_is_a_field_count_error() {
        let err = fmt_err(decode("1 0 0.0 0.0 0.0 -1\n"));
        assert_eq!(err, FormatError::FieldCount { line: 1, found: 6 });
    }

    #[test]
    fn field_count_error_reports_the_offending_line() {
        let err = fmt_err(decode(
            "# header\n1 0 0.0 0.0 0.0 1.0 -1\n2 0 1.0 0.0 0.0 1.0 1 9\n",
        ));
        assert_eq!(err, FormatError::FieldCount { line: 3, found: 8 });
    }

    #[test]
    fn undefined_parent_is_a_referential_integrity_error() {
        let err = fmt_err(decode("1 0 0.0 0.0 0.0 1.0 99\n"));
        assert_eq!(err, FormatError::UnresolvedParent { id: 99 });
    }

    #[test]
    fn unparsable_id_is_an_invalid_field_error() {
        let err = fmt_err(decode("abc 0 0.0 0.0 0.0 1.0 -1\n"));
        assert!(matches!(
            err,
            FormatError::InvalidField { line: 1, field: "id", .. }
        ));
    }

    #[test]
    fn duplicate_id_definition_is_rejected() {
        let err = fmt_err(decode(
            "1 0 0.0 0.0 0.0 1.0 -1\n1 0 1.0 0.0 0.0 1.0 -1\n",
        ));
        assert_eq!(err, FormatError::DuplicateId { line: 2, id: 1 });
    }

    #[test]
    fn interior_blank_lines_are_skipped() {
        let g = decode("1 0 0.0 0.0 0.0 1.0 -1\n\n2 0 1.0 0.0 0.0 1.0 1\n").unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edges, vec![(0, 1)]);
    }
}
