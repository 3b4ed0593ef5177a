//! `SkelEditError`: unified error type for skel-edit public APIs
//!
//! This error type is used throughout the crate to provide robust,
//! non-panicking error handling for all public APIs. Point-store mutators
//! are total and never produce errors; everything fallible funnels through
//! this enum.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for skel-edit operations.
#[derive(Debug, Error)]
pub enum SkelEditError {
    /// Malformed graph-description input. Fatal to that decode call only;
    /// never corrupts in-memory state.
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    /// Persistence path does not exist. Recoverable: callers fall back to
    /// seeding from the thinning producer.
    #[error("skeleton file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Persistence path exists but its content is not a valid coordinate
    /// array. Surfaced to the caller; never silently truncated.
    #[error("corrupt skeleton file {}: {source}", .path.display())]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Underlying I/O failure during load or save.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Label buffer length does not match the declared volume shape.
    #[error("volume shape mismatch: shape implies {expected} voxels, buffer holds {actual}")]
    VolumeShapeMismatch { expected: usize, actual: usize },
}

/// Decode failures for line-oriented graph descriptions.
///
/// Kept as its own enum (rather than flat variants on [`SkelEditError`]) so
/// referential-integrity violations stay a distinguishable subtype of the
/// format family while still converting into the unified error via `#[from]`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A data line did not split into exactly 7 whitespace-separated fields.
    #[error("line {line}: expected 7 fields (id type x y z radius parent), found {found}")]
    FieldCount { line: usize, found: usize },
    /// A mandatory field failed to parse (radius is not mandatory; it falls
    /// back to the unknown-radius sentinel instead).
    #[error("line {line}: invalid {field} field `{value}`")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
    /// Two lines define the same vertex id.
    #[error("line {line}: vertex id {id} already defined")]
    DuplicateId { line: usize, id: i64 },
    /// An edge references a vertex id that no line ever defined.
    #[error("edge references undefined vertex id {id}")]
    UnresolvedParent { id: i64 },
}
