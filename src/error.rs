//! Error types for the labeling core.
//!
//! Most failures here are non-fatal by design: label documents outlive the
//! tag schemas they were written against, so the converters catch these
//! errors at the per-label boundary, log, and keep going.

/// Result type alias for labeling core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during label/region conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A table-addressed path no longer resolves against the table's schema.
    ///
    /// Happens when a table tag has been renamed or retyped since the label
    /// was written. The affected label is dropped during conversion.
    #[error("unresolvable table address in '{table}': {detail}")]
    UnresolvableTableAddress {
        /// Name of the table tag the path was resolved against
        table: String,
        /// What failed to resolve
        detail: String,
    },

    /// A label path has a segment count other than 1 (scalar) or 3 (table).
    ///
    /// Nesting beyond two table axes is intentionally unsupported.
    #[error("unsupported nesting depth: {0} path segments (expected 1 or 3)")]
    UnsupportedNestingDepth(usize),

    /// A bounding box polygon is odd-length, empty, or non-finite.
    ///
    /// Fatal only for the single affected region or form region.
    #[error("malformed bounding box: {0}")]
    MalformedBoundingBox(String),

    /// JSON (de)serialization error for label documents.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
