//! Label document schema versions.
//!
//! Only schema URIs in the fixed allow-set use separator-encoded paths.
//! Anything else (including a missing `$schema`) is a legacy document whose
//! label paths are opaque scalar tag names with no table addressing.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// The 2021-03-01 labels schema, the first to use encoded paths.
pub const LABELS_SCHEMA_2021_03_01: &str =
    "https://schema.cognitiveservices.azure.com/formrecognizer/2021-03-01/labels.json";

/// Schema URI written into newly produced label documents.
pub const CURRENT_LABELS_SCHEMA: &str = LABELS_SCHEMA_2021_03_01;

lazy_static! {
    static ref SUPPORTED_LABELS_SCHEMAS: HashSet<&'static str> =
        [LABELS_SCHEMA_2021_03_01].into_iter().collect();
}

/// Whether a document's schema version uses separator-encoded label paths.
///
/// # Examples
///
/// ```
/// use form_label::schema;
///
/// assert!(schema::is_encoded_schema(Some(schema::CURRENT_LABELS_SCHEMA)));
/// assert!(!schema::is_encoded_schema(Some("http://example.com/other.json")));
/// assert!(!schema::is_encoded_schema(None));
/// ```
pub fn is_encoded_schema(schema: Option<&str>) -> bool {
    schema.is_some_and(|s| SUPPORTED_LABELS_SCHEMAS.contains(s))
}
