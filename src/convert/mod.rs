//! Bidirectional conversion between regions and label documents.
//!
//! Both directions are pure functions over immutable snapshots: identical
//! inputs always yield structurally identical outputs, so callers can
//! safely retry or debounce. Schema-drift failures (renamed or retyped
//! table tags, unsupported nesting) drop the affected label and let the
//! rest of the conversion proceed.

pub mod labels_to_regions;
pub mod regions_to_labels;

pub use labels_to_regions::to_regions;
pub use regions_to_labels::to_label_document;
