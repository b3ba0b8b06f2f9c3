//! Data model for regions, labels, and the tag catalog.
//!
//! [`Region`] is the live, on-canvas side of the codec; [`LabelDocument`]
//! is the persisted, schema-versioned side. The tag catalog describes how
//! scalar and table tags address their values.

pub mod label;
pub mod region;
pub mod tag;

pub use label::{FormRegion, Label, LabelDocument, LabelValueKind, LabelingState};
pub use region::{Region, RegionCategory};
pub use tag::{FieldDef, FieldKind, Orientation, ScalarTag, TableKind, TableTag, Tag, TagCatalog};
