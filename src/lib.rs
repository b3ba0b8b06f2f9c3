//! # Form Label
//!
//! Bidirectional codec between on-canvas geometric regions and a persisted,
//! schema-versioned label document, plus a deterministic reading-order
//! index derived from OCR layout.
//!
//! ## Core Features
//!
//! - **Path codec**: separator escaping that packs a table name and two
//!   axis keys into one label path (`~` → `~0`, `/` → `~1`)
//! - **Table addressing**: 3-segment paths resolved to (row, column) keys
//!   per table schema and orientation, tolerant of schema drift
//! - **Reading order**: per-page word-then-checkbox traversal order with
//!   wraparound navigation and a global comparison order
//! - **Region ↔ label conversion**: pure, idempotent folding of regions
//!   into labels (with confidence/revision bookkeeping) and expansion back
//!
//! The crate performs no OCR, no rendering, and no persistence; it is the
//! synchronous, side-effect-free core consumed by a labeling surface.
//!
//! ## Quick Start
//!
//! ```
//! use form_label::layout::{OcrLayout, ReadingOrderIndex};
//! use form_label::model::{LabelingState, Region, RegionCategory, TagCatalog};
//! use form_label::{to_label_document, to_regions};
//!
//! let region = Region::from_polygon(
//!     &[0.1, 0.1, 0.3, 0.1, 0.3, 0.2, 0.1, 0.2],
//!     "Acme Corp",
//!     1,
//!     RegionCategory::Text,
//! )
//! .unwrap()
//! .with_tag("Vendor");
//!
//! let catalog = TagCatalog::default();
//! let order = ReadingOrderIndex::build(&OcrLayout { pages: vec![] });
//! let document = to_label_document(
//!     &[region],
//!     None,
//!     &catalog,
//!     "invoice.pdf",
//!     LabelingState::ManuallyLabeled,
//!     &order,
//! );
//! assert_eq!(document.labels.len(), 1);
//!
//! let regions = to_regions(&document, &catalog);
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].tag.as_deref(), Some("Vendor"));
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometry and schema primitives
pub mod geometry;
pub mod schema;

// Data model
pub mod model;

// Path encoding and table addressing
pub mod path_codec;
pub mod table_address;

// OCR layout and reading order
pub mod layout;

// Region <-> label conversion
pub mod convert;

pub use convert::{to_label_document, to_regions};
pub use error::{Error, Result};
pub use layout::{OcrLayout, ReadingOrderIndex};
pub use model::{Label, LabelDocument, LabelingState, Region, TagCatalog};
