//! On-canvas region model.

use crate::error::Result;
use crate::geometry::{self, Point, Rect};

/// Visual category of an on-canvas region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionCategory {
    /// OCR-detected word
    Text,
    /// OCR-detected selection mark
    Checkbox,
    /// Freehand region drawn by the user
    DrawnRegion,
}

/// A geometric annotation on a document page.
///
/// The id is derived from the region's polygon and page (see
/// [`geometry::region_id`]), so identical geometry always yields identical
/// identity across reloads.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Canonical geometry+page id
    pub id: String,
    /// Visual category
    pub category: RegionCategory,
    /// Name of the tag applied to this region, if any
    pub tag: Option<String>,
    /// Axis-aligned bounds of the polygon
    pub bounding_box: Rect,
    /// Polygon vertices in normalized coordinates
    pub points: Vec<Point>,
    /// Text value carried by the region
    pub value: String,
    /// 1-based page number
    pub page_number: u32,
    /// Whether the region addresses a table cell
    pub is_table_region: bool,
    /// Row key of the addressed cell (dynamic rows carry a leading `#`)
    pub row_key: Option<String>,
    /// Column key of the addressed cell
    pub column_key: Option<String>,
    /// Whether the user edited this region since it was loaded
    pub changed: bool,
}

impl Region {
    /// Build an untagged region from a flattened polygon.
    ///
    /// Fails with [`crate::Error::MalformedBoundingBox`] when the polygon is
    /// empty, odd-length, or non-finite.
    pub fn from_polygon(
        coords: &[f64],
        value: impl Into<String>,
        page_number: u32,
        category: RegionCategory,
    ) -> Result<Self> {
        let bounding_box = geometry::polygon_bounds(coords)?;
        Ok(Self {
            id: geometry::region_id(coords, page_number),
            category,
            tag: None,
            bounding_box,
            points: geometry::polygon_points(coords),
            value: value.into(),
            page_number,
            is_table_region: false,
            row_key: None,
            column_key: None,
            changed: false,
        })
    }

    /// Attach a scalar tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Attach a table tag together with the addressed cell keys.
    pub fn with_table_cell(
        mut self,
        tag: impl Into<String>,
        row_key: impl Into<String>,
        column_key: impl Into<String>,
    ) -> Self {
        self.tag = Some(tag.into());
        self.is_table_region = true;
        self.row_key = Some(row_key.into());
        self.column_key = Some(column_key.into());
        self
    }

    /// The region's polygon as a flattened coordinate array.
    pub fn polygon(&self) -> Vec<f64> {
        geometry::flatten_points(&self.points)
    }
}
