//! Geometric primitives for region and label geometry.
//!
//! All coordinates live in normalized document space (the OCR page extent
//! mapped to unit scale), so geometry compares exactly across reloads.
//! Bounding boxes coming from the OCR engine and from persisted label files
//! are flattened 4-point polygons: `[x0, y0, x1, y1, x2, y2, x3, y3]`.

use crate::error::{Error, Result};

/// A 2D point in normalized document space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_label::geometry::Point;
    ///
    /// let point = Point::new(0.1, 0.2);
    /// assert_eq!(point.x, 0.1);
    /// assert_eq!(point.y, 0.2);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in normalized document space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of the left edge
    pub left: f64,
    /// Y coordinate of the top edge
    pub top: f64,
    /// Width of the rectangle
    pub width: f64,
    /// Height of the rectangle
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_label::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 0.5, 0.25);
    /// assert_eq!(rect.width, 0.5);
    /// assert_eq!(rect.height, 0.25);
    /// ```
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Validate a flattened polygon and compute its axis-aligned bounds.
///
/// The polygon is a flat `[x, y, x, y, …]` array. An empty, odd-length, or
/// non-finite array yields [`Error::MalformedBoundingBox`].
///
/// # Examples
///
/// ```
/// use form_label::geometry::polygon_bounds;
///
/// let rect = polygon_bounds(&[0.1, 0.2, 0.5, 0.2, 0.5, 0.4, 0.1, 0.4]).unwrap();
/// assert_eq!(rect.left, 0.1);
/// assert_eq!(rect.top, 0.2);
/// assert_eq!(rect.width, 0.4);
/// assert_eq!(rect.height, 0.2);
/// ```
pub fn polygon_bounds(coords: &[f64]) -> Result<Rect> {
    if coords.is_empty() || coords.len() % 2 != 0 {
        return Err(Error::MalformedBoundingBox(format!(
            "expected a non-empty even-length coordinate array, got {} values",
            coords.len()
        )));
    }
    if coords.iter().any(|v| !v.is_finite()) {
        return Err(Error::MalformedBoundingBox(
            "non-finite coordinate value".to_string(),
        ));
    }

    let mut left = f64::INFINITY;
    let mut top = f64::INFINITY;
    let mut right = f64::NEG_INFINITY;
    let mut bottom = f64::NEG_INFINITY;
    for pair in coords.chunks(2) {
        left = left.min(pair[0]);
        right = right.max(pair[0]);
        top = top.min(pair[1]);
        bottom = bottom.max(pair[1]);
    }

    Ok(Rect::new(left, top, right - left, bottom - top))
}

/// Convert a flattened polygon into a list of points.
pub fn polygon_points(coords: &[f64]) -> Vec<Point> {
    coords
        .chunks(2)
        .filter(|pair| pair.len() == 2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect()
}

/// Flatten a list of points back into a coordinate array.
pub fn flatten_points(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Derive the canonical region id from a flattened polygon and page number.
///
/// The id is the comma-joined coordinate list followed by `:` and the page,
/// so identical geometry on the same page always produces the same id, no
/// matter how the region was created.
///
/// # Examples
///
/// ```
/// use form_label::geometry::region_id;
///
/// let id = region_id(&[0.1, 0.2, 0.3, 0.4], 1);
/// assert_eq!(id, "0.1,0.2,0.3,0.4:1");
/// assert_eq!(region_id(&[0.1, 0.2, 0.3, 0.4], 1), id);
/// ```
pub fn region_id(coords: &[f64], page: u32) -> String {
    let joined = coords
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("{}:{}", joined, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_bounds_from_four_points() {
        let rect = polygon_bounds(&[0.5, 0.2, 0.1, 0.2, 0.5, 0.4, 0.1, 0.4]).unwrap();
        assert_eq!(rect.left, 0.1);
        assert_eq!(rect.top, 0.2);
        assert_eq!(rect.right(), 0.5);
        assert_eq!(rect.bottom(), 0.4);
    }

    #[test]
    fn test_polygon_bounds_rejects_odd_length() {
        assert!(polygon_bounds(&[0.1, 0.2, 0.3]).is_err());
        assert!(polygon_bounds(&[]).is_err());
    }

    #[test]
    fn test_polygon_bounds_rejects_non_finite() {
        assert!(polygon_bounds(&[0.1, f64::NAN, 0.3, 0.4]).is_err());
    }

    #[test]
    fn test_region_id_is_deterministic() {
        let coords = [0.1, 0.2, 0.3, 0.2, 0.3, 0.4, 0.1, 0.4];
        assert_eq!(region_id(&coords, 2), region_id(&coords, 2));
        assert_ne!(region_id(&coords, 2), region_id(&coords, 3));
    }

    #[test]
    fn test_points_round_trip() {
        let coords = vec![0.1, 0.2, 0.3, 0.4];
        let points = polygon_points(&coords);
        assert_eq!(flatten_points(&points), coords);
    }
}
