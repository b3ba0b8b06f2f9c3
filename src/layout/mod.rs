//! OCR layout input model and reading-order indexing.
//!
//! The layout types mirror the OCR engine's own output shape: per page,
//! lines of words plus checkbox-style selection marks, with flattened
//! 4-point polygons in engine coordinates. This crate only consumes them;
//! it never performs OCR.

pub mod reading_order;

pub use reading_order::{ReadingOrderIndex, RegionOrder};

use serde::{Deserialize, Serialize};

/// OCR layout for a whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrLayout {
    /// Per-page read results
    pub pages: Vec<OcrPage>,
}

/// OCR layout for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrPage {
    /// 1-based page number
    pub page: u32,
    /// Page width in engine coordinates
    pub width: f64,
    /// Page height in engine coordinates
    pub height: f64,
    /// Detected text lines, in engine traversal order
    #[serde(default)]
    pub lines: Vec<OcrLine>,
    /// Detected selection marks, in engine order
    #[serde(rename = "selectionMarks", default)]
    pub checkboxes: Vec<OcrCheckbox>,
}

impl OcrPage {
    /// Map a polygon from engine coordinates into normalized page space.
    pub fn normalized_polygon(&self, coords: &[f64]) -> Vec<f64> {
        coords
            .iter()
            .enumerate()
            .map(|(i, v)| {
                if i % 2 == 0 {
                    v / self.width
                } else {
                    v / self.height
                }
            })
            .collect()
    }
}

/// One OCR-detected line of words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrLine {
    /// Words in engine traversal order
    #[serde(default)]
    pub words: Vec<OcrWord>,
}

/// One OCR-detected word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrWord {
    /// Recognized text
    pub text: String,
    /// Flattened 4-point polygon in engine coordinates
    #[serde(rename = "boundingBox")]
    pub bounding_box: Vec<f64>,
}

/// One OCR-detected checkbox / selection mark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrCheckbox {
    /// Mark state, e.g. "selected" or "unselected"
    pub state: String,
    /// Flattened 4-point polygon in engine coordinates
    #[serde(rename = "boundingBox")]
    pub bounding_box: Vec<f64>,
}

/// Whether a word is the OCR engine's placeholder for an undetected field.
///
/// The engine renders undetected fields as runs of underscores; such words
/// are never navigable regions and consume no reading-order slot.
///
/// # Examples
///
/// ```
/// use form_label::layout::is_undetected_word;
///
/// assert!(is_undetected_word("___"));
/// assert!(!is_undetected_word("a_b"));
/// assert!(!is_undetected_word(""));
/// ```
pub fn is_undetected_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c == '_')
}
