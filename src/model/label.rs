//! Persisted label document model.
//!
//! This mirrors the JSON shape of the labels file format: `$schema`,
//! `document`, and a flat list of path-addressed labels. Optional
//! properties are omitted from the serialized output when absent, never
//! written as null; downstream schema consumers distinguish "absent" from
//! "explicitly empty".

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Value kind recorded on a label, for categories that require one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelValueKind {
    /// Value backed by a freehand drawn region instead of OCR words
    #[serde(rename = "region")]
    DrawnRegion,
}

/// One page/bounding-box/text occurrence backing a label's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRegion {
    /// 1-based page number
    pub page: u32,
    /// Text of the occurrence
    pub text: String,
    /// Flattened 4-point polygons, one per word
    #[serde(rename = "boundingBoxes")]
    pub bounding_boxes: Vec<Vec<f64>>,
}

impl FormRegion {
    /// Text backing one of this occurrence's bounding boxes.
    ///
    /// The text is whitespace-split and indexed by box position; an index
    /// past the split parts yields an empty string.
    pub fn box_text(&self, index: usize) -> &str {
        self.text.split(' ').nth(index).unwrap_or("")
    }
}

/// A path-addressed field-value entry in the label document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Encoded label path (scalar tag name, or table/axis/axis)
    #[serde(rename = "label")]
    pub path: String,
    /// Value kind, present only for categories that require one
    #[serde(rename = "labelType", skip_serializing_if = "Option::is_none", default)]
    pub field_kind: Option<LabelValueKind>,
    /// Occurrences backing the value
    pub value: Vec<FormRegion>,
    /// Prediction confidence, present when the label was auto-labeled
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub confidence: Option<f64>,
    /// Whether a user revised an auto-labeled value
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub revised: Option<bool>,
    /// Snapshot of the value before the first revision; written at most once
    #[serde(
        rename = "originValue",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub origin_value: Option<Vec<FormRegion>>,
}

impl Label {
    /// Create an empty label at a path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            field_kind: None,
            value: Vec::new(),
            confidence: None,
            revised: None,
            origin_value: None,
        }
    }
}

/// Overall labeling state of a document.
///
/// Only [`LabelingState::AutoLabeledAndAdjusted`] changes converter
/// behavior: emptied labels are then kept as explicit "field cleared"
/// markers instead of being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelingState {
    /// Labeled by hand
    ManuallyLabeled,
    /// Used for training
    Trained,
    /// Labeled by an automatic prediction
    AutoLabeled,
    /// Auto-labeled, then adjusted by a user
    AutoLabeledAndAdjusted,
}

/// The persisted, schema-versioned label document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDocument {
    /// Schema URI; absent or unrecognized values mean a legacy document
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none", default)]
    pub schema: Option<String>,
    /// Name of the labeled source document
    #[serde(rename = "document")]
    pub document_name: String,
    /// Labels in canonical reading order
    pub labels: Vec<Label>,
}

impl LabelDocument {
    /// Parse a label document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_text_splits_by_index() {
        let region = FormRegion {
            page: 1,
            text: "hello wide world".to_string(),
            bounding_boxes: vec![vec![0.0; 8]; 3],
        };
        assert_eq!(region.box_text(0), "hello");
        assert_eq!(region.box_text(2), "world");
        assert_eq!(region.box_text(3), "");
    }

    #[test]
    fn test_absent_optionals_are_omitted() {
        let doc = LabelDocument {
            schema: Some(crate::schema::CURRENT_LABELS_SCHEMA.to_string()),
            document_name: "invoice.pdf".to_string(),
            labels: vec![Label::new("Name")],
        };
        let json = doc.to_json().unwrap();
        assert!(json.contains("\"$schema\""));
        assert!(!json.contains("labelType"));
        assert!(!json.contains("confidence"));
        assert!(!json.contains("originValue"));
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{
            "$schema": "https://schema.cognitiveservices.azure.com/formrecognizer/2021-03-01/labels.json",
            "document": "invoice.pdf",
            "labels": [
                {
                    "label": "Total",
                    "value": [
                        {"page": 1, "text": "42.00", "boundingBoxes": [[0.1, 0.2, 0.3, 0.2, 0.3, 0.4, 0.1, 0.4]]}
                    ],
                    "confidence": 0.9
                }
            ]
        }"#;
        let doc = LabelDocument::from_json(json).unwrap();
        assert_eq!(doc.labels.len(), 1);
        assert_eq!(doc.labels[0].confidence, Some(0.9));
        let round_tripped = LabelDocument::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(round_tripped, doc);
    }
}
