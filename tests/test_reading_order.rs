//! Integration tests for the reading-order index over OCR-shaped JSON.

use form_label::layout::{OcrLayout, ReadingOrderIndex};
use std::cmp::Ordering;

const OCR_JSON: &str = r#"{
    "pages": [
        {
            "page": 1,
            "width": 1000.0,
            "height": 800.0,
            "lines": [
                {"words": [
                    {"text": "Invoice", "boundingBox": [100, 100, 200, 100, 200, 120, 100, 120]},
                    {"text": "___", "boundingBox": [220, 100, 300, 100, 300, 120, 220, 120]},
                    {"text": "Number", "boundingBox": [320, 100, 420, 100, 420, 120, 320, 120]}
                ]},
                {"words": [
                    {"text": "Total", "boundingBox": [100, 200, 180, 200, 180, 220, 100, 220]}
                ]}
            ],
            "selectionMarks": [
                {"state": "selected", "boundingBox": [500, 500, 520, 500, 520, 520, 500, 520]}
            ]
        },
        {
            "page": 2,
            "width": 1000.0,
            "height": 800.0,
            "lines": [
                {"words": [
                    {"text": "Paid", "boundingBox": [100, 100, 160, 100, 160, 120, 100, 120]}
                ]}
            ]
        }
    ]
}"#;

fn build_index() -> ReadingOrderIndex {
    let layout: OcrLayout = serde_json::from_str(OCR_JSON).unwrap();
    ReadingOrderIndex::build(&layout)
}

#[test]
fn test_words_then_checkboxes_skipping_placeholders() {
    let index = build_index();
    let ids = index.ids_on_page(1);
    // "___" consumes no slot: Invoice, Number, Total, then the checkbox
    assert_eq!(ids.len(), 4);
    for (expected, id) in ids.iter().enumerate() {
        let order = index.order_of(id);
        assert_eq!(order.page, 1);
        assert_eq!(order.order, expected);
    }
}

#[test]
fn test_wraparound_navigation() {
    let index = build_index();
    let ids = index.ids_on_page(1).to_vec();
    assert_eq!(index.next(&ids[3], 1), Some(ids[0].as_str()));
    assert_eq!(index.prev(&ids[0], 1), Some(ids[3].as_str()));
    assert_eq!(index.next(&ids[1], 1), Some(ids[2].as_str()));
}

#[test]
fn test_global_comparison_spans_pages() {
    let index = build_index();
    let last_on_page_1 = index.ids_on_page(1).last().unwrap().clone();
    let first_on_page_2 = index.ids_on_page(2)[0].clone();
    assert_eq!(
        index.compare(&last_on_page_1, &first_on_page_2),
        Ordering::Less
    );
    assert_eq!(
        index.compare(&first_on_page_2, &last_on_page_1),
        Ordering::Greater
    );
}

#[test]
fn test_unknown_id_is_not_an_error() {
    let index = build_index();
    let first = index.ids_on_page(1)[0].clone();
    assert_eq!(index.next("no-such-id", 1), Some(first.as_str()));
    let fallback = index.order_of("no-such-id");
    assert_eq!((fallback.page, fallback.order), (1, 0));
}
