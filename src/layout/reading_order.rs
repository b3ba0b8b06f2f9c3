//! Deterministic reading-order index over OCR layout.
//!
//! The index is built exactly once per (re)load of a document's OCR layout
//! and never rebuilt on region edits: only layout changes reorder regions.
//! Traversal per page follows the engine's line/word order, skipping
//! undetected-field placeholder words, then appends checkboxes in supplied
//! order on the same counter.

use crate::geometry;
use crate::layout::{is_undetected_word, OcrLayout};
use std::cmp::Ordering;
use std::collections::HashMap;

/// A region's position in the global reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionOrder {
    /// 1-based page number
    pub page: u32,
    /// Zero-based position within the page
    pub order: usize,
}

impl Default for RegionOrder {
    // Permissive fallback for ids the index has never seen, e.g. freshly
    // drawn regions with no OCR backing.
    fn default() -> Self {
        Self { page: 1, order: 0 }
    }
}

/// Per-page traversal order of OCR-backed region ids.
#[derive(Debug, Clone, Default)]
pub struct ReadingOrderIndex {
    order_by_id: HashMap<u32, HashMap<String, usize>>,
    ids_by_page: HashMap<u32, Vec<String>>,
}

impl ReadingOrderIndex {
    /// Build the index from a document's OCR layout.
    ///
    /// Every surviving word and checkbox gets exactly one (page, order)
    /// slot; words with malformed bounding boxes are skipped with a
    /// warning and cost nothing else.
    pub fn build(layout: &OcrLayout) -> Self {
        let mut index = Self::default();
        for page in &layout.pages {
            let orders = index.order_by_id.entry(page.page).or_default();
            let ids = index.ids_by_page.entry(page.page).or_default();
            let mut order = 0;
            for line in &page.lines {
                for word in &line.words {
                    if is_undetected_word(&word.text) {
                        continue;
                    }
                    let polygon = page.normalized_polygon(&word.bounding_box);
                    if let Err(e) = geometry::polygon_bounds(&polygon) {
                        log::warn!("skipping word '{}' on page {}: {}", word.text, page.page, e);
                        continue;
                    }
                    let id = geometry::region_id(&polygon, page.page);
                    orders.insert(id.clone(), order);
                    ids.push(id);
                    order += 1;
                }
            }
            for checkbox in &page.checkboxes {
                let polygon = page.normalized_polygon(&checkbox.bounding_box);
                if let Err(e) = geometry::polygon_bounds(&polygon) {
                    log::warn!("skipping checkbox on page {}: {}", page.page, e);
                    continue;
                }
                let id = geometry::region_id(&polygon, page.page);
                orders.insert(id.clone(), order);
                ids.push(id);
                order += 1;
            }
        }
        index
    }

    /// Region ids on a page, in reading order.
    pub fn ids_on_page(&self, page: u32) -> &[String] {
        self.ids_by_page.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Locate a region id in the global order.
    ///
    /// Unknown ids get the permissive default of (page 1, order 0) so
    /// sorting never fails on regions without OCR backing.
    pub fn order_of(&self, id: &str) -> RegionOrder {
        for (page, orders) in &self.order_by_id {
            if let Some(&order) = orders.get(id) {
                return RegionOrder { page: *page, order };
            }
        }
        RegionOrder::default()
    }

    /// The id following `id` on a page, wrapping from last to first.
    ///
    /// An unknown id falls back to the page's first id; `None` only when
    /// the page has no ids at all.
    pub fn next(&self, id: &str, page: u32) -> Option<&str> {
        let ids = self.ids_on_page(page);
        let first = ids.first()?;
        match ids.iter().position(|candidate| candidate == id) {
            Some(position) if position + 1 < ids.len() => Some(&ids[position + 1]),
            Some(_) => Some(first),
            None => Some(first),
        }
    }

    /// The id preceding `id` on a page, wrapping from first to last.
    ///
    /// Same fallback behavior as [`ReadingOrderIndex::next`].
    pub fn prev(&self, id: &str, page: u32) -> Option<&str> {
        let ids = self.ids_on_page(page);
        let first = ids.first()?;
        match ids.iter().position(|candidate| candidate == id) {
            Some(0) => ids.last().map(String::as_str),
            Some(position) => Some(&ids[position - 1]),
            None => Some(first),
        }
    }

    /// Total order over region ids by (page, order-within-page).
    ///
    /// Used both for keyboard traversal and for canonical label-document
    /// serialization order.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let order_a = self.order_of(a);
        let order_b = self.order_of(b);
        order_a
            .page
            .cmp(&order_b.page)
            .then(order_a.order.cmp(&order_b.order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{OcrCheckbox, OcrLine, OcrPage, OcrWord};

    fn word(text: &str, x: f64) -> OcrWord {
        OcrWord {
            text: text.to_string(),
            bounding_box: vec![x, 10.0, x + 10.0, 10.0, x + 10.0, 20.0, x, 20.0],
        }
    }

    fn one_page_layout(words: Vec<OcrWord>, checkboxes: Vec<OcrCheckbox>) -> OcrLayout {
        OcrLayout {
            pages: vec![OcrPage {
                page: 1,
                width: 100.0,
                height: 100.0,
                lines: vec![OcrLine { words }],
                checkboxes,
            }],
        }
    }

    #[test]
    fn test_words_get_sequential_orders() {
        let layout = one_page_layout(vec![word("a", 0.0), word("b", 20.0), word("c", 40.0)], vec![]);
        let index = ReadingOrderIndex::build(&layout);
        let ids = index.ids_on_page(1).to_vec();
        assert_eq!(ids.len(), 3);
        for (expected, id) in ids.iter().enumerate() {
            assert_eq!(index.order_of(id).order, expected);
            assert_eq!(index.order_of(id).page, 1);
        }
    }

    #[test]
    fn test_checkboxes_follow_words() {
        let layout = one_page_layout(
            vec![word("a", 0.0)],
            vec![OcrCheckbox {
                state: "selected".to_string(),
                bounding_box: vec![50.0, 50.0, 60.0, 50.0, 60.0, 60.0, 50.0, 60.0],
            }],
        );
        let index = ReadingOrderIndex::build(&layout);
        let ids = index.ids_on_page(1);
        assert_eq!(ids.len(), 2);
        assert_eq!(index.order_of(&ids[1]).order, 1);
    }

    #[test]
    fn test_underscore_words_consume_no_slot() {
        let layout = one_page_layout(vec![word("a", 0.0), word("___", 20.0), word("b", 40.0)], vec![]);
        let index = ReadingOrderIndex::build(&layout);
        let ids = index.ids_on_page(1).to_vec();
        assert_eq!(ids.len(), 2);
        assert_eq!(index.order_of(&ids[1]).order, 1);
        // the skipped word is unreachable via navigation
        assert_eq!(index.next(&ids[0], 1), Some(ids[1].as_str()));
    }

    #[test]
    fn test_next_prev_wrap_around() {
        let layout = one_page_layout(vec![word("a", 0.0), word("b", 20.0), word("c", 40.0)], vec![]);
        let index = ReadingOrderIndex::build(&layout);
        let ids = index.ids_on_page(1).to_vec();
        assert_eq!(index.next(&ids[2], 1), Some(ids[0].as_str()));
        assert_eq!(index.prev(&ids[0], 1), Some(ids[2].as_str()));
        assert_eq!(index.next(&ids[0], 1), Some(ids[1].as_str()));
    }

    #[test]
    fn test_unknown_id_falls_back_to_first() {
        let layout = one_page_layout(vec![word("a", 0.0), word("b", 20.0)], vec![]);
        let index = ReadingOrderIndex::build(&layout);
        let ids = index.ids_on_page(1).to_vec();
        assert_eq!(index.next("nope", 1), Some(ids[0].as_str()));
        assert_eq!(index.prev("nope", 1), Some(ids[0].as_str()));
        assert_eq!(index.next("nope", 9), None);
        assert_eq!(index.order_of("nope"), RegionOrder { page: 1, order: 0 });
    }

    #[test]
    fn test_compare_orders_across_pages() {
        let mut layout = one_page_layout(vec![word("a", 0.0), word("b", 20.0)], vec![]);
        layout.pages.push(OcrPage {
            page: 2,
            width: 100.0,
            height: 100.0,
            lines: vec![OcrLine {
                words: vec![word("c", 0.0)],
            }],
            checkboxes: vec![],
        });
        let index = ReadingOrderIndex::build(&layout);
        let page1 = index.ids_on_page(1).to_vec();
        let page2 = index.ids_on_page(2).to_vec();
        assert_eq!(index.compare(&page1[0], &page1[1]), Ordering::Less);
        assert_eq!(index.compare(&page2[0], &page1[1]), Ordering::Greater);
        assert_eq!(index.compare(&page1[0], &page1[0]), Ordering::Equal);
    }
}
