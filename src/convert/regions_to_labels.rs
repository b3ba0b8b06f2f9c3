//! Folding of a region set into a persisted label document.

use crate::layout::ReadingOrderIndex;
use crate::model::{
    FormRegion, Label, LabelDocument, LabelValueKind, LabelingState, Region, RegionCategory,
    TagCatalog,
};
use crate::{path_codec, schema, table_address};
use indexmap::IndexMap;
use std::collections::HashSet;

/// A label being assembled, together with its pre-edit value snapshot.
struct LabelSlot {
    label: Label,
    prior_value: Vec<FormRegion>,
}

impl LabelSlot {
    fn fresh(path: &str, field_kind: Option<LabelValueKind>) -> Self {
        let mut label = Label::new(path);
        label.field_kind = field_kind;
        Self {
            label,
            prior_value: Vec::new(),
        }
    }

    /// Mark an auto-labeled value as user-revised, snapshotting the
    /// pre-edit value exactly once.
    fn mark_revised(&mut self) {
        if self.label.confidence.is_none() {
            return;
        }
        self.label.revised = Some(true);
        if self.label.origin_value.is_none() {
            self.label.origin_value = Some(self.prior_value.clone());
        }
    }
}

/// Fold a region set into a label document.
///
/// Regions are stably sorted by reading order first, so the output is
/// independent of edit order; calling this twice with identical inputs
/// yields a structurally identical document. Prior labels contribute their
/// confidence and revision bookkeeping; their values are recomputed from
/// the live regions. A label emptied of regions is dropped from the output
/// unless the document's labeling state is
/// [`LabelingState::AutoLabeledAndAdjusted`], in which case it survives
/// with an empty value as an explicit "field cleared" marker.
pub fn to_label_document(
    regions: &[Region],
    prior: Option<&LabelDocument>,
    catalog: &TagCatalog,
    document_name: &str,
    labeling_state: LabelingState,
    order: &ReadingOrderIndex,
) -> LabelDocument {
    let mut slots: IndexMap<String, LabelSlot> = IndexMap::new();

    if let Some(prior) = prior {
        carry_prior_labels(prior, &mut slots);
    }

    let mut sorted: Vec<&Region> = regions.iter().filter(|r| r.tag.is_some()).collect();
    sorted.sort_by(|a, b| order.compare(&a.id, &b.id));

    let mut claimed: HashSet<String> = HashSet::new();
    for region in &sorted {
        assign_region(region, catalog, &mut slots, &mut claimed);
    }
    mark_abandoned_labels(&sorted, &mut slots);

    let labels = slots
        .into_values()
        .map(|slot| slot.label)
        .filter(|label| {
            !label.value.is_empty() || labeling_state == LabelingState::AutoLabeledAndAdjusted
        })
        .collect();

    LabelDocument {
        schema: Some(schema::CURRENT_LABELS_SCHEMA.to_string()),
        document_name: document_name.to_string(),
        labels,
    }
}

/// Seed the slot map from the prior document: values are cleared and kept
/// aside as pre-edit snapshots, and every path is recomputed under the
/// current encoding rules so renamed or retyped tags don't silently orphan
/// their bookkeeping.
fn carry_prior_labels(prior: &LabelDocument, slots: &mut IndexMap<String, LabelSlot>) {
    let encoded = schema::is_encoded_schema(prior.schema.as_deref());
    for label in &prior.labels {
        let segments = if encoded {
            path_codec::split(&label.path)
        } else {
            vec![label.path.clone()]
        };
        if segments.len() != 1 && segments.len() != 3 {
            log::warn!(
                "dropping prior label '{}': unsupported nesting depth {}",
                label.path,
                segments.len()
            );
            continue;
        }
        let canonical = path_codec::join(&segments);
        let mut carried = label.clone();
        carried.path = canonical.clone();
        let prior_value = std::mem::take(&mut carried.value);
        slots.insert(
            canonical,
            LabelSlot {
                label: carried,
                prior_value,
            },
        );
    }
}

/// Resolve a region's owning label and append its form region.
fn assign_region(
    region: &Region,
    catalog: &TagCatalog,
    slots: &mut IndexMap<String, LabelSlot>,
    claimed: &mut HashSet<String>,
) {
    let Some(tag_name) = region.tag.as_deref() else {
        return;
    };

    let path = if region.is_table_region {
        let Some(table) = catalog.find(tag_name).and_then(|tag| tag.as_table()) else {
            log::warn!(
                "dropping region '{}': '{}' is not a table tag in the catalog",
                region.id,
                tag_name
            );
            return;
        };
        match table_address::build_path(table, region) {
            Ok(segments) => path_codec::join(&segments),
            Err(e) => {
                log::warn!("dropping region '{}': {}", region.id, e);
                return;
            }
        }
    } else {
        path_codec::encode(tag_name)
    };

    let polygon = region.polygon();
    if polygon.is_empty() || polygon.iter().any(|v| !v.is_finite()) {
        log::warn!("dropping region '{}': malformed bounding box", region.id);
        return;
    }
    // no two labels may claim the same (bounding box, page) pair
    let claim = crate::geometry::region_id(&polygon, region.page_number);
    if !claimed.insert(claim) {
        log::debug!(
            "region '{}' duplicates an already-claimed bounding box, skipping",
            region.id
        );
        return;
    }

    let field_kind = label_value_kind(region.category);
    let slot = slots
        .entry(path.clone())
        .or_insert_with(|| LabelSlot::fresh(&path, field_kind));
    slot.label.value.push(FormRegion {
        page: region.page_number,
        text: region.value.clone(),
        bounding_boxes: vec![polygon],
    });
    if region.changed {
        slot.mark_revised();
    }
}

/// Revision bookkeeping is symmetric: when a changed region's tag moved it
/// to a different label, the label it left is revised too.
fn mark_abandoned_labels(sorted: &[&Region], slots: &mut IndexMap<String, LabelSlot>) {
    for region in sorted {
        if !region.changed {
            continue;
        }
        let polygon = region.polygon();
        for slot in slots.values_mut() {
            let held_before = slot.prior_value.iter().any(|form_region| {
                form_region.page == region.page_number
                    && form_region.bounding_boxes.iter().any(|b| *b == polygon)
            });
            let holds_now = slot.label.value.iter().any(|form_region| {
                form_region.page == region.page_number
                    && form_region.bounding_boxes.iter().any(|b| *b == polygon)
            });
            if held_before && !holds_now {
                slot.mark_revised();
            }
        }
    }
}

/// Only freehand drawn regions record a value kind on their label; for
/// everything else the property stays absent.
fn label_value_kind(category: RegionCategory) -> Option<LabelValueKind> {
    match category {
        RegionCategory::DrawnRegion => Some(LabelValueKind::DrawnRegion),
        RegionCategory::Text | RegionCategory::Checkbox => None,
    }
}
