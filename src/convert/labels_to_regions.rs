//! Expansion of a persisted label document into editable regions.

use crate::error::Error;
use crate::model::{
    FormRegion, Label, LabelDocument, LabelValueKind, Region, RegionCategory, TagCatalog,
};
use crate::table_address::{self, CellKeys};
use crate::{path_codec, schema};

/// What a label's path resolved to.
enum ResolvedPath {
    Scalar { tag_name: String },
    TableCell { tag_name: String, keys: CellKeys },
}

/// Expand a label document back into the region set it describes.
///
/// Each form region inside a label's value becomes one [`Region`] per
/// (bounding box, page) pair, with the canonical geometry+page id. Labels
/// whose path no longer resolves are skipped, never fatal: schema drift is
/// tolerated, and nesting beyond two table axes is intentionally
/// unsupported.
pub fn to_regions(document: &LabelDocument, catalog: &TagCatalog) -> Vec<Region> {
    let encoded = schema::is_encoded_schema(document.schema.as_deref());
    let mut regions = Vec::new();

    for label in &document.labels {
        let resolved = match resolve_path(label, encoded, catalog) {
            Ok(resolved) => resolved,
            Err(e) => {
                log::warn!("dropping label '{}': {}", label.path, e);
                continue;
            }
        };
        for form_region in &label.value {
            expand_form_region(label, &resolved, form_region, catalog, &mut regions);
        }
    }

    regions
}

fn resolve_path(
    label: &Label,
    encoded: bool,
    catalog: &TagCatalog,
) -> crate::Result<ResolvedPath> {
    // Legacy documents predate encoding: the whole path is one scalar tag
    // name, even when it contains separator characters.
    let segments = if encoded {
        path_codec::split(&label.path)
    } else {
        vec![label.path.clone()]
    };

    match segments.len() {
        1 => Ok(ResolvedPath::Scalar {
            tag_name: segments.into_iter().next().unwrap_or_default(),
        }),
        3 => {
            let [table_name, own, definition] = match <[String; 3]>::try_from(segments) {
                Ok(parts) => parts,
                Err(parts) => return Err(Error::UnsupportedNestingDepth(parts.len())),
            };
            let table = catalog
                .find(&table_name)
                .and_then(|tag| tag.as_table())
                .ok_or_else(|| Error::UnresolvableTableAddress {
                    table: table_name.clone(),
                    detail: "no table tag with this name in the catalog".to_string(),
                })?;
            let segments = [table_name.clone(), own, definition];
            let keys = table_address::resolve_cell_keys(&segments, table)?;
            Ok(ResolvedPath::TableCell {
                tag_name: table_name,
                keys,
            })
        }
        depth => Err(Error::UnsupportedNestingDepth(depth)),
    }
}

fn expand_form_region(
    label: &Label,
    resolved: &ResolvedPath,
    form_region: &FormRegion,
    catalog: &TagCatalog,
    regions: &mut Vec<Region>,
) {
    let tag_name = match resolved {
        ResolvedPath::Scalar { tag_name } => tag_name,
        ResolvedPath::TableCell { tag_name, .. } => tag_name,
    };
    let category = region_category(label, tag_name, catalog);

    for (index, coords) in form_region.bounding_boxes.iter().enumerate() {
        let mut region = match Region::from_polygon(
            coords,
            form_region.box_text(index),
            form_region.page,
            category,
        ) {
            Ok(region) => region,
            Err(e) => {
                log::warn!("skipping bounding box {} of '{}': {}", index, label.path, e);
                continue;
            }
        };
        region = match resolved {
            ResolvedPath::Scalar { tag_name } => region.with_tag(tag_name.clone()),
            ResolvedPath::TableCell { tag_name, keys } => region.with_table_cell(
                tag_name.clone(),
                keys.row_key.clone(),
                keys.column_key.clone(),
            ),
        };
        regions.push(region);
    }
}

/// Category precedence: explicit label kind, then the tag's selection-mark
/// kind, then plain text. An unknown scalar tag still expands as text so a
/// renamed tag never loses its geometry.
fn region_category(label: &Label, tag_name: &str, catalog: &TagCatalog) -> RegionCategory {
    match label.field_kind {
        Some(LabelValueKind::DrawnRegion) => RegionCategory::DrawnRegion,
        None => match catalog.find(tag_name) {
            Some(tag) if tag.is_selection_mark() => RegionCategory::Checkbox,
            _ => RegionCategory::Text,
        },
    }
}
