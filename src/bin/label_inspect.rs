//! Label Document Inspector
//!
//! Expands a labels JSON file into regions against a tag catalog, folds the
//! regions back into a document, and reports whether the round trip is
//! consistent.
//!
//! Usage:
//!   cargo run --bin label_inspect -- invoice.labels.json
//!   cargo run --bin label_inspect -- invoice.labels.json tags.json
//!   cargo run --bin label_inspect -- invoice.labels.json tags.json invoice.ocr.json

use form_label::layout::{OcrLayout, ReadingOrderIndex};
use form_label::model::{LabelingState, TagCatalog};
use form_label::{to_label_document, to_regions, LabelDocument};
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(labels_path) = args.next() else {
        eprintln!("usage: label_inspect <labels.json> [tags.json] [ocr.json]");
        return ExitCode::FAILURE;
    };
    let catalog_path = args.next();
    let ocr_path = args.next();

    match run(&labels_path, catalog_path.as_deref(), ocr_path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(
    labels_path: &str,
    catalog_path: Option<&str>,
    ocr_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = LabelDocument::from_json(&fs::read_to_string(labels_path)?)?;

    let catalog: TagCatalog = match catalog_path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => TagCatalog::default(),
    };

    let order = match ocr_path {
        Some(path) => {
            let layout: OcrLayout = serde_json::from_str(&fs::read_to_string(path)?)?;
            ReadingOrderIndex::build(&layout)
        }
        None => ReadingOrderIndex::build(&OcrLayout { pages: vec![] }),
    };

    println!("document: {}", document.document_name);
    println!(
        "schema:   {}",
        document.schema.as_deref().unwrap_or("(legacy, unencoded)")
    );
    println!("labels:   {}", document.labels.len());

    let regions = to_regions(&document, &catalog);
    println!("regions:  {}", regions.len());
    for label in &document.labels {
        let boxes: usize = label.value.iter().map(|v| v.bounding_boxes.len()).sum();
        let mut notes = Vec::new();
        if let Some(confidence) = label.confidence {
            notes.push(format!("confidence {:.2}", confidence));
        }
        if label.revised == Some(true) {
            notes.push("revised".to_string());
        }
        let notes = if notes.is_empty() {
            String::new()
        } else {
            format!(" ({})", notes.join(", "))
        };
        println!("  {:40} {} boxes{}", label.path, boxes, notes);
    }

    let refolded = to_label_document(
        &regions,
        Some(&document),
        &catalog,
        &document.document_name,
        LabelingState::ManuallyLabeled,
        &order,
    );

    let before: usize = document.labels.iter().map(|l| l.value.len()).sum();
    let after: usize = refolded.labels.iter().map(|l| l.value.len()).sum();
    if before == after {
        println!("round trip: consistent ({} form regions)", after);
    } else {
        println!(
            "round trip: {} form regions in, {} out (labels dropped by schema drift?)",
            before, after
        );
    }

    Ok(())
}
