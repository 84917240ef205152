use std::collections::BTreeSet;

use lopdf::content::{Content, Operation};
use lopdf::Document;
use tracing::debug;

use crate::models::document::RawDocument;
use crate::parsing::DecodeError;

/// Segments shorter than this (in points) are ignored as ruling lines.
const MIN_RULE_LENGTH: f64 = 10.0;
/// Rectangles thinner than this are treated as a single ruling line.
const HAIRLINE: f64 = 2.0;
/// Distinct rule positions needed on each axis to form a 2 x 2 grid.
const GRID_RULES: usize = 3;

/// Extracts text from a PDF, counts its pages and flags ruled tables.
///
/// A page is considered to contain a table when its content stream draws at
/// least three distinct horizontal and three distinct vertical rules, which
/// is the smallest bordered grid with more than one cell.
pub fn decode_pdf(content: &[u8]) -> Result<RawDocument, DecodeError> {
    let document = Document::load_mem(content)
        .map_err(|e| DecodeError::Decode(format!("PDF could not be loaded: {e}")))?;
    let text = pdf_extract::extract_text_from_mem(content)
        .map_err(|e| DecodeError::Decode(format!("PDF extraction failed: {e}")))?;

    let pages = document.get_pages();
    let has_tables = pages.values().any(|page_id| {
        document
            .get_page_content(*page_id)
            .ok()
            .and_then(|data| Content::decode(&data).ok())
            .is_some_and(|content| has_ruled_grid(&content.operations))
    });
    debug!(pages = pages.len(), has_tables, "PDF decoded");

    Ok(RawDocument {
        text,
        has_tables,
        page_count: u32::try_from(pages.len()).unwrap_or(u32::MAX).max(1),
    })
}

#[derive(Debug, Default)]
struct Rules {
    horizontal: BTreeSet<i64>,
    vertical: BTreeSet<i64>,
}

impl Rules {
    fn add_segment(&mut self, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) {
        if (y1 - y2).abs() < HAIRLINE && (x1 - x2).abs() >= MIN_RULE_LENGTH {
            self.horizontal.insert(y1.round() as i64);
        } else if (x1 - x2).abs() < HAIRLINE && (y1 - y2).abs() >= MIN_RULE_LENGTH {
            self.vertical.insert(x1.round() as i64);
        }
    }

    fn add_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        if h.abs() < HAIRLINE || w.abs() < HAIRLINE {
            // filled hairline rectangles are how most generators draw rules
            self.add_segment((x, y), (x + w, y + h));
            return;
        }
        self.add_segment((x, y), (x + w, y));
        self.add_segment((x, y + h), (x + w, y + h));
        self.add_segment((x, y), (x, y + h));
        self.add_segment((x + w, y), (x + w, y + h));
    }

    fn forms_grid(&self) -> bool {
        self.horizontal.len() >= GRID_RULES && self.vertical.len() >= GRID_RULES
    }
}

/// Positions are taken in user space; `cm` transforms are not applied.
fn has_ruled_grid(operations: &[Operation]) -> bool {
    let mut rules = Rules::default();
    let mut current: Option<(f64, f64)> = None;

    for op in operations {
        let nums: Vec<f64> = op
            .operands
            .iter()
            .filter_map(|o| o.as_float().ok().map(f64::from))
            .collect();

        match (op.operator.as_str(), nums.as_slice()) {
            ("m", [x, y]) => current = Some((*x, *y)),
            ("l", [x, y]) => {
                if let Some(from) = current {
                    rules.add_segment(from, (*x, *y));
                }
                current = Some((*x, *y));
            }
            ("re", [x, y, w, h]) => {
                rules.add_rect(*x, *y, *w, *h);
                current = None;
            }
            _ => {}
        }
    }

    rules.forms_grid()
}
