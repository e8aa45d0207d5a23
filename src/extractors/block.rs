// src/extractors/block.rs

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::record::{ExtractedRecord, Segment, NOT_FOUND};
use super::section::{CompiledSection, SectionSpec};

// --- Segment Numbering Patterns (Lazy Static) ---
// "N)" bullet that starts a warranty/condition segment.
static NUMBER_MARK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,3})\)\s*").expect("Failed to compile NUMBER_MARK_RE")
});

// Looser "N) Title:- Body" convention, used when the primary split finds nothing.
static TITLED_MARK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,3})\)\s*([^\n]+?)\s*:-\s*").expect("Failed to compile TITLED_MARK_RE")
});

/// An ad-hoc multi-line extraction: a marker-bounded region of the response
/// text plus the shape of what to pull out of it.
pub struct BlockSpec {
    pub bucket: &'static str,
    pub region: SectionSpec,
    pub kind: BlockKind,
}

pub enum BlockKind {
    /// Everything between the markers, trimmed, into a single named field.
    FreeText { field: &'static str },
    /// The whole region as one sub-record with a fixed title.
    TitledRecord { title: &'static str },
    /// `N)`-prefixed segments; first line is the title, remainder the body.
    NumberedRecords,
    /// Line-per-row numeric table: numbered rows keyed "Installment N" plus a
    /// "Total" row; lines that match neither pattern are skipped.
    Rows { columns: &'static [&'static str] },
}

pub(crate) struct CompiledBlock {
    bucket: &'static str,
    region: CompiledSection,
    kind: CompiledBlockKind,
}

enum CompiledBlockKind {
    FreeText { field: &'static str },
    TitledRecord { title: &'static str },
    NumberedRecords,
    Rows {
        columns: &'static [&'static str],
        row: Regex,
        total: Regex,
    },
}

impl CompiledBlock {
    pub(crate) fn compile(spec: &BlockSpec) -> Self {
        let kind = match spec.kind {
            BlockKind::FreeText { field } => CompiledBlockKind::FreeText { field },
            BlockKind::TitledRecord { title } => CompiledBlockKind::TitledRecord { title },
            BlockKind::NumberedRecords => CompiledBlockKind::NumberedRecords,
            BlockKind::Rows { columns } => {
                // One numeric cell per declared column, whitespace-delimited.
                let cells = vec![r"([\d,]+(?:\.\d+)?)"; columns.len()].join(r"\s+");
                let row = Regex::new(&format!(
                    r"(?i)^\s*(\d{{1,2}})(?:st|nd|rd|th)?[\s\.\):]+{cells}\s*$"
                ))
                .expect("row pattern is valid");
                let total = Regex::new(&format!(r"(?i)^\s*Total[\s:\-]+{cells}\s*$"))
                    .expect("total-row pattern is valid");
                CompiledBlockKind::Rows { columns, row, total }
            }
        };
        Self {
            bucket: spec.bucket,
            region: CompiledSection::compile(&spec.region),
            kind,
        }
    }

    pub(crate) fn apply(&self, text: &str, record: &mut ExtractedRecord) {
        let block = self.region.isolate(text);
        match &self.kind {
            CompiledBlockKind::FreeText { field } => {
                let value = block
                    .map(str::trim)
                    .filter(|body| !body.is_empty())
                    .map_or_else(|| NOT_FOUND.to_string(), str::to_string);
                record.fields_mut(self.bucket).insert(field.to_string(), value);
            }
            CompiledBlockKind::TitledRecord { title } => {
                let records = record.records_mut(self.bucket);
                if let Some(content) = block.map(str::trim).filter(|body| !body.is_empty()) {
                    records.push(Segment {
                        number: None,
                        title: title.to_string(),
                        content: content.to_string(),
                    });
                }
            }
            CompiledBlockKind::NumberedRecords => {
                let mut segments = block.map(split_numbered).unwrap_or_default();
                if segments.is_empty() {
                    // The numbered layout sometimes collapses into one-line
                    // "N) Title:- Body" entries outside the marked region.
                    segments = split_titled(text);
                }
                record.records_mut(self.bucket).extend(segments);
            }
            CompiledBlockKind::Rows { columns, row, total } => {
                // Touch the bucket first so it exists even when the block is absent.
                let table = record.table_mut(self.bucket);
                let Some(block) = block else { return };
                for line in block.lines() {
                    if let Some(caps) = row.captures(line) {
                        let key = format!("Installment {}", &caps[1]);
                        table.insert(key, row_cells(columns, &caps, 2));
                    } else if let Some(caps) = total.captures(line) {
                        table.insert("Total".to_string(), row_cells(columns, &caps, 1));
                    }
                }
            }
        }
    }
}

fn row_cells(
    columns: &[&str],
    caps: &Captures<'_>,
    first_group: usize,
) -> IndexMap<String, String> {
    columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let value = caps
                .get(first_group + idx)
                .map_or("", |cell| cell.as_str())
                .to_string();
            (column.to_string(), value)
        })
        .collect()
}

/// Splits a block on `N)` bullets. Each segment's first line becomes the
/// title; the rest the content.
fn split_numbered(block: &str) -> Vec<Segment> {
    let marks: Vec<Captures> = NUMBER_MARK_RE.captures_iter(block).collect();
    let mut segments = Vec::new();
    for (idx, caps) in marks.iter().enumerate() {
        let mark = caps.get(0).expect("group 0 is the whole match");
        let end = marks
            .get(idx + 1)
            .and_then(|next| next.get(0))
            .map_or(block.len(), |next| next.start());
        let body = block[mark.end()..end].trim();
        if body.is_empty() {
            continue;
        }
        let (title, content) = match body.split_once('\n') {
            Some((title, content)) => (title.trim(), content.trim()),
            None => (body, ""),
        };
        segments.push(Segment {
            number: Some(caps[1].to_string()),
            title: title.to_string(),
            content: content.to_string(),
        });
    }
    segments
}

/// Fallback split on the `N) Title:- Body` convention.
fn split_titled(text: &str) -> Vec<Segment> {
    let marks: Vec<Captures> = TITLED_MARK_RE.captures_iter(text).collect();
    let mut segments = Vec::new();
    for (idx, caps) in marks.iter().enumerate() {
        let mark = caps.get(0).expect("group 0 is the whole match");
        let end = marks
            .get(idx + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |next| next.start());
        segments.push(Segment {
            number: Some(caps[1].to_string()),
            title: caps[2].trim().to_string(),
            content: text[mark.end()..end].trim().to_string(),
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::record::BucketValue;

    fn installments_spec() -> BlockSpec {
        BlockSpec {
            bucket: "installments",
            region: SectionSpec {
                start: "Installment Details",
                ends: &[],
            },
            kind: BlockKind::Rows {
                columns: &["Premium", "GST", "Total"],
            },
        }
    }

    #[test]
    fn rows_block_emits_numbered_and_total_records() {
        let block = CompiledBlock::compile(&installments_spec());
        let text = "Installment Details:-\n\
                    No. Premium GST Total\n\
                    1st 1,00,000 18,000 1,18,000\n\
                    2nd 1,00,000 18,000 1,18,000\n\
                    3rd 50,000 9,000 59,000\n\
                    Total 2,50,000 45,000 2,95,000\n";
        let mut record = ExtractedRecord::new("UIIC");
        block.apply(text, &mut record);

        let BucketValue::Table(table) = &record.buckets["installments"] else {
            panic!("installments should be a table bucket");
        };
        assert_eq!(table.len(), 4);
        assert_eq!(table["Installment 1"]["Premium"], "1,00,000");
        assert_eq!(table["Installment 3"]["Total"], "59,000");
        assert_eq!(table["Total"]["GST"], "45,000");
        // the header line matched neither pattern and was skipped
        assert!(!table.contains_key("No."));
    }

    #[test]
    fn rows_bucket_is_present_and_empty_without_the_block() {
        let block = CompiledBlock::compile(&installments_spec());
        let mut record = ExtractedRecord::new("UIIC");
        block.apply("no installment section here", &mut record);
        assert_eq!(
            record.buckets["installments"],
            BucketValue::Table(IndexMap::new())
        );
    }

    #[test]
    fn numbered_block_splits_title_and_content() {
        let block = CompiledBlock::compile(&BlockSpec {
            bucket: "warranties",
            region: SectionSpec {
                start: "WARRANTIES",
                ends: &["At United India"],
            },
            kind: BlockKind::NumberedRecords,
        });
        let text = "WARRANTIES :-\n\
                    1) Escrow Warranty\nPremium shall be routed through escrow.\n\
                    2) Maintenance Warranty\nMaintenance visits every quarter.\n\
                    At United India, terms apply.";
        let mut record = ExtractedRecord::new("UIIC");
        block.apply(text, &mut record);

        let BucketValue::Records(records) = &record.buckets["warranties"] else {
            panic!("warranties should be a records bucket");
        };
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].number.as_deref(), Some("1"));
        assert_eq!(records[0].title, "Escrow Warranty");
        assert_eq!(records[0].content, "Premium shall be routed through escrow.");
        assert_eq!(records[1].title, "Maintenance Warranty");
        // the stop marker text is excluded
        assert!(!records[1].content.contains("At United India"));
    }

    #[test]
    fn numbered_block_falls_back_to_titled_convention() {
        let block = CompiledBlock::compile(&BlockSpec {
            bucket: "warranties",
            region: SectionSpec {
                start: "WARRANTIES",
                ends: &[],
            },
            kind: BlockKind::NumberedRecords,
        });
        // No WARRANTIES heading at all, but titled one-liners exist.
        let text = "1) Escrow Warranty:- Premium through escrow account.\n\
                    2) Safety Warranty:- Site watchmen round the clock.";
        let mut record = ExtractedRecord::new("UIIC");
        block.apply(text, &mut record);

        let BucketValue::Records(records) = &record.buckets["warranties"] else {
            panic!("warranties should be a records bucket");
        };
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Escrow Warranty");
        assert_eq!(records[0].content, "Premium through escrow account.");
        assert_eq!(records[1].number.as_deref(), Some("2"));
    }

    #[test]
    fn free_text_block_uses_sentinel_when_markers_absent() {
        let block = CompiledBlock::compile(&BlockSpec {
            bucket: "specialConditions",
            region: SectionSpec {
                start: "WARRANTIES:",
                ends: &["NOTE:"],
            },
            kind: BlockKind::FreeText { field: "Warranties" },
        });
        let mut record = ExtractedRecord::new("NIA");
        block.apply("nothing relevant", &mut record);
        assert_eq!(
            record.field("specialConditions", "Warranties"),
            Some(NOT_FOUND)
        );

        let mut record = ExtractedRecord::new("NIA");
        block.apply(
            "WARRANTIES:\nEscrow warranty applies.\nNOTE: end",
            &mut record,
        );
        assert_eq!(
            record.field("specialConditions", "Warranties"),
            Some("Escrow warranty applies.")
        );
    }

    #[test]
    fn titled_record_block_captures_whole_region_under_fixed_title() {
        let block = CompiledBlock::compile(&BlockSpec {
            bucket: "warranties",
            region: SectionSpec {
                start: "It is hereby agreed",
                ends: &["Territory and Jurisdiction"],
            },
            kind: BlockKind::TitledRecord {
                title: "Section Warranty for road projects",
            },
        });
        let text = "Section Warranty for road projects: It is hereby agreed \
                    and understood that each section is treated separately.\n\
                    Territory and Jurisdiction: India";
        let mut record = ExtractedRecord::new("Bajaj Allianz");
        block.apply(text, &mut record);

        let BucketValue::Records(records) = &record.buckets["warranties"] else {
            panic!("warranties should be a records bucket");
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Section Warranty for road projects");
        assert!(records[0].content.contains("treated separately"));
        assert!(!records[0].content.contains("Territory"));
    }
}
