// src/extractors/field.rs

use regex::Regex;

use super::block::{BlockKind, BlockSpec, CompiledBlock};
use super::record::{BucketValue, ExtractedRecord, INCLUDED, NOT_FOUND};
use super::section::{CompiledSection, SectionSpec};

/// How a field's value is expected to look. Drives which strategies run and
/// which sentinel applies when only the label is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// Free text; remainder-of-line captures.
    Text,
    /// Numeric/currency; adds the digit-run strategy that may cross a line
    /// break into a table cell and discards trailing prose.
    Amount,
    /// Boolean-style cover; a bare label mention resolves to "Included".
    Flag,
}

/// One logical field: its output name, ordered label synonyms, and shape.
pub struct FieldSpec {
    pub name: &'static str,
    pub labels: &'static [&'static str],
    pub shape: ValueShape,
}

impl FieldSpec {
    pub const fn new(
        name: &'static str,
        labels: &'static [&'static str],
        shape: ValueShape,
    ) -> Self {
        Self { name, labels, shape }
    }
}

/// An output bucket's worth of fields, optionally scoped to a section.
/// Several groups may target the same bucket; they merge in declared order.
pub struct FieldGroup {
    pub bucket: &'static str,
    pub section: Option<SectionSpec>,
    pub fields: &'static [FieldSpec],
}

/// A complete per-insurer extraction configuration. Pure data — adding an
/// insurer means authoring one of these, not new code.
pub struct ExtractionProfile {
    pub insurer: &'static str,
    pub groups: &'static [FieldGroup],
    pub blocks: &'static [BlockSpec],
}

// --- Compiled form ---

/// The per-label strategy table, in fixed precedence order. The first
/// strategy yielding a non-empty trimmed capture wins; `presence` is the
/// value-less fallback for Flag fields.
struct CompiledLabel {
    line: Regex,
    amount: Option<Regex>,
    word: Regex,
    table: Regex,
    presence: Option<Regex>,
}

impl CompiledLabel {
    fn compile(label: &str, shape: ValueShape) -> Self {
        let lit = regex::escape(label);
        Self {
            // Same-line labeled value: label, separator run, rest of line.
            // The separator is required: without it "GST" would swallow the
            // tail of "GSTIN...".
            line: Regex::new(&format!(r"(?im){lit}[ \t:\-]+(.*)$"))
                .expect("same-line pattern is valid"),
            // Numeric/currency run; the separator may cross a line break so a
            // value sitting in the next table cell is still picked up.
            amount: (shape == ValueShape::Amount).then(|| {
                Regex::new(&format!(
                    r"(?i){lit}[\s:\-]*((?:rs\.?|inr|₹)?\s*\d[\d,\.]*(?:\s*/-)?)"
                ))
                .expect("amount-run pattern is valid")
            }),
            // Whole-word labeled value (keeps "GST" out of "GSTIN").
            word: Regex::new(&format!(r"(?im)\b{lit}\b[ \t:\-]+(.*)$"))
                .expect("word-boundary pattern is valid"),
            // Tabular two-column row: label at line start, >=2 spaces or tab,
            // then the second column.
            table: Regex::new(&format!(r"(?im)^[ \t]*{lit}(?:\t+| {{2,}})[ \t]*(\S.*)$"))
                .expect("tabular pattern is valid"),
            // Bare label, possibly inside a numbered bullet.
            presence: (shape == ValueShape::Flag).then(|| {
                Regex::new(&format!(r"(?i)(?:\d+[\.\)]\s*)?\b{lit}"))
                    .expect("presence pattern is valid")
            }),
        }
    }

    /// Runs the value-bearing strategies in precedence order.
    fn capture(&self, scope: &str) -> Option<String> {
        let strategies = [
            Some(&self.line),
            self.amount.as_ref(),
            Some(&self.word),
            Some(&self.table),
        ];
        for pattern in strategies.into_iter().flatten() {
            if let Some(caps) = pattern.captures(scope) {
                if let Some(matched) = caps.get(1) {
                    let value = matched.as_str().trim();
                    if !value.is_empty() {
                        return Some(value.to_string());
                    }
                }
            }
        }
        None
    }

    fn present(&self, scope: &str) -> bool {
        self.presence
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(scope))
    }
}

struct CompiledField {
    name: &'static str,
    labels: Vec<CompiledLabel>,
}

impl CompiledField {
    fn compile(spec: &FieldSpec) -> Self {
        Self {
            name: spec.name,
            labels: spec
                .labels
                .iter()
                .map(|label| CompiledLabel::compile(label, spec.shape))
                .collect(),
        }
    }

    /// Resolves the field against the (possibly section-scoped) text.
    /// Earlier synonyms win outright, including via the presence fallback.
    fn resolve(&self, scope: &str) -> String {
        for label in &self.labels {
            if let Some(value) = label.capture(scope) {
                return value;
            }
            if label.present(scope) {
                return INCLUDED.to_string();
            }
        }
        NOT_FOUND.to_string()
    }
}

struct CompiledGroup {
    bucket: &'static str,
    section: Option<CompiledSection>,
    fields: Vec<CompiledField>,
}

/// Which empty value a bucket takes in a failure record.
enum BucketShape {
    Fields,
    Table,
    Records,
}

/// An `ExtractionProfile` with every pattern compiled. Built once (the
/// profile registry holds these in `Lazy` statics) and shared across calls.
pub struct CompiledProfile {
    pub insurer: &'static str,
    groups: Vec<CompiledGroup>,
    blocks: Vec<CompiledBlock>,
    skeleton: Vec<(&'static str, BucketShape)>,
}

impl CompiledProfile {
    pub fn compile(profile: &ExtractionProfile) -> Self {
        let mut skeleton: Vec<(&'static str, BucketShape)> = Vec::new();
        let mut remember = |bucket: &'static str, shape: BucketShape| {
            if !skeleton.iter().any(|(name, _)| *name == bucket) {
                skeleton.push((bucket, shape));
            }
        };
        for group in profile.groups {
            remember(group.bucket, BucketShape::Fields);
        }
        for block in profile.blocks {
            let shape = match block.kind {
                BlockKind::FreeText { .. } => BucketShape::Fields,
                BlockKind::Rows { .. } => BucketShape::Table,
                BlockKind::TitledRecord { .. } | BlockKind::NumberedRecords => {
                    BucketShape::Records
                }
            };
            remember(block.bucket, shape);
        }

        Self {
            insurer: profile.insurer,
            groups: profile
                .groups
                .iter()
                .map(|group| CompiledGroup {
                    bucket: group.bucket,
                    section: group.section.as_ref().map(CompiledSection::compile),
                    fields: group.fields.iter().map(CompiledField::compile).collect(),
                })
                .collect(),
            blocks: profile.blocks.iter().map(CompiledBlock::compile).collect(),
            skeleton,
        }
    }

    /// The all-empty-buckets record the serving layer substitutes when the
    /// upstream fetch fails and the extractor is never invoked.
    pub fn empty_record(&self, error: impl Into<String>) -> ExtractedRecord {
        let mut record = ExtractedRecord::new(self.insurer);
        record.error = Some(error.into());
        for (bucket, shape) in &self.skeleton {
            let value = match shape {
                BucketShape::Fields => BucketValue::Fields(Default::default()),
                BucketShape::Table => BucketValue::Table(Default::default()),
                BucketShape::Records => BucketValue::Records(Vec::new()),
            };
            record.buckets.insert(bucket.to_string(), value);
        }
        record
    }
}

/// Runs the profile against the response text. Total: every declared field
/// comes back with a value or a sentinel, and nothing here can fail — empty
/// or garbage input just produces an all-sentinel record.
pub fn extract(text: &str, profile: &CompiledProfile) -> ExtractedRecord {
    let mut record = ExtractedRecord::new(profile.insurer);

    for group in &profile.groups {
        // A missing section start marker scopes the whole group to nothing:
        // its fields all resolve to the not-found sentinel.
        let scope = match &group.section {
            Some(section) => section.isolate(text).unwrap_or(""),
            None => text,
        };
        let fields = record.fields_mut(group.bucket);
        for field in &group.fields {
            fields.insert(field.name.to_string(), field.resolve(scope));
        }
    }

    for block in &profile.blocks {
        block.apply(text, &mut record);
    }

    tracing::debug!(
        insurer = profile.insurer,
        buckets = record.buckets.len(),
        "extraction complete"
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use ValueShape::{Amount, Flag, Text};

    const BASIC: FieldGroup = FieldGroup {
        bucket: "basicInfo",
        section: None,
        fields: &[
            FieldSpec {
                name: "GSTIN",
                labels: &["GSTIN:", "GSTIN"],
                shape: Text,
            },
            FieldSpec {
                name: "Insured Name",
                labels: &["Insured Name:", "NAME & ADDRESS OF THE PRINCIPAL"],
                shape: Text,
            },
            FieldSpec {
                name: "Sum Insured",
                labels: &["Sum Insured"],
                shape: Amount,
            },
        ],
    };

    const ADD_ONS: FieldGroup = FieldGroup {
        bucket: "addOns",
        section: None,
        fields: &[FieldSpec {
            name: "Debris Removal",
            labels: &["Debris Removal"],
            shape: Flag,
        }],
    };

    const PROFILE: ExtractionProfile = ExtractionProfile {
        insurer: "TestCo",
        groups: &[BASIC, ADD_ONS],
        blocks: &[],
    };

    fn compiled() -> CompiledProfile {
        CompiledProfile::compile(&PROFILE)
    }

    #[test]
    fn same_line_labeled_value_is_captured_and_trimmed() {
        let record = extract("GSTIN: 27AAFCL0213K1ZP  \nmore text", &compiled());
        assert_eq!(record.field("basicInfo", "GSTIN"), Some("27AAFCL0213K1ZP"));
    }

    #[test]
    fn empty_input_yields_all_sentinels_and_full_schema() {
        let record = extract("", &compiled());
        let BucketValue::Fields(basic) = &record.buckets["basicInfo"] else {
            panic!("basicInfo should be a fields bucket");
        };
        assert_eq!(basic.len(), 3);
        assert!(basic.values().all(|value| value == NOT_FOUND));
        assert_eq!(record.field("addOns", "Debris Removal"), Some(NOT_FOUND));
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "GSTIN: 27AAFCL0213K1ZP\nSum Insured\n1,00,00,000\nDebris Removal";
        let profile = compiled();
        let first = serde_json::to_string(&extract(text, &profile)).unwrap();
        let second = serde_json::to_string(&extract(text, &profile)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn earlier_synonym_wins_over_later_one() {
        let text = "NAME & ADDRESS OF THE PRINCIPAL: M/s. Peerless Finance\n\
                    Insured Name: M/s. Larsen & Toubro Limited";
        let record = extract(text, &compiled());
        assert_eq!(
            record.field("basicInfo", "Insured Name"),
            Some("M/s. Larsen & Toubro Limited")
        );
    }

    #[test]
    fn amount_run_crosses_line_break_and_drops_trailing_prose() {
        // Value sits on the following table line; the digit run stops before prose.
        let record = extract("Sum Insured\n1,23,45,678 only as agreed", &compiled());
        assert_eq!(record.field("basicInfo", "Sum Insured"), Some("1,23,45,678"));
    }

    #[test]
    fn presence_fallback_applies_to_flag_fields_only() {
        // Bare mention, no trailing value on the line.
        let record = extract("Covers include:\nDebris Removal\nGSTIN\n", &compiled());
        assert_eq!(record.field("addOns", "Debris Removal"), Some(INCLUDED));
        // Same bare-mention condition on a basic-info field stays Not Found.
        assert_eq!(record.field("basicInfo", "GSTIN"), Some(NOT_FOUND));
    }

    #[test]
    fn numbered_bullet_mention_counts_as_presence() {
        let record = extract("Add-on covers:\n12) Debris Removal\n", &compiled());
        assert_eq!(record.field("addOns", "Debris Removal"), Some(INCLUDED));
    }

    #[test]
    fn word_boundary_keeps_gst_out_of_gstin() {
        const GST: ExtractionProfile = ExtractionProfile {
            insurer: "TestCo",
            groups: &[FieldGroup {
                bucket: "premium",
                section: None,
                fields: &[FieldSpec {
                    name: "GST",
                    labels: &["GST"],
                    shape: Amount,
                }],
            }],
            blocks: &[],
        };
        let profile = CompiledProfile::compile(&GST);
        // "GST" inside "GSTIN2..." must not match; the real GST line must.
        let record = extract("GSTIN27AAFCL0213K1ZP\nGST: 54,000\n", &profile);
        assert_eq!(record.field("premium", "GST"), Some("54,000"));
    }

    #[test]
    fn section_scoped_field_ignores_identical_label_outside() {
        const SCOPED: ExtractionProfile = ExtractionProfile {
            insurer: "TestCo",
            groups: &[FieldGroup {
                bucket: "excess",
                section: Some(SectionSpec {
                    start: "CAR EXCESS",
                    ends: &["WARRANTIES"],
                }),
                fields: &[FieldSpec {
                    name: "Normal Claims",
                    labels: &["Normal Claims"],
                    shape: Text,
                }],
            }],
            blocks: &[],
        };
        let profile = CompiledProfile::compile(&SCOPED);
        let text = "Normal Claims: wrong value outside section\n\
                    CAR EXCESS\nNormal Claims: 5% of claim amount\nWARRANTIES\n";
        let record = extract(text, &profile);
        assert_eq!(
            record.field("excess", "Normal Claims"),
            Some("5% of claim amount")
        );

        // Section start absent: scoped fields resolve to the sentinel even
        // though the label appears in the full text.
        let record = extract("Normal Claims: 5%", &profile);
        assert_eq!(record.field("excess", "Normal Claims"), Some(NOT_FOUND));
    }

    #[test]
    fn groups_sharing_a_bucket_merge_in_order() {
        const MERGED: ExtractionProfile = ExtractionProfile {
            insurer: "TestCo",
            groups: &[
                FieldGroup {
                    bucket: "excess",
                    section: Some(SectionSpec {
                        start: "For Major Bridges",
                        ends: &["For All Other Works"],
                    }),
                    fields: &[FieldSpec {
                        name: "Major Bridges - Normal Claims",
                        labels: &["Normal Claims"],
                        shape: Text,
                    }],
                },
                FieldGroup {
                    bucket: "excess",
                    section: Some(SectionSpec {
                        start: "For All Other Works",
                        ends: &[],
                    }),
                    fields: &[FieldSpec {
                        name: "Other Works - Normal Claims",
                        labels: &["Normal Claims"],
                        shape: Text,
                    }],
                },
            ],
            blocks: &[],
        };
        let profile = CompiledProfile::compile(&MERGED);
        let text = "For Major Bridges in water\nNormal Claims: 10% min 5 lakh\n\
                    For All Other Works\nNormal Claims: 5% min 1 lakh\n";
        let record = extract(text, &profile);
        assert_eq!(
            record.field("excess", "Major Bridges - Normal Claims"),
            Some("10% min 5 lakh")
        );
        assert_eq!(
            record.field("excess", "Other Works - Normal Claims"),
            Some("5% min 1 lakh")
        );
        // one merged bucket, two fields
        let BucketValue::Fields(excess) = &record.buckets["excess"] else {
            panic!("excess should be a fields bucket");
        };
        assert_eq!(excess.len(), 2);
    }

    #[test]
    fn tabular_two_column_row_captures_second_column() {
        const TABULAR: ExtractionProfile = ExtractionProfile {
            insurer: "TestCo",
            groups: &[FieldGroup {
                bucket: "addOns",
                section: None,
                fields: &[FieldSpec {
                    name: "Escalation",
                    labels: &["Escalation upto 15%", "Escalation"],
                    shape: Flag,
                }],
            }],
            blocks: &[],
        };
        let profile = CompiledProfile::compile(&TABULAR);
        let record = extract("Escalation upto 15%   Agreed upto 15%\n", &profile);
        // first synonym hits via the same-line strategy family
        assert_eq!(record.field("addOns", "Escalation"), Some("Agreed upto 15%"));
    }

    #[test]
    fn empty_record_carries_error_and_declared_buckets() {
        let record = compiled().empty_record("connection refused");
        assert_eq!(record.error.as_deref(), Some("connection refused"));
        assert_eq!(record.buckets.len(), 2);
        assert_eq!(
            record.buckets["basicInfo"],
            BucketValue::Fields(Default::default())
        );
    }
}
