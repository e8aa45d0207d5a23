// src/profiles/uiic.rs
//
// United India Insurance quote sheets put add-ons in a two-column
// "Add-ons / Limit" table, excesses under a "CAR EXCESS" heading, and carry
// installment and warranty blocks of their own. The add-on group is scoped
// to the table so its labels don't collide with the premium summary.

use crate::extractors::{
    BlockKind, BlockSpec, ExtractionProfile, FieldGroup, FieldSpec, SectionSpec,
    ValueShape::{Amount, Flag, Text},
};

pub const PROFILE: ExtractionProfile = ExtractionProfile {
    insurer: "United India Insurance",
    groups: &[
        FieldGroup {
            bucket: "basicInfo",
            section: None,
            fields: &[
                FieldSpec::new("Insured Name", &["Insured Name:", "Insured Name", "Insured"], Text),
                FieldSpec::new(
                    "Principal Name",
                    &["Principal Name:", "Principal Name", "Principal"],
                    Text,
                ),
                FieldSpec::new(
                    "Contractor Name",
                    &["Contractor Name:", "Contractor Name", "Contractor"],
                    Text,
                ),
                FieldSpec::new("Risk Location", &["Risk Location:", "Risk Location"], Text),
                FieldSpec::new(
                    "Project Code/Job No.",
                    &["Project Code/Job No.:", "Project Code", "Job No.", "JOB No."],
                    Text,
                ),
                FieldSpec::new(
                    "Project Description",
                    &["Project Description:", "Project Description"],
                    Text,
                ),
                FieldSpec::new(
                    "Policy Period",
                    &["Policy Period:", "Policy Period", "Project period"],
                    Text,
                ),
                FieldSpec::new("Sum Insured", &["Sum Insured:", "Sum Insured"], Amount),
                FieldSpec::new(
                    "Premium (before tax)",
                    &["Premium before tax:", "Premium Before Tax", "Premium"],
                    Amount,
                ),
                FieldSpec::new("GST amount", &["GST amount:", "GST:", "GST @"], Amount),
                FieldSpec::new(
                    "Final Premium",
                    &["Final Premium:", "Final Premium", "Premium"],
                    Amount,
                ),
            ],
        },
        FieldGroup {
            bucket: "excess",
            section: None,
            fields: &[
                FieldSpec::new(
                    "Normal claims",
                    &["Normal Claims:", "Normal", "Normal claims"],
                    Text,
                ),
                FieldSpec::new(
                    "AOG/Testing claims",
                    &["AOG/Testing Claims:", "AOG / Major Perils", "AOG/Testing claims"],
                    Text,
                ),
                FieldSpec::new(
                    "Special deductibles",
                    &["Special Deductibles:", "Design Defect Excess", "Special deductibles"],
                    Text,
                ),
            ],
        },
        FieldGroup {
            bucket: "coverages",
            section: None,
            fields: &[
                FieldSpec::new(
                    "Basic Premium",
                    &["Basic Premium:", "Basic Premium", "CAR PREMIUM"],
                    Amount,
                ),
                FieldSpec::new(
                    "Earthquake - II",
                    &["Earthquake:", "Earthquake Cover", "Earthquake"],
                    Text,
                ),
                FieldSpec::new("STFI", &["STFI:", "STFI Cover", "STFI"], Text),
                FieldSpec::new("Terrorism", &["Terrorism:", "Terrorism Cover", "Terrorism"], Text),
                FieldSpec::new("Marine", &["Marine:", "Marine Cover", "Marine"], Text),
                FieldSpec::new(
                    "Total Premium excl GST",
                    &[
                        "Total Premium excluding GST:",
                        "Total Premium excl GST",
                        "Total Premium",
                    ],
                    Amount,
                ),
                FieldSpec::new("GST @ 18%", &["GST @ 18%:", "GST @ 18%", "GST:"], Amount),
                FieldSpec::new(
                    "Total Premium incl GST",
                    &[
                        "Total Premium including GST:",
                        "Total Premium incl GST",
                        "Total",
                    ],
                    Amount,
                ),
            ],
        },
        FieldGroup {
            bucket: "addOns",
            section: Some(SectionSpec {
                start: "Add-ons",
                ends: &["CAR EXCESS", "Installment", "WARRANT"],
            }),
            fields: &[
                FieldSpec::new("Escalation", &["Escalation upto", "Escalation"], Flag),
                FieldSpec::new("Earthquake", &["Earthquake", "EQ"], Flag),
                FieldSpec::new("STFI", &["STFI"], Flag),
                FieldSpec::new(
                    "Waiver of Subrogation",
                    &["Waiver Of Subrogation", "Waiver of subrogation"],
                    Flag,
                ),
                FieldSpec::new("Design Defect", &["Design Defect Cover", "Design Defect"], Flag),
                FieldSpec::new(
                    "Owners Surrounding Property",
                    &["Owners Surrounding Property", "Owners surrounding property"],
                    Flag,
                ),
                FieldSpec::new(
                    "Cover for Offsite Storage",
                    &["Cover For Offsite Storage", "Offsite Storage"],
                    Flag,
                ),
                FieldSpec::new(
                    "Plans & Documents",
                    &["Plans and Documents", "Plans & Documents"],
                    Flag,
                ),
                FieldSpec::new("Put to Use", &["Put To Use", "Put to use"], Flag),
                FieldSpec::new(
                    "Breakage of Glass",
                    &["Breakage of Glass", "Glass Breakage"],
                    Flag,
                ),
                FieldSpec::new("Multiple Insured Clause", &["Multiple Insured Clause"], Flag),
                FieldSpec::new("50/50 Clause", &["50:50 clause", "50/50 clause"], Flag),
                FieldSpec::new("72 Hours Clause", &["72 Hours clause"], Flag),
                FieldSpec::new(
                    "Free Automatic Reinstatement",
                    &["Free Automatic Reinstatement"],
                    Flag,
                ),
                FieldSpec::new("Professional Fees", &["Professional Fees"], Flag),
                FieldSpec::new("Waiver of Contribution", &["Waiver of contribution"], Flag),
                FieldSpec::new("Additional Custom Duty", &["Additional Custom Duty"], Flag),
                FieldSpec::new(
                    "Air Freight & Express Freight",
                    &["Air Freight", "Express Freight", "Expediting Cost"],
                    Flag,
                ),
                FieldSpec::new(
                    "Loss Minimisation Expense",
                    &["Loss Minimisation", "Loss Minimization"],
                    Flag,
                ),
                FieldSpec::new(
                    "TPL with Cross Liability",
                    &["Cross Liability", "TPL with Cross"],
                    Flag,
                ),
                FieldSpec::new(
                    "Debris Removal",
                    &["Debris Removal", "Clearance & Removal"],
                    Flag,
                ),
                FieldSpec::new(
                    "Cessation of Works",
                    &["Cessation of works", "Cessation of Works"],
                    Flag,
                ),
                FieldSpec::new("Claim Preparation Costs", &["Claim Preparation"], Flag),
                FieldSpec::new("Temporary Repair", &["Temporary Repair Clause"], Flag),
                FieldSpec::new("Improvement Cost", &["Improvement Cost"], Flag),
                FieldSpec::new("Internal Shifting", &["Internal Shifting"], Flag),
                FieldSpec::new("Public Authorities", &["Public Authorities"], Flag),
            ],
        },
    ],
    blocks: &[
        BlockSpec {
            bucket: "installments",
            region: SectionSpec {
                start: "Installment Details",
                ends: &[],
            },
            kind: BlockKind::Rows {
                columns: &["Premium", "GST", "Total"],
            },
        },
        BlockSpec {
            bucket: "warranties",
            region: SectionSpec {
                start: "WARRANTIES",
                ends: &["At United India"],
            },
            kind: BlockKind::NumberedRecords,
        },
    ],
};
