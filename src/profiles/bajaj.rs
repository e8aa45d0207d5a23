// src/profiles/bajaj.rs
//
// Bajaj Allianz quotes split the excess schedule into two sub-tables ("For
// Major Bridges/Works in water", "For All Other Works"), each repeating the
// same row labels, so those fields live in section-scoped groups merged into
// one excess bucket. The road-project section warranty is a single prose
// block with a fixed title.

use crate::extractors::{
    BlockKind, BlockSpec, ExtractionProfile, FieldGroup, FieldSpec, SectionSpec,
    ValueShape::{Amount, Flag, Text},
};

pub const PROFILE: ExtractionProfile = ExtractionProfile {
    insurer: "Bajaj Allianz",
    groups: &[
        FieldGroup {
            bucket: "basicInfo",
            section: None,
            fields: &[
                FieldSpec::new(
                    "Insured Name",
                    &["Insured Name:", "Insured Name", "Insured:"],
                    Text,
                ),
                FieldSpec::new("Job No", &["Job No:", "Job No.:", "Job No"], Text),
                FieldSpec::new("Risk Location", &["Risk Location:", "Location:", "Location"], Text),
                FieldSpec::new(
                    "Project Description",
                    &[
                        "Project Description:",
                        "Description of Project:",
                        "Project Description",
                    ],
                    Text,
                ),
                FieldSpec::new(
                    "Project Period",
                    &["Project Period:", "Project period:", "Project period"],
                    Text,
                ),
                FieldSpec::new(
                    "Sum Insured",
                    &["Sum Insured:", "Overall Value of Sum Insured", "Sum Insured"],
                    Amount,
                ),
                FieldSpec::new(
                    "Premium (before tax)",
                    &["Premium before tax:", "CAR Premium Payable", "Premium Before Tax"],
                    Amount,
                ),
                FieldSpec::new("GST amount", &["GST amount:", "GST:", "GST @"], Amount),
                FieldSpec::new(
                    "Final Premium",
                    &["Final Premium:", "Final Premium", "Total Premium"],
                    Amount,
                ),
                FieldSpec::new(
                    "Territory and Jurisdiction",
                    &["Territory and Jurisdiction:"],
                    Text,
                ),
                FieldSpec::new("Capacity", &["Capacity:"], Text),
                FieldSpec::new("Validity of Quote", &["Validity of Quote/Terms:"], Text),
            ],
        },
        FieldGroup {
            bucket: "sumInsuredBreakup",
            section: None,
            fields: &[
                FieldSpec::new(
                    "Contract Price",
                    &["Contract Price:", "Contract Price of", "Contract Price"],
                    Amount,
                ),
                FieldSpec::new(
                    "Additional sum to cover",
                    &["Additional sum to cover:", "Additional sum to cover"],
                    Amount,
                ),
                FieldSpec::new(
                    "Materials supplied by Principal",
                    &[
                        "Materials supplied by Principal:",
                        "Materials or items supplied by the Principal",
                    ],
                    Amount,
                ),
                FieldSpec::new(
                    "Temporary works",
                    &["Temporary works:", "All kind of temporary works"],
                    Amount,
                ),
                FieldSpec::new(
                    "Office Furniture and Equipment",
                    &["Office Furniture:", "Office Furniture, Fixtures"],
                    Amount,
                ),
                FieldSpec::new(
                    "Contractor's own materials",
                    &["Contractor's own materials:", "Contractor's own materials"],
                    Amount,
                ),
                FieldSpec::new(
                    "Contractor's Tools & tackles",
                    &["Contractor's Tools & tackles:", "Contractor's Tools & tackles"],
                    Amount,
                ),
                FieldSpec::new(
                    "Overall Value of Sum Insured",
                    &["Overall Value of Sum Insured:", "Overall Value of Sum Insured"],
                    Amount,
                ),
            ],
        },
        FieldGroup {
            bucket: "excess",
            section: Some(SectionSpec {
                start: "For Major Bridges",
                ends: &["For All Other Works"],
            }),
            fields: &[
                FieldSpec::new(
                    "Major Bridges/Works - Normal Claims",
                    &["Normal claims", "Normal Claims"],
                    Text,
                ),
                FieldSpec::new(
                    "Major Bridges/Works - AOG/Major Perils",
                    &["AOG/Major Perils", "AOG"],
                    Text,
                ),
                FieldSpec::new(
                    "Major Bridges/Works - Design Defects",
                    &["Design Defects", "Design Defect"],
                    Text,
                ),
            ],
        },
        FieldGroup {
            bucket: "excess",
            section: Some(SectionSpec {
                start: "For All Other Works",
                ends: &["Third Party"],
            }),
            fields: &[
                FieldSpec::new(
                    "All Other Works - Normal Claims",
                    &["Normal Claims", "Normal claims"],
                    Text,
                ),
                FieldSpec::new(
                    "All Other Works - AOG/Major Perils",
                    &["AOG/Major Perils", "AOG"],
                    Text,
                ),
                FieldSpec::new(
                    "All Other Works - Design Defects",
                    &["Design Defects", "Design Defect"],
                    Text,
                ),
            ],
        },
        FieldGroup {
            bucket: "excess",
            section: None,
            fields: &[
                FieldSpec::new(
                    "Third Party Property Damage",
                    &["Third Party Property Damage", "Property damage"],
                    Text,
                ),
                FieldSpec::new("Bodily Injury", &["Bodily injury", "For Bodily injury"], Text),
            ],
        },
        FieldGroup {
            bucket: "addOns",
            section: None,
            fields: &[
                FieldSpec::new(
                    "Earthquake & STFI",
                    &["Cover for Earthquake", "Earthquake (Fire & Shock) & STFI"],
                    Flag,
                ),
                FieldSpec::new("Escalation", &["Escalation", "Escalation – up to"], Flag),
                FieldSpec::new(
                    "Removal of debris",
                    &["Removal of debris", "Removal of debris (including Dewatering"],
                    Flag,
                ),
                FieldSpec::new(
                    "Owners Surrounding Property",
                    &[
                        "Owners Surrounding Property",
                        "Owners Surrounding Property with FLEXA",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Third Party Liability",
                    &["Third Party Liability", "Third Party Liability with cross"],
                    Flag,
                ),
                FieldSpec::new(
                    "Design Defect Cover",
                    &["Design Defect Cover", "Design Defect Cover as per"],
                    Flag,
                ),
                FieldSpec::new(
                    "Waiver of Subrogation",
                    &["Waiver of Subrogation", "Waiver of Subrogation Clause"],
                    Flag,
                ),
                FieldSpec::new(
                    "Cover for offsite storage",
                    &["Cover for offsite storage", "offsite storage/fabrication"],
                    Flag,
                ),
                FieldSpec::new(
                    "Extended maintenance cover",
                    &["Extended maintenance cover", "Extended maintenance"],
                    Flag,
                ),
                FieldSpec::new(
                    "Plans and documents",
                    &["Plans and documents", "Plans and documents up to"],
                    Flag,
                ),
                FieldSpec::new("Put to use clause", &["Put to use clause", "Put to use"], Flag),
                FieldSpec::new(
                    "Cessation of works",
                    &["Cessation of works", "Cessation of works up to"],
                    Flag,
                ),
                FieldSpec::new("50/50 clause", &["50/50 clause", "50/50"], Flag),
                FieldSpec::new("72 hrs. Clause", &["72 hrs. Clause", "72 hrs"], Flag),
                FieldSpec::new(
                    "Free Automatic Reinstatement",
                    &[
                        "Free Automatic Reinstatement",
                        "Free Automatic Reinstatement Clause",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Professional Fees",
                    &["Professional Fees", "Cover for Professional Fees"],
                    Flag,
                ),
                FieldSpec::new(
                    "Claims preparation cost",
                    &["Claims preparation cost", "Claims preparation"],
                    Flag,
                ),
                FieldSpec::new(
                    "Internal shifting",
                    &["Internal shifting", "Internal shifting of project"],
                    Flag,
                ),
                FieldSpec::new(
                    "Waiver of Contribution Clause",
                    &["Waiver of Contribution", "Waiver of Contribution Clause"],
                    Flag,
                ),
                FieldSpec::new(
                    "Additional Customs Duty",
                    &["Additional Customs Duty", "Additional Customs"],
                    Flag,
                ),
                FieldSpec::new(
                    "Expediting Cost",
                    &["Expediting Cost", "Expediting Cost Including Air Freight"],
                    Flag,
                ),
                FieldSpec::new(
                    "Loss Minimization Expenses",
                    &["Loss Minimization Expenses", "Loss Minimization"],
                    Flag,
                ),
                FieldSpec::new(
                    "Temporary Repairs Clause",
                    &["Temporary Repairs Clause", "Temporary Repairs"],
                    Flag,
                ),
                FieldSpec::new(
                    "Improvement cost",
                    &["Improvement cost", "Improvement cost actual"],
                    Flag,
                ),
                FieldSpec::new(
                    "Public Authorities clause",
                    &["Public Authorities clause", "Public Authorities"],
                    Flag,
                ),
                FieldSpec::new(
                    "Special conditions for piling",
                    &["Special conditions concerning piling", "piling foundation"],
                    Flag,
                ),
                FieldSpec::new(
                    "Safety measures",
                    &["Special conditions concerning safety", "safety measures"],
                    Flag,
                ),
                FieldSpec::new(
                    "Underground cables",
                    &["Special conditions concerning underground", "underground cables"],
                    Flag,
                ),
                FieldSpec::new(
                    "Fire-fighting facilities",
                    &[
                        "Special conditions concerning fire-fighting",
                        "fire-fighting facilities",
                    ],
                    Flag,
                ),
                FieldSpec::new("Coffer dam", &["Return period for coffer dam", "coffer dam"], Flag),
                FieldSpec::new("Storage", &["Endorsement concerning storage", "storage"], Flag),
                FieldSpec::new(
                    "Temporary access roads",
                    &["Endorsement for Temporary access", "Temporary access roads"],
                    Flag,
                ),
                FieldSpec::new("Dewatering", &["Dewatering endorsement", "Dewatering"], Flag),
            ],
        },
    ],
    blocks: &[BlockSpec {
        bucket: "warranties",
        region: SectionSpec {
            start: "It is hereby agreed",
            ends: &["Territory and Jurisdiction"],
        },
        kind: BlockKind::TitledRecord {
            title: "Section Warranty for road projects",
        },
    }],
};
