// src/profiles/icici.rs
//
// ICICI Lombard terms letters are prose-heavy: labels appear inline with
// colons rather than in tables, and add-ons come as a bulleted list where a
// bare mention means the cover is in.

use crate::extractors::{
    ExtractionProfile, FieldGroup, FieldSpec,
    ValueShape::{Amount, Flag, Text},
};

pub const PROFILE: ExtractionProfile = ExtractionProfile {
    insurer: "ICICI",
    groups: &[
        FieldGroup {
            bucket: "basicInfo",
            section: None,
            fields: &[
                FieldSpec::new("Insured Name", &["Insured Name:", "Insured Name"], Text),
                FieldSpec::new(
                    "Principal Name",
                    &["Principal Name:", "Principal Name", "Name of Principal:"],
                    Text,
                ),
                FieldSpec::new(
                    "Contractor Name",
                    &["Contractor Name:", "Contractor Name", "Name of Contractor:"],
                    Text,
                ),
                FieldSpec::new("Risk Location", &["Risk Location:", "Risk Location"], Text),
                FieldSpec::new(
                    "Project Description",
                    &[
                        "Project Description:",
                        "Project Description",
                        "Scope of Work:",
                        "Nature of Project:",
                    ],
                    Text,
                ),
                FieldSpec::new(
                    "Policy Period",
                    &["Policy Period:", "Policy Period", "Tentative Policy Period:"],
                    Text,
                ),
                FieldSpec::new(
                    "Sum Insured",
                    &["Sum Insured:", "Sum Insured", "Total Sum Insured:"],
                    Amount,
                ),
                FieldSpec::new(
                    "Premium (before tax)",
                    &[
                        "Premium before tax:",
                        "Premium Before Service Tax:",
                        "Final Premium Before Service Tax:",
                    ],
                    Amount,
                ),
                FieldSpec::new("GST amount", &["GST amount:", "GST:", "GST @"], Amount),
                FieldSpec::new(
                    "Final Premium",
                    &["Final Premium:", "Final premium:", "Final Premium"],
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
                    &["Normal Claims:", "Normal claims", "Normal:", "Normal Claims -"],
                    Text,
                ),
                FieldSpec::new(
                    "AOG/Testing claims",
                    &[
                        "AOG/Testing Claims:",
                        "AOG/Testing claims",
                        "AOG / Testing claims",
                    ],
                    Text,
                ),
                FieldSpec::new(
                    "Special deductibles",
                    &[
                        "Special Deductibles:",
                        "Special deductibles",
                        "Excess on glass items",
                    ],
                    Text,
                ),
            ],
        },
        FieldGroup {
            bucket: "coverages",
            section: None,
            fields: &[
                FieldSpec::new("Basic Premium", &["Basic Premium:", "Basic Premium"], Amount),
                FieldSpec::new(
                    "Earthquake - II",
                    &[
                        "Earthquake Cover:",
                        "Earthquake Cover",
                        "Earthquake Coverage",
                        "Earthquake Cover (Fire & Shock)",
                    ],
                    Text,
                ),
                FieldSpec::new(
                    "STFI",
                    &["STFI:", "STFI", "STFI Coverage", "STFI Included"],
                    Text,
                ),
                FieldSpec::new(
                    "Terrorism",
                    &["Terrorism:", "Terrorism", "Terrorism Coverage", "End 32 - Terrorism"],
                    Text,
                ),
                FieldSpec::new("Marine", &["Marine:", "Marine", "Marine Coverage"], Text),
                FieldSpec::new(
                    "Total Premium excl GST",
                    &[
                        "Total Premium excluding GST:",
                        "Total Premium excl GST",
                        "Total Premium Before Service Tax",
                    ],
                    Amount,
                ),
                FieldSpec::new("GST @ 18%", &["GST @ 18%:", "GST @ 18%", "GST:"], Amount),
                FieldSpec::new(
                    "Total Premium incl GST",
                    &[
                        "Total Premium including GST:",
                        "Total Premium incl GST",
                        "Final premium",
                    ],
                    Amount,
                ),
            ],
        },
        FieldGroup {
            bucket: "addOns",
            section: None,
            fields: &[
                FieldSpec::new(
                    "Escalation",
                    &["Escalation:", "Escalation", "Escalation upto"],
                    Flag,
                ),
                FieldSpec::new(
                    "Earthquake",
                    &["Earthquake:", "Earthquake", "Earthquake Cover"],
                    Flag,
                ),
                FieldSpec::new(
                    "Waiver of Subrogation",
                    &[
                        "Waiver of Subrogation:",
                        "Waiver of subrogation",
                        "Waiver of Subrogation",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Design Defect - DE3",
                    &["Design Defect:", "Design Defect", "Design Defect -"],
                    Flag,
                ),
                FieldSpec::new(
                    "Owners Surrounding property with Flexa",
                    &[
                        "Owners Surrounding Property:",
                        "Owners' surrounding property",
                        "Owners Surrounding property",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Cover for offsite storage, fabrication",
                    &[
                        "Cover for Offsite Storage/Fabrication:",
                        "Cover for offsite storage",
                        "Offsite storage",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Plans & Documents",
                    &[
                        "Plans & Documents:",
                        "Valuable Documents",
                        "Cover for Valuable Documents",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Put to Use",
                    &[
                        "Put to Use:",
                        "Put to Use",
                        "Continuity of cover during operational phase",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Breakage of glass",
                    &["Breakage of Glass:", "Breakage of Glass", "Breakage of Glass Cover"],
                    Flag,
                ),
                FieldSpec::new(
                    "Multiple Insured Clause",
                    &["Multiple Insured Clause:", "Multiple Insured Clause"],
                    Flag,
                ),
                FieldSpec::new(
                    "50/50 Clause",
                    &["50/50 Clause:", "50:50 Clause", "50/50 Clause"],
                    Flag,
                ),
                FieldSpec::new(
                    "72 hours clause",
                    &["72 Hours Clause:", "72 Hours Clause"],
                    Flag,
                ),
                FieldSpec::new(
                    "Free Auto. Reinstatement upto 10%",
                    &[
                        "Free Automatic Reinstatement:",
                        "Free Automatic Re-instatement",
                        "Free Auto. Reinstatement",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Professional Fees",
                    &["Professional Fees:", "Professional fees"],
                    Flag,
                ),
                FieldSpec::new(
                    "Waiver of contribution clause",
                    &["Waiver of Contribution Clause:", "Waiver of contribution clause"],
                    Flag,
                ),
                FieldSpec::new(
                    "Additional custom duty - upto 10 Cr",
                    &["Additional Custom Duty:", "Additional Custom duty"],
                    Flag,
                ),
                FieldSpec::new(
                    "Air freight & exp freight upto 30% claim",
                    &[
                        "Air Freight & Express Freight:",
                        "Expediting cost",
                        "air freight & express freight",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Loss Minimisation Expense",
                    &["Loss Minimization Expense:", "Loss minimisation expenses"],
                    Flag,
                ),
                FieldSpec::new(
                    "TPL with Cross Liability",
                    &["TPL with Cross Liability:", "TPL with Cross Liability"],
                    Flag,
                ),
                FieldSpec::new(
                    "Debris Removal (Incl Foreign)",
                    &["Debris Removal:", "Debris Removal limit"],
                    Flag,
                ),
                FieldSpec::new(
                    "Cessation of Works",
                    &["Cessation of Works:", "Cessation of Works"],
                    Flag,
                ),
                FieldSpec::new(
                    "Claim Preparation Costs",
                    &["Claim Preparation Costs:", "Claims preparation Cost"],
                    Flag,
                ),
                FieldSpec::new(
                    "Temporary Repair Clause",
                    &["Temporary Repair Clause:", "Temporary Repair Clause"],
                    Flag,
                ),
                FieldSpec::new(
                    "Improvement cost actual of insured property",
                    &["Improvement cost:", "Improvement cost actual of insured property"],
                    Flag,
                ),
            ],
        },
    ],
    blocks: &[],
};
