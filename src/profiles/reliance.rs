// src/profiles/reliance.rs
//
// Reliance General schedules use block-capital headings ("NAME OF THE
// INSURED", "CAR PREMIUM") and list add-ons under a COVERAGE heading
// followed by a CLAUSES APPLICABLE list. The add-on group is scoped to
// COVERAGE with no end marker so it spans both regions.

use crate::extractors::{
    ExtractionProfile, FieldGroup, FieldSpec, SectionSpec,
    ValueShape::{Amount, Flag, Text},
};

pub const PROFILE: ExtractionProfile = ExtractionProfile {
    insurer: "Reliance",
    groups: &[
        FieldGroup {
            bucket: "basicInfo",
            section: None,
            fields: &[
                FieldSpec::new(
                    "Insured Name",
                    &["Insured Name:", "Insured Name", "NAME OF THE INSURED"],
                    Text,
                ),
                FieldSpec::new(
                    "Principal Name",
                    &["Principal Name:", "Principal Name", "NAME OF THE PRINCIPAL"],
                    Text,
                ),
                FieldSpec::new(
                    "Contractor Name",
                    &["Contractor Name:", "Contractor Name", "NAME OF THE CONTRACTOR"],
                    Text,
                ),
                FieldSpec::new(
                    "Risk Location",
                    &["Risk Location:", "Risk Location", "RISK LOCATION"],
                    Text,
                ),
                FieldSpec::new(
                    "Project Description",
                    &["Project Description:", "Project Description", "PROJECT DESCRIPTION"],
                    Text,
                ),
                FieldSpec::new(
                    "Policy Period",
                    &["Policy Period:", "Policy Period", "POLICY PERIOD"],
                    Text,
                ),
                FieldSpec::new(
                    "Sum Insured",
                    &["Sum Insured:", "Sum Insured", "SUM INSURED"],
                    Amount,
                ),
                FieldSpec::new(
                    "Premium (before tax)",
                    &["Premium before tax:", "CAR PREMIUM"],
                    Amount,
                ),
                FieldSpec::new("GST amount", &["GST amount:", "GST:", "ADD : GST @"], Amount),
                FieldSpec::new(
                    "Final Premium",
                    &["Final Premium:", "FINAL PREMIUM PAYABLE"],
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
                    &["Normal Claims:", "Normal Perils", "Normal claims"],
                    Text,
                ),
                FieldSpec::new(
                    "AOG/Testing claims",
                    &["AOG/Testing Claims:", "AOG/Major Perils", "AOG / Testing claims"],
                    Text,
                ),
                FieldSpec::new(
                    "Special deductibles",
                    &["Special Deductibles:", "Design Defect :", "Maintenance period :"],
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
                    &["Total Premium excluding GST:", "Total Premium excl GST"],
                    Amount,
                ),
                FieldSpec::new(
                    "GST @ 18%",
                    &["GST @ 18%:", "ADD : GST @", "GST amount:"],
                    Amount,
                ),
                FieldSpec::new(
                    "Total Premium incl GST",
                    &["Total Premium including GST:", "FINAL PREMIUM PAYABLE"],
                    Amount,
                ),
            ],
        },
        FieldGroup {
            bucket: "addOns",
            section: Some(SectionSpec {
                start: "COVERAGE",
                ends: &[],
            }),
            fields: &[
                FieldSpec::new("Escalation", &["Escalation:", "Escalation"], Flag),
                FieldSpec::new("Earthquake", &["Earthquake:", "Earthquake"], Flag),
                FieldSpec::new(
                    "Waiver of Subrogation",
                    &["Waiver of Subrogation:", "Waiver of subrogation"],
                    Flag,
                ),
                FieldSpec::new(
                    "Design Defect - DE3",
                    &["Design Defect:", "Design Defect cover", "Design Defect"],
                    Flag,
                ),
                FieldSpec::new(
                    "Owners Surrounding property with Flexa",
                    &["Owners surrounding property:", "Owners surrounding property"],
                    Flag,
                ),
                FieldSpec::new(
                    "Cover for offsite storage, fabrication",
                    &[
                        "Cover for offsite storage/Fabrication:",
                        "Cover for offsite storage",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Plans & Documents",
                    &["Plans & Documents:", "Cover for Valuable documents"],
                    Flag,
                ),
                FieldSpec::new("Put to Use", &["Put to Use:", "Put to use clause"], Flag),
                FieldSpec::new(
                    "Breakage of glass",
                    &["Breakage of Glass:", "Breakage of glass"],
                    Flag,
                ),
                FieldSpec::new(
                    "Multiple Insured Clause",
                    &["Multiple Insured Clause:", "Multiple insured clause"],
                    Flag,
                ),
                FieldSpec::new("50/50 Clause", &["50/50 Clause:", "50 : 50 Clause"], Flag),
                FieldSpec::new(
                    "72 Hours Clause",
                    &["72 Hours Clause:", "72 Hours Clause"],
                    Flag,
                ),
                FieldSpec::new(
                    "Free Auto. Reinstatement upto 10%",
                    &[
                        "Free Automatic Reinstatement:",
                        "Free Automatic Reinstatement of SI",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Professional Fees",
                    &["Professional Fees:", "Professional Fees"],
                    Flag,
                ),
                FieldSpec::new(
                    "Waiver of contribution clause",
                    &["Waiver of Contribution Clause:", "Waiver of Contribution"],
                    Flag,
                ),
                FieldSpec::new(
                    "Additional custom duty - upto 10 Cr",
                    &[
                        "Additional Custom Duty:",
                        "Additional Custom Duty",
                        "Aditional Customs Duty",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Air freight & exp freight upto 30% claim",
                    &[
                        "Air Freight & Express Freight:",
                        "Expediting cost including Air",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Loss Minimisation Expense",
                    &["Loss Minimization Expense:", "Loss Minimization expenses"],
                    Flag,
                ),
                FieldSpec::new(
                    "TPL with Cross Liability",
                    &[
                        "TPL with Cross Liability:",
                        "Third Party Libaility including Cross Liability",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Debris Removal (Incl Foreign)",
                    &["Debris Removal:", "Debris removal"],
                    Flag,
                ),
                FieldSpec::new(
                    "Cessation of Works",
                    &["Cessation of Works:", "Cessation of works"],
                    Flag,
                ),
                FieldSpec::new(
                    "Claim Preparation Costs",
                    &["Claim Preparation Costs:", "Claim Preparation clause"],
                    Flag,
                ),
                FieldSpec::new(
                    "Temporary Repair Clause",
                    &["Temporary Repair Clause:", "Temporary Repair Clause"],
                    Flag,
                ),
                FieldSpec::new(
                    "Improvement cost actual of insured property",
                    &["Improvement cost:", "Improvement cost actual"],
                    Flag,
                ),
            ],
        },
    ],
    blocks: &[],
};
