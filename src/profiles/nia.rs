// src/profiles/nia.rs
//
// New India Assurance CAR policy terms. Labels lean on the block-capital
// schedule headings NIA uses ("EXCESS FOR ...", "SUM INSURED", premium table
// rows), with colon-suffixed synonyms for the prose renderings.

use crate::extractors::{
    BlockKind, BlockSpec, ExtractionProfile, FieldGroup, FieldSpec, SectionSpec,
    ValueShape::{Amount, Flag, Text},
};

pub const PROFILE: ExtractionProfile = ExtractionProfile {
    insurer: "NIA",
    groups: &[
        FieldGroup {
            bucket: "basicInfo",
            section: None,
            fields: &[
                FieldSpec::new(
                    "Insured/Principal Name",
                    &[
                        "Insured Name:",
                        "NAME & ADDRESS OF THE PRINCIPAL",
                        "Principal Name:",
                        "Principal:",
                    ],
                    Text,
                ),
                FieldSpec::new(
                    "Contractor Name",
                    &[
                        "Contractor Name:",
                        "NAME & ADDRESS OF THE CONTRACTOR",
                        "Contractor:",
                    ],
                    Text,
                ),
                FieldSpec::new("GSTIN", &["GSTIN:", "GSTIN"], Text),
                FieldSpec::new(
                    "Job Number",
                    &["Job Number:", "JOB NUMBER", "Project Code:", "Job No.:"],
                    Text,
                ),
                FieldSpec::new(
                    "Job Description",
                    &["Job Description:", "JOB DESCRIPTION", "Project Description:"],
                    Text,
                ),
                FieldSpec::new(
                    "Scope",
                    &["Scope:", "SCOPE", "Scope of Work:", "Scope of works include:"],
                    Text,
                ),
                FieldSpec::new(
                    "Location",
                    &["Location:", "LOCATION", "Risk Location:", "Site Location:"],
                    Text,
                ),
                FieldSpec::new(
                    "Project Period",
                    &["Project Period:", "PROJECT PERIOD", "Policy Period:"],
                    Text,
                ),
                FieldSpec::new(
                    "Extended Maintenance",
                    &[
                        "Extended Maintenance Cover:",
                        "EXTENDED MAINTENANCE COVER",
                        "Maintenance Period:",
                    ],
                    Text,
                ),
            ],
        },
        FieldGroup {
            bucket: "excess",
            section: None,
            fields: &[
                FieldSpec::new(
                    "Normal Period Claims",
                    &[
                        "EXCESS FOR NORMAL PERIOD CLAIMS",
                        "Normal Period Claims:",
                        "Normal Period Claims",
                    ],
                    Text,
                ),
                FieldSpec::new(
                    "Maintenance/AOG Claims",
                    &[
                        "EXCESS FOR MAINTENANCE PERIOD CLAIMS/AOG /MAJOR PERILS",
                        "Maintenance Period Claims:",
                        "AOG Claims:",
                    ],
                    Text,
                ),
                FieldSpec::new(
                    "Design Defects",
                    &[
                        "EXCESS FOR DESIGN DEFECTS COVER DE-3",
                        "Design Defects Cover:",
                        "Design Defect Excess:",
                    ],
                    Text,
                ),
                FieldSpec::new(
                    "Terrorism",
                    &["EXCESS FOR TERRORISM", "Terrorism Excess:", "Terrorism:"],
                    Text,
                ),
                FieldSpec::new("Glass", &["EXCESS FOR GLASS", "Glass Excess:", "Glass:"], Text),
            ],
        },
        FieldGroup {
            bucket: "sumInsured",
            section: None,
            fields: &[
                FieldSpec::new(
                    "Contract Price",
                    &["Contract Price", "Contract Price of", "Contract Value:"],
                    Amount,
                ),
                FieldSpec::new(
                    "Additional Sum",
                    &["Additional sum to cover", "Additional sum", "Additional exposure:"],
                    Amount,
                ),
                FieldSpec::new(
                    "Materials by Principal",
                    &[
                        "Materials or items supplied by the Principal",
                        "Principal Materials:",
                        "Principal Supplied Materials:",
                    ],
                    Amount,
                ),
                FieldSpec::new(
                    "Temporary Works",
                    &[
                        "All kind of temporary works",
                        "Temporary works:",
                        "Temporary structures:",
                    ],
                    Amount,
                ),
                FieldSpec::new(
                    "Office Furniture",
                    &[
                        "Office furniture, fixtures",
                        "Office equipment:",
                        "Furniture & fixtures:",
                    ],
                    Amount,
                ),
                FieldSpec::new(
                    "Contractor Materials",
                    &[
                        "Contractor's own materials",
                        "Contractor materials:",
                        "Contractor consumables:",
                    ],
                    Amount,
                ),
                FieldSpec::new(
                    "Tools & Tackles",
                    &[
                        "Contractor's Tools & tackles",
                        "Tools & tackles:",
                        "Small tools:",
                    ],
                    Amount,
                ),
                FieldSpec::new(
                    "Total Project Value",
                    &[
                        "TOTAL PROJECT VALUE",
                        "Total Sum Insured:",
                        "Total Project Value:",
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
                    "Extended Maintenance",
                    &[
                        "EXTENDED MAINTENANCE COVER",
                        "Extended Maintenance Cover:",
                        "Maintenance Period:",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Debris Removal",
                    &[
                        "CLEARANCE & REMOVAL OF DEBRIS",
                        "Debris Removal:",
                        "Removal of Debris:",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Third Party Liability",
                    &["THIRD PARTY LIABILITY", "TPL:", "Third Party:"],
                    Flag,
                ),
                FieldSpec::new("Escalation", &["ESCALATION", "Escalation:", "Escalation limit:"], Flag),
                FieldSpec::new("Earthquake", &["EARTHQUAKE", "Earthquake Zone:", "EQ Cover:"], Flag),
                FieldSpec::new("STFI", &["STFI", "STFI Cover:", "Storm & Flood:"], Flag),
                FieldSpec::new(
                    "Waiver of Subrogation",
                    &[
                        "WAIVER OF SUBROGATION",
                        "Waiver of Subrogation:",
                        "Subrogation waiver:",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Design Defect",
                    &["DESIGN DEFECT", "Design Defect Cover:", "DE3 Cover:"],
                    Flag,
                ),
                FieldSpec::new(
                    "Owners Surrounding Property",
                    &[
                        "OWNERS SURROUNDING PROPERTY",
                        "Surrounding Property:",
                        "OSP Cover:",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Offsite Storage",
                    &["COVER FOR OFFSITE STORAGE", "Offsite Storage:", "Storage Cover:"],
                    Flag,
                ),
                FieldSpec::new(
                    "Internal Shifting",
                    &["COVER FOR INTERNAL SHIFTING", "Internal Shifting:", "Shifting Cover:"],
                    Flag,
                ),
                FieldSpec::new(
                    "Plans and Documents",
                    &["PLANS AND DOCUMENTS", "Plans & Documents:", "Document Cover:"],
                    Flag,
                ),
                FieldSpec::new("Put to Use", &["PUT TO USE", "Put to Use Clause:", "PtU Cover:"], Flag),
                FieldSpec::new(
                    "Multiple Insured",
                    &["MULTIPLE INSURED CLAUSE", "Multiple Insured:", "Multiple Insureds:"],
                    Flag,
                ),
                FieldSpec::new(
                    "Principal & Contractor",
                    &[
                        "PRINCIPAL & CONTRACTOR",
                        "Principal as Insured:",
                        "Named Insureds:",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "50/50 Clause",
                    &["50 / 50 CLAUSE", "50/50 Clause:", "50:50 Clause:"],
                    Flag,
                ),
                FieldSpec::new(
                    "72 Hours Clause",
                    &["72 HRS CLAUSE", "72 Hours Clause:", "72hr Clause:"],
                    Flag,
                ),
                FieldSpec::new(
                    "Free Reinstatement",
                    &[
                        "FREE AUTOMATIC RE-INSTATEMENT",
                        "Reinstatement:",
                        "Auto Reinstatement:",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Professional Fees",
                    &["PROFESSIONAL FEES", "Professional Fees:", "Prof Fees:"],
                    Flag,
                ),
                FieldSpec::new(
                    "Contribution Clause",
                    &[
                        "WAIVER OF CONTRIBUTION CLAUSE",
                        "Contribution Waiver:",
                        "Non-Contribution:",
                    ],
                    Flag,
                ),
                FieldSpec::new(
                    "Custom Duty",
                    &["ADDITIONAL CUSTOM DUTY", "Custom Duty:", "Duty Cover:"],
                    Flag,
                ),
                FieldSpec::new(
                    "Expediting Cost",
                    &["EXPEDITING COST", "Air Freight:", "Express Freight:"],
                    Flag,
                ),
                FieldSpec::new(
                    "Loss Minimisation",
                    &["LOSS MINIMISATION EXPENSES", "Loss Minimization:", "Loss Min:"],
                    Flag,
                ),
                FieldSpec::new(
                    "Co-Insurance",
                    &["CO-INSURANCE CLAUSE", "Co-Insurance:", "Coinsurance:"],
                    Flag,
                ),
                FieldSpec::new(
                    "Breakage of Glass",
                    &["BREAKAGE OF GLASS", "Glass Cover:", "Glass:"],
                    Flag,
                ),
                FieldSpec::new(
                    "Cessation of Works",
                    &["CESSATION OF WORKS", "Cessation:", "Works Cessation:"],
                    Flag,
                ),
                FieldSpec::new(
                    "Claim Preparation",
                    &["CLAIM PREPARATION COST", "Claim Prep:", "Preparation Costs:"],
                    Flag,
                ),
                FieldSpec::new("Terrorism", &["TERRORISM", "Terrorism Cover:", "RSMD:"], Flag),
                FieldSpec::new(
                    "Public Authorities",
                    &["PUBLIC AUTHORITIES CLAUSE", "Public Auth:", "Authorities:"],
                    Flag,
                ),
                FieldSpec::new(
                    "Temporary Repair",
                    &["TEMPORARY REPAIR CLAUSE", "Temp Repair:", "Emergency Repairs:"],
                    Flag,
                ),
                FieldSpec::new(
                    "Improvement Cost",
                    &["IMPROVEMENT COST", "Improvement:", "Betterment:"],
                    Flag,
                ),
            ],
        },
        FieldGroup {
            bucket: "premium",
            section: None,
            fields: &[
                FieldSpec::new(
                    "Building Type",
                    &["RATED AS", "Building Type:", "Structure Type:"],
                    Text,
                ),
                FieldSpec::new("CAR Premium", &["CAR", "Base Premium:", "CAR Premium:"], Amount),
                FieldSpec::new(
                    "Earthquake Premium",
                    &["EARTHQUAKE", "EQ Premium:", "Earthquake:"],
                    Amount,
                ),
                FieldSpec::new("STFI Premium", &["STFI", "STFI Premium:", "STFI:"], Amount),
                FieldSpec::new(
                    "Breakage of Glass Premium",
                    &["BREAKAGE OF GLASS", "Glass Premium:", "Glass:"],
                    Amount,
                ),
                FieldSpec::new(
                    "Premium Including EQ & STFI",
                    &[
                        "PREMIUM INCL EQ & STFI",
                        "Total Premium before GST:",
                        "Net Premium:",
                    ],
                    Amount,
                ),
                FieldSpec::new("GST", &["GST @", "GST Amount:", "Tax:"], Amount),
                FieldSpec::new(
                    "Net Premium",
                    &["NET CAR PREMIUM", "Final Premium:", "Total Premium:"],
                    Amount,
                ),
                FieldSpec::new(
                    "Total Premium",
                    &["TOTAL CAR PREMIUM", "Gross Premium:", "Premium with GST:"],
                    Amount,
                ),
            ],
        },
    ],
    blocks: &[
        BlockSpec {
            bucket: "specialConditions",
            region: SectionSpec {
                start: "WARRANTIES:",
                ends: &["NOTE:"],
            },
            kind: BlockKind::FreeText { field: "Warranties" },
        },
        BlockSpec {
            bucket: "specialConditions",
            region: SectionSpec {
                start: "Subject to the below endorsements:",
                ends: &["Page"],
            },
            kind: BlockKind::FreeText { field: "Endorsements" },
        },
        BlockSpec {
            bucket: "specialConditions",
            region: SectionSpec {
                start: "Subject to:",
                ends: &["Page"],
            },
            kind: BlockKind::FreeText {
                field: "Other Conditions",
            },
        },
    ],
};
