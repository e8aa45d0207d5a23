// src/profiles/mod.rs
//
// Registry of the supported insurer profiles. Each profile is declared as
// `const` data in its own module and compiled once, lazily, on first lookup.

mod bajaj;
mod icici;
mod nia;
mod reliance;
mod uiic;

use once_cell::sync::Lazy;

use crate::extractors::CompiledProfile;

static NIA: Lazy<CompiledProfile> = Lazy::new(|| CompiledProfile::compile(&nia::PROFILE));
static UIIC: Lazy<CompiledProfile> = Lazy::new(|| CompiledProfile::compile(&uiic::PROFILE));
static ICICI: Lazy<CompiledProfile> = Lazy::new(|| CompiledProfile::compile(&icici::PROFILE));
static RELIANCE: Lazy<CompiledProfile> =
    Lazy::new(|| CompiledProfile::compile(&reliance::PROFILE));
static BAJAJ: Lazy<CompiledProfile> = Lazy::new(|| CompiledProfile::compile(&bajaj::PROFILE));

/// Looks up a compiled profile by insurer key. Keys are matched
/// case-insensitively and accept a few common aliases.
pub fn for_insurer(name: &str) -> Option<&'static CompiledProfile> {
    match name.trim().to_lowercase().as_str() {
        "nia" | "new-india" | "new india" => Some(&NIA),
        "uiic" | "united-india" | "united india" => Some(&UIIC),
        "icici" | "icici-lombard" | "icici lombard" => Some(&ICICI),
        "reliance" => Some(&RELIANCE),
        "bajaj" | "bajaj-allianz" | "bajaj allianz" => Some(&BAJAJ),
        _ => None,
    }
}

/// Canonical keys accepted by `for_insurer`, for CLI help and error messages.
pub fn known_insurers() -> &'static [&'static str] {
    &["nia", "uiic", "icici", "reliance", "bajaj"]
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::{extract, BucketValue, NOT_FOUND};

    #[test]
    fn all_profiles_compile() {
        for &key in known_insurers() {
            assert!(for_insurer(key).is_some(), "profile {key} missing");
        }
    }

    #[test]
    fn lookup_accepts_aliases_and_case() {
        assert!(for_insurer("New-India").is_some());
        assert!(for_insurer("  BAJAJ ").is_some());
        assert!(for_insurer("united india").is_some());
        assert!(for_insurer("oriental").is_none());
    }

    // Every declared field must surface even when the document is empty.
    #[test]
    fn empty_document_yields_full_schema() {
        for &key in known_insurers() {
            let profile = for_insurer(key).unwrap();
            let record = extract("", profile);
            assert!(record.error.is_none());
            for (bucket, value) in &record.buckets {
                match value {
                    BucketValue::Fields(fields) => {
                        assert!(!fields.is_empty(), "{key}/{bucket} has no fields");
                        for (name, v) in fields {
                            assert_eq!(v, NOT_FOUND, "{key}/{bucket}/{name}");
                        }
                    }
                    BucketValue::Table(rows) => assert!(rows.is_empty()),
                    BucketValue::Records(recs) => assert!(recs.is_empty()),
                }
            }
        }
    }
}
