// src/extractors/record.rs

use indexmap::IndexMap;
use serde::Serialize;

// --- Sentinels ---
/// Placeholder for a field none of whose synonyms/strategies matched.
pub const NOT_FOUND: &str = "Not Found";
/// Placeholder for a boolean-style cover whose label was found without a value.
pub const INCLUDED: &str = "Included";

/// One sub-record of a multi-line block (a warranty, an endorsement).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub title: String,
    pub content: String,
}

/// The contents of one output bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BucketValue {
    /// field name -> extracted value or sentinel
    Fields(IndexMap<String, String>),
    /// row key ("Installment 1", "Total") -> column name -> value
    Table(IndexMap<String, IndexMap<String, String>>),
    /// ordered sub-records (warranties)
    Records(Vec<Segment>),
}

/// The assembled extraction output. Created fresh per `extract` call,
/// immutable once returned. Serializes flat, the way the serving layer
/// expects it: `{"insurer": ..., "basicInfo": {...}, "warranties": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedRecord {
    pub insurer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub buckets: IndexMap<String, BucketValue>,
}

impl ExtractedRecord {
    pub fn new(insurer: &str) -> Self {
        Self {
            insurer: insurer.to_string(),
            error: None,
            buckets: IndexMap::new(),
        }
    }

    /// Bucket accessor for field-map buckets, creating the bucket on first use.
    /// Bucket kinds are fixed by the profile, which is pre-validated.
    pub(crate) fn fields_mut(&mut self, bucket: &str) -> &mut IndexMap<String, String> {
        match self
            .buckets
            .entry(bucket.to_string())
            .or_insert_with(|| BucketValue::Fields(IndexMap::new()))
        {
            BucketValue::Fields(map) => map,
            _ => unreachable!("bucket {bucket} redeclared with a different kind"),
        }
    }

    pub(crate) fn table_mut(&mut self, bucket: &str) -> &mut IndexMap<String, IndexMap<String, String>> {
        match self
            .buckets
            .entry(bucket.to_string())
            .or_insert_with(|| BucketValue::Table(IndexMap::new()))
        {
            BucketValue::Table(map) => map,
            _ => unreachable!("bucket {bucket} redeclared with a different kind"),
        }
    }

    pub(crate) fn records_mut(&mut self, bucket: &str) -> &mut Vec<Segment> {
        match self
            .buckets
            .entry(bucket.to_string())
            .or_insert_with(|| BucketValue::Records(Vec::new()))
        {
            BucketValue::Records(records) => records,
            _ => unreachable!("bucket {bucket} redeclared with a different kind"),
        }
    }

    /// Looks up a single field value. Test/consumer convenience.
    pub fn field(&self, bucket: &str, name: &str) -> Option<&str> {
        match self.buckets.get(bucket)? {
            BucketValue::Fields(map) => map.get(name).map(String::as_str),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat_with_insertion_order() {
        let mut record = ExtractedRecord::new("NIA");
        record
            .fields_mut("basicInfo")
            .insert("GSTIN".to_string(), "27AAFCL0213K1ZP".to_string());
        record.records_mut("warranties").push(Segment {
            number: Some("1".to_string()),
            title: "Escrow warranty".to_string(),
            content: "Premium shall be routed via escrow.".to_string(),
        });

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["insurer"], "NIA");
        assert_eq!(json["basicInfo"]["GSTIN"], "27AAFCL0213K1ZP");
        assert_eq!(json["warranties"][0]["title"], "Escrow warranty");
        // no error key unless a failure record
        assert!(json.get("error").is_none());
    }

    #[test]
    fn segment_number_is_omitted_when_absent() {
        let segment = Segment {
            number: None,
            title: "Section Warranty for road projects".to_string(),
            content: "It is hereby agreed...".to_string(),
        };
        let json = serde_json::to_value(&segment).unwrap();
        assert!(json.get("number").is_none());
    }
}
