// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::extractors::ExtractedRecord;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Saves an extracted record as pretty-printed JSON under
    /// `<base_dir>/<INSURER>/<stem>_extract.json`, wrapped with extraction
    /// metadata.
    pub fn save_record(
        &self,
        record: &ExtractedRecord,
        source_document: &str,
        stem: &str,
    ) -> Result<PathBuf, StorageError> {
        let target_dir = self.base_dir.join(insurer_dir(&record.insurer));

        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }

        let file_path = target_dir.join(format!("{stem}_extract.json"));

        let wrapper = serde_json::json!({
            "insurer": record.insurer,
            "source_document": source_document,
            "extracted_at": chrono::Utc::now().to_rfc3339(),
            "data": record,
        });

        let body = serde_json::to_string_pretty(&wrapper)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, body).map_err(StorageError::IoError)?;

        tracing::info!("Saved extraction to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves the raw normalized text next to the extraction for debugging.
    pub fn save_raw_text(
        &self,
        record: &ExtractedRecord,
        stem: &str,
        text: &str,
    ) -> Result<PathBuf, StorageError> {
        let target_dir = self.base_dir.join(insurer_dir(&record.insurer)).join("debug");

        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }

        let file_path = target_dir.join(format!("{stem}_raw.txt"));
        fs::write(&file_path, text).map_err(StorageError::IoError)?;

        tracing::info!("Saved raw text to {}", file_path.display());

        Ok(file_path)
    }
}

// Directory name derived from the insurer display name, e.g.
// "United India Insurance" -> "UNITED_INDIA_INSURANCE".
fn insurer_dir(insurer: &str) -> String {
    insurer
        .trim()
        .to_uppercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::ExtractedRecord;

    #[test]
    fn save_record_writes_wrapped_json() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        let mut record = ExtractedRecord::new("ICICI");
        record
            .fields_mut("basicInfo")
            .insert("Insured Name".to_string(), "Acme Infra".to_string());

        let path = storage
            .save_record(&record, "quote.txt", "quote")
            .unwrap();
        assert_eq!(path, dir.path().join("ICICI").join("quote_extract.json"));

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["insurer"], "ICICI");
        assert_eq!(parsed["source_document"], "quote.txt");
        assert_eq!(parsed["data"]["basicInfo"]["Insured Name"], "Acme Infra");
        assert!(parsed["extracted_at"].is_string());
    }

    #[test]
    fn insurer_dir_is_filesystem_safe() {
        assert_eq!(insurer_dir("United India Insurance"), "UNITED_INDIA_INSURANCE");
        assert_eq!(insurer_dir("Bajaj Allianz"), "BAJAJ_ALLIANZ");
    }

    #[test]
    fn save_raw_text_lands_in_debug_subdir() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        let record = ExtractedRecord::new("NIA");

        let path = storage.save_raw_text(&record, "quote", "raw body").unwrap();
        assert_eq!(path, dir.path().join("NIA").join("debug").join("quote_raw.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "raw body");
    }
}
