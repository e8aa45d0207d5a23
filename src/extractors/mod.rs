// src/extractors/mod.rs
pub mod block;
pub mod field;
pub mod record;
pub mod section;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use block::{BlockKind, BlockSpec};
#[allow(unused_imports)]
pub use field::{extract, CompiledProfile, ExtractionProfile, FieldGroup, FieldSpec, ValueShape};
#[allow(unused_imports)]
pub use record::{BucketValue, ExtractedRecord, Segment, INCLUDED, NOT_FOUND};
#[allow(unused_imports)]
pub use section::SectionSpec;
