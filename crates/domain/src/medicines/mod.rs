/// Medicine record
pub mod medicine;

/// Catalog snapshot
pub mod catalog;

/// Symptom matcher
pub mod matcher;

/// Catalog loading
pub mod loader;

pub use catalog::CatalogSnapshot;
pub use loader::{fallback_records, load, load_or_fallback, CatalogSource};
pub use matcher::match_symptoms;
pub use medicine::MedicineRecord;
