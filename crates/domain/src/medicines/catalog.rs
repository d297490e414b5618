use serde::Serialize;

use super::{matcher, MedicineRecord};

/// Immutable, ordered set of every medicine loaded at startup.
#[derive(Clone, Debug, Default, Serialize, Eq, PartialEq)]
#[serde(transparent)]
pub struct CatalogSnapshot {
    records: Vec<MedicineRecord>,
}

impl CatalogSnapshot {
    pub fn new(records: Vec<MedicineRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MedicineRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose indication shares a word with `text`, in catalog order.
    pub fn search(&self, text: &str) -> Vec<&MedicineRecord> {
        matcher::match_symptoms(text, &self.records)
    }
}
