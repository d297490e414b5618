use derive_new::new;
use serde::{Deserialize, Serialize};

/// One over-the-counter medicine in the catalog.
///
/// Field names on the wire follow the catalog file format
/// (`medicine`, `use`, `dose`, `warning`).
#[derive(new, Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct MedicineRecord {
    #[new(into)]
    #[serde(rename = "medicine")]
    pub name: String,

    /// Free-form list of symptoms the medicine treats
    #[new(into)]
    #[serde(rename = "use")]
    pub indication: String,

    #[new(into)]
    #[serde(rename = "dose")]
    pub dosage: String,

    #[new(into)]
    pub warning: String,
}
