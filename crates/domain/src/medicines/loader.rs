use std::{fs, io, path::Path};

use crate::errors::Error;

use super::{CatalogSnapshot, MedicineRecord};

/// Where the live catalog came from
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CatalogSource {
    /// Parsed from the catalog file
    File,
    /// Catalog file missing, built-in records used
    Fallback,
    /// Catalog file unreadable or malformed
    Empty,
}

/// Built-in records used when no catalog file exists.
pub fn fallback_records() -> Vec<MedicineRecord> {
    vec![
        MedicineRecord::new(
            "Paracetamol",
            "fever headache pain body ache",
            "500mg every 6 hours",
            "Max 4 per day. Avoid alcohol.",
        ),
        MedicineRecord::new(
            "Cetirizine",
            "allergy cold sneezing runny nose",
            "10mg once daily",
            "May cause drowsiness",
        ),
        MedicineRecord::new(
            "ORS",
            "dehydration diarrhea vomiting",
            "1 sachet in water",
            "Drink slowly",
        ),
    ]
}

/// Reads a JSON array of medicine records.
pub fn load(path: &Path) -> Result<CatalogSnapshot, Error> {
    let data = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::CatalogMissing {
            path: path.to_path_buf(),
        },
        _ => Error::CatalogIo {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let records: Vec<MedicineRecord> =
        serde_json::from_str(&data).map_err(|source| Error::CatalogParse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(CatalogSnapshot::new(records))
}

/// Loads the catalog without ever failing.
///
/// A missing file yields the built-in records, any other error an empty
/// catalog.
pub fn load_or_fallback(path: &Path) -> (CatalogSnapshot, CatalogSource) {
    match load(path) {
        Ok(catalog) => {
            tracing::info!("Loaded {} medicines from {}", catalog.len(), path.display());
            (catalog, CatalogSource::File)
        }
        Err(Error::CatalogMissing { .. }) => {
            tracing::warn!("{} not found, using default data", path.display());
            (
                CatalogSnapshot::new(fallback_records()),
                CatalogSource::Fallback,
            )
        }
        Err(e) => {
            tracing::error!("Error loading medicines: {}", e);
            (CatalogSnapshot::default(), CatalogSource::Empty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn fallback_has_three_records() {
        let records = fallback_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Paracetamol");
        assert_eq!(records[0].dosage, "500mg every 6 hours");
        assert_eq!(records[1].warning, "May cause drowsiness");
        assert_eq!(records[2].indication, "dehydration diarrhea vomiting");
    }

    #[test]
    fn loads_records_from_file() {
        let file = write_catalog(
            r#"[
                {"medicine": "Ibuprofen", "use": "pain inflammation", "dose": "200mg", "warning": "Take with food"},
                {"medicine": "Loperamide", "use": "diarrhea", "dose": "2mg", "warning": "Not for children"}
            ]"#,
        );

        let (catalog, source) = load_or_fallback(file.path());

        assert_eq!(source, CatalogSource::File);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].name, "Ibuprofen");
        assert_eq!(catalog.records()[1].indication, "diarrhea");
    }

    #[test]
    fn empty_array_is_a_valid_catalog() {
        let file = write_catalog("[]");
        let (catalog, source) = load_or_fallback(file.path());
        assert_eq!(source, CatalogSource::File);
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medicines.json");

        assert!(matches!(load(&path), Err(Error::CatalogMissing { .. })));

        let (catalog, source) = load_or_fallback(&path);
        assert_eq!(source, CatalogSource::Fallback);
        assert_eq!(catalog.records(), fallback_records().as_slice());
    }

    #[test]
    fn malformed_file_yields_empty_catalog() {
        let file = write_catalog(r#"[{"medicine": "Aspirin"}]"#);

        assert!(matches!(load(file.path()), Err(Error::CatalogParse { .. })));

        let (catalog, source) = load_or_fallback(file.path());
        assert_eq!(source, CatalogSource::Empty);
        assert!(catalog.is_empty());
    }

    #[test]
    fn directory_path_yields_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let (catalog, source) = load_or_fallback(dir.path());
        assert_eq!(source, CatalogSource::Empty);
        assert!(catalog.is_empty());
    }
}
