use std::collections::HashSet;

use super::MedicineRecord;

/// Returns every record whose indication text shares at least one
/// lower-cased whitespace-separated word with `text`.
///
/// Records keep their catalog order. There is no scoring: a single shared
/// word is enough, and punctuation is part of the word.
pub fn match_symptoms<'a>(text: &str, records: &'a [MedicineRecord]) -> Vec<&'a MedicineRecord> {
    let text = text.to_lowercase();
    let symptom_words = tokenize(&text);

    if symptom_words.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| {
            let indication = record.indication.to_lowercase();
            !tokenize(&indication).is_disjoint(&symptom_words)
        })
        .collect()
}

fn tokenize(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}
