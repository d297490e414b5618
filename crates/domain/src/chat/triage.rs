use serde::Serialize;

/// Phrases that mark a message as needing a doctor.
///
/// Matched as plain substrings of the lower-cased message, so "bloodshot"
/// counts as "blood".
pub const SERIOUS_SYMPTOMS: &[&str] = &[
    "chest pain",
    "difficulty breathing",
    "severe pain",
    "bleeding",
    "unconscious",
    "seizure",
    "stroke",
    "heart attack",
    "suicide",
    "emergency",
    "cant breathe",
    "blood",
    "broken bone",
];

#[derive(Clone, Copy, Debug, Default, Serialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Mild,
    Severe,
}

impl Severity {
    pub fn is_severe(self) -> bool {
        self == Severity::Severe
    }
}

pub fn classify(text: &str) -> Severity {
    let text = text.to_lowercase();

    if SERIOUS_SYMPTOMS.iter().any(|phrase| text.contains(phrase)) {
        Severity::Severe
    } else {
        Severity::Mild
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chest_pain_is_severe() {
        assert_eq!(classify("I have chest pain"), Severity::Severe);
    }

    #[test]
    fn mild_headache_is_mild() {
        assert_eq!(classify("I have a mild headache"), Severity::Mild);
    }

    #[test]
    fn bloodshot_matches_blood() {
        assert_eq!(classify("my eyes look bloodshot"), Severity::Severe);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("HEART ATTACK symptoms"), Severity::Severe);
        assert_eq!(classify("I Cant Breathe"), Severity::Severe);
    }

    #[test]
    fn phrases_must_be_contiguous() {
        assert_eq!(classify("pain in my chest"), Severity::Mild);
        assert_eq!(classify("can't breathe"), Severity::Mild);
    }

    #[test]
    fn every_phrase_is_severe_on_its_own() {
        for phrase in SERIOUS_SYMPTOMS {
            assert!(classify(phrase).is_severe(), "{phrase}");
        }
    }

    #[test]
    fn empty_text_is_mild() {
        assert_eq!(classify(""), Severity::Mild);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Severe).unwrap(), r#""severe""#);
    }
}
