use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::medicines::MedicineRecord;

/// Upper bound on medicines suggested in a chat reply
pub const MAX_SUGGESTIONS: usize = 3;

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct ChatResponse {
    pub answer: String,
    pub suggested_medicines: Vec<MedicineRecord>,
    pub should_see_doctor: bool,
    /// ISO-8601, UTC
    pub timestamp: String,
}

/// Reduced reply of the legacy `/ask` endpoint
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct LegacyAnswer {
    pub answer: String,
}

impl From<ChatResponse> for LegacyAnswer {
    fn from(response: ChatResponse) -> Self {
        Self {
            answer: response.answer,
        }
    }
}

pub fn assemble(model_output: &str, matches: &[&MedicineRecord], severe: bool) -> ChatResponse {
    assemble_at(model_output, matches, severe, Utc::now())
}

pub fn assemble_at(
    model_output: &str,
    matches: &[&MedicineRecord],
    severe: bool,
    now: DateTime<Utc>,
) -> ChatResponse {
    ChatResponse {
        answer: model_output.trim().to_string(),
        suggested_medicines: matches
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|&record| record.clone())
            .collect(),
        should_see_doctor: severe,
        timestamp: now.to_rfc3339_opts(SecondsFormat::Micros, true),
    }
}
