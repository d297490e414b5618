use crate::medicines::MedicineRecord;

const PERSONA: &str = "You are a helpful pharmacy AI assistant. Be friendly and concise.";

const NO_MATCHES: &str = "No specific matches found";

const INSTRUCTIONS: &str = "\
Instructions:
1. If symptoms are serious (chest pain, difficulty breathing, severe injuries, etc.) → Tell user to seek immediate medical help
2. For mild symptoms → Suggest appropriate OTC medicine from the list
3. Always include dosage and warnings
4. Keep response SHORT (2-3 sentences max)
5. Be empathetic and helpful";

const RESPONSE_FORMAT: &str = "\
Response format:
[Your suggestion here]

Medicine: [Name if applicable]
Dose: [Dosage if applicable]
⚠️ Warning: [Warning if applicable]
";

/// Builds the language model prompt from the user's message and the full
/// list of matched medicines.
pub fn build_prompt(text: &str, matches: &[&MedicineRecord]) -> String {
    format!(
        "{PERSONA}\n\n\
         User says: \"{text}\"\n\n\
         Available OTC medicines in our database:\n\
         {medicines}\n\n\
         {INSTRUCTIONS}\n\n\
         {RESPONSE_FORMAT}",
        medicines = describe_matches(matches),
    )
}

fn describe_matches(matches: &[&MedicineRecord]) -> String {
    if matches.is_empty() {
        return NO_MATCHES.to_string();
    }

    // Serializing plain string fields cannot fail
    serde_json::to_string_pretty(matches).unwrap_or_else(|_| NO_MATCHES.to_string())
}
