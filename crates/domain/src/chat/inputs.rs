use serde::{Deserialize, Deserializer, Serialize};

pub const ANONYMOUS_USER: &str = "anonymous";

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct ChatRequest {
    pub text: String,

    /// Carried for future use, never consulted
    #[serde(default = "anonymous", deserialize_with = "user_id_or_anonymous")]
    pub user_id: String,
}

impl ChatRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user_id: anonymous(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

fn anonymous() -> String {
    ANONYMOUS_USER.to_string()
}

/// `null` reads the same as an omitted field
fn user_id_or_anonymous<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(anonymous))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_defaults_to_anonymous() {
        let request: ChatRequest = serde_json::from_str(r#"{"text": "headache"}"#).unwrap();
        assert_eq!(request.text, "headache");
        assert_eq!(request.user_id, ANONYMOUS_USER);
    }

    #[test]
    fn user_id_is_kept_when_given() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"text": "cold", "user_id": "widget-42"}"#).unwrap();
        assert_eq!(request.user_id, "widget-42");
    }

    #[test]
    fn null_user_id_is_anonymous() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"text": "fever", "user_id": null}"#).unwrap();
        assert_eq!(request.text, "fever");
        assert_eq!(request.user_id, ANONYMOUS_USER);
    }

    #[test]
    fn non_string_user_id_is_rejected() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"text": "fever", "user_id": 7}"#).is_err());
    }

    #[test]
    fn whitespace_only_text_is_blank() {
        assert!(ChatRequest::new("").is_blank());
        assert!(ChatRequest::new(" \n\t ").is_blank());
        assert!(!ChatRequest::new(" fever ").is_blank());
    }
}
