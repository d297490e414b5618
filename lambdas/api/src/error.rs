use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::chat::ChatError;

pub const PROCESSING_ERROR: &str =
    "Sorry, I'm having trouble processing your request. Please try again.";

/// HTTP-facing error with a `{"detail": ...}` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status.as_u16(), self.detail)
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        let status = match &err {
            ChatError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ChatError::EmptyMessage => StatusCode::BAD_REQUEST,
            ChatError::Generation(e) => {
                tracing::error!("Error in chat endpoint: {}", e);
                return Self::new(StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_ERROR);
            }
        };

        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "detail": self.detail })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::chat::ModelError;

    #[test]
    fn maps_chat_errors_to_status() {
        assert_eq!(
            ApiError::from(ChatError::Unavailable),
            ApiError::new(StatusCode::SERVICE_UNAVAILABLE, "AI service unavailable")
        );
        assert_eq!(
            ApiError::from(ChatError::EmptyMessage),
            ApiError::new(StatusCode::BAD_REQUEST, "Message cannot be empty")
        );
    }

    #[test]
    fn generation_errors_hide_the_cause() {
        let err = ApiError::from(ChatError::Generation(ModelError::Status {
            status: 403,
            body: "API key not valid".to_string(),
        }));

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail, PROCESSING_ERROR);
        assert!(!err.to_string().contains("API key"));
    }

    #[test]
    fn displays_status_and_detail() {
        let err = ApiError::new(StatusCode::BAD_REQUEST, "Message cannot be empty");
        assert_eq!(err.to_string(), "400: Message cannot be empty");
    }
}
