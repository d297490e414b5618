use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Language model request failed: {0}")]
    Transport(String),

    #[error("Language model returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Language model returned no text")]
    EmptyResponse,

    #[error("Malformed language model response: {0}")]
    Malformed(String),
}

/// Text generation backend (allows faking in tests)
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}
