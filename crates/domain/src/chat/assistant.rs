use std::sync::Arc;

use thiserror::Error;

use crate::medicines::CatalogSnapshot;

use super::{
    build_prompt, classify, response, ChatRequest, ChatResponse, LanguageModel, ModelError,
};

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("AI service unavailable")]
    Unavailable,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error(transparent)]
    Generation(#[from] ModelError),
}

/// Symptom chat pipeline: match, triage, prompt, generate, assemble.
#[derive(Clone)]
pub struct Assistant {
    catalog: Arc<CatalogSnapshot>,
    model: Option<Arc<dyn LanguageModel>>,
}

impl Assistant {
    pub fn new(catalog: Arc<CatalogSnapshot>, model: Option<Arc<dyn LanguageModel>>) -> Self {
        Self { catalog, model }
    }

    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let model = self.model.as_ref().ok_or(ChatError::Unavailable)?;

        if request.is_blank() {
            return Err(ChatError::EmptyMessage);
        }

        let matches = self.catalog.search(&request.text);
        let severity = classify(&request.text);

        tracing::debug!("{} medicines matched, severity {:?}", matches.len(), severity);

        let prompt = build_prompt(&request.text, &matches);
        let output = model.generate(&prompt).await?;

        if output.trim().is_empty() {
            return Err(ModelError::EmptyResponse.into());
        }

        Ok(response::assemble(&output, &matches, severity.is_severe()))
    }
}
