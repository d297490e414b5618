/// Input DTOs
pub mod inputs;

/// Severity triage
pub mod triage;

/// Language model prompt
pub mod prompt;

/// Response shapes
pub mod response;

/// Language model abstraction
pub mod model;

/// Chat pipeline
pub mod assistant;

pub use assistant::{Assistant, ChatError};
pub use inputs::ChatRequest;
pub use model::{LanguageModel, ModelError};
pub use prompt::build_prompt;
pub use response::{assemble, ChatResponse, LegacyAnswer, MAX_SUGGESTIONS};
pub use triage::{classify, Severity};
