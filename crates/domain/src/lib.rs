//! Pharmacy Assistant Domain

/// Medicine catalog
pub mod medicines;

/// Symptom chat pipeline
pub mod chat;

/// Domain errors
pub mod errors;

pub use errors::Error;
