use std::{env, path::PathBuf};

use anyhow::{bail, Context};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MEDICINES_FILE: &str = "medicines.json";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8001";

/// Process configuration, read once at startup
#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub medicines_file: PathBuf,
    pub addr: String,
    /// Running inside the AWS Lambda runtime
    pub lambda: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_key = lookup("GOOGLE_API_KEY")
            .context("GOOGLE_API_KEY must be set to reach the language model")?;
        if api_key.trim().is_empty() {
            bail!("GOOGLE_API_KEY is set but empty");
        }

        Ok(Self {
            api_key,
            model: lookup("GEMINI_MODEL").unwrap_or(DEFAULT_MODEL.to_string()),
            base_url: lookup("GEMINI_BASE_URL").unwrap_or(DEFAULT_BASE_URL.to_string()),
            medicines_file: lookup("MEDICINES_FILE")
                .unwrap_or(DEFAULT_MEDICINES_FILE.to_string())
                .into(),
            addr: lookup("API_ADDR").unwrap_or(DEFAULT_ADDR.to_string()),
            lambda: lookup("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}
