use std::{path::PathBuf, time::Duration};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct SinuConfig {
    pub ingredients: IngredientDatabaseConfig,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct IngredientDatabaseConfig {
    pub csv_path: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LLMProvider {
    OpenAi,
    Gemini,
}

impl LLMProvider {
    pub fn default_model(&self) -> &'static str {
        match self {
            LLMProvider::OpenAi => "gpt-4o-mini",
            LLMProvider::Gemini => "gemini-2.0-flash",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            LLMProvider::OpenAi => "https://api.openai.com/v1",
            LLMProvider::Gemini => "https://generativelanguage.googleapis.com/v1beta",
        }
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub provider: LLMProvider,
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl LLMConfig {
    pub fn model(&self) -> String {
        self.model
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| self.provider.default_model().to_string())
    }

    pub fn base_url(&self) -> String {
        self.base_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(self.provider.default_base_url())
            .trim_end_matches('/')
            .to_string()
    }
}

/// Lowercases and trims an ingredient name so it can be used as a lookup key
pub fn normalize_ingredient_name(name: &str) -> String {
    name.trim().to_lowercase()
}
