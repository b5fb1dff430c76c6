use std::{path::PathBuf, time::Duration};

use clap::{Args as ClapArgs, Parser, ValueEnum};
use sinu_core::domain::common::{IngredientDatabaseConfig, LLMConfig, LLMProvider, SinuConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "sinu-api", version, about = "SINU ingredient checker API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub ingredients: IngredientArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "tls-cert-path", env = "TLS_CERT_PATH", requires = "tls_key_path")]
    pub tls_cert_path: Option<PathBuf>,

    #[arg(long = "tls-key-path", env = "TLS_KEY_PATH", requires = "tls_cert_path")]
    pub tls_key_path: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct IngredientArgs {
    #[arg(
        long = "ingredient-csv-path",
        env = "INGREDIENT_CSV_PATH",
        default_value = "acne_ingredients_with_concern.csv"
    )]
    pub csv_path: PathBuf,

    /// Expose `POST /api/ingredients/reload`. Leave off unless the server is operator-only.
    #[arg(
        long = "ingredient-reload-enabled",
        env = "INGREDIENT_RELOAD_ENABLED",
        default_value_t = false
    )]
    pub reload_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmProviderArg {
    Openai,
    Gemini,
}

impl From<LlmProviderArg> for LLMProvider {
    fn from(value: LlmProviderArg) -> Self {
        match value {
            LlmProviderArg::Openai => LLMProvider::OpenAi,
            LlmProviderArg::Gemini => LLMProvider::Gemini,
        }
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", value_enum, default_value = "openai")]
    pub provider: LlmProviderArg,

    #[arg(long = "llm-api-key", env = "LLM_API_KEY", hide_env_values = true, default_value = "")]
    pub api_key: String,

    #[arg(long = "llm-model", env = "LLM_MODEL")]
    pub model: Option<String>,

    #[arg(long = "llm-base-url", env = "LLM_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl LlmArgs {
    /// The configured key, falling back to `OPENAI_API_KEY` for the OpenAI provider
    pub fn resolved_api_key(&self) -> String {
        if !self.api_key.is_empty() || self.provider != LlmProviderArg::Openai {
            return self.api_key.clone();
        }

        std::env::var("OPENAI_API_KEY").unwrap_or_default()
    }
}

impl From<Args> for SinuConfig {
    fn from(args: Args) -> Self {
        Self {
            ingredients: IngredientDatabaseConfig {
                csv_path: args.ingredients.csv_path,
            },
            llm: LLMConfig {
                provider: args.llm.provider.into(),
                api_key: args.llm.resolved_api_key(),
                model: args.llm.model,
                base_url: args.llm.base_url,
                timeout: Duration::from_secs(args.llm.timeout_secs),
            },
        }
    }
}
