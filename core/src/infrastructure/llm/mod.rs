use std::time::Duration;

use reqwest::Client;

use crate::domain::{
    common::{LLMConfig, LLMProvider, entities::app_errors::CoreError},
    ingredient::ports::LLMClient,
};

pub mod gemini_client;
pub mod openai_client;

pub use gemini_client::GeminiLLMClient;
pub use openai_client::OpenAiLLMClient;

/// Vision client selected from configuration
#[derive(Debug, Clone)]
pub enum VisionLLMClient {
    OpenAi(OpenAiLLMClient),
    Gemini(GeminiLLMClient),
}

impl VisionLLMClient {
    pub fn from_config(config: &LLMConfig) -> Result<Self, CoreError> {
        tracing::info!(
            provider = ?config.provider,
            model = %config.model(),
            timeout_secs = config.timeout.as_secs(),
            "Initializing vision LLM client"
        );

        match config.provider {
            LLMProvider::OpenAi => Ok(Self::OpenAi(OpenAiLLMClient::new(config)?)),
            LLMProvider::Gemini => Ok(Self::Gemini(GeminiLLMClient::new(config)?)),
        }
    }
}

impl LLMClient for VisionLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        match self {
            Self::OpenAi(client) => {
                client
                    .generate_with_image(prompt, image_data, mime_type, response_schema)
                    .await
            }
            Self::Gemini(client) => {
                client
                    .generate_with_image(prompt, image_data, mime_type, response_schema)
                    .await
            }
        }
    }
}

pub(crate) fn build_http_client(timeout: Duration) -> Result<Client, CoreError> {
    Client::builder().timeout(timeout).build().map_err(|e| {
        CoreError::ExternalServiceError(format!("Failed to build HTTP client: {}", e))
    })
}

pub(crate) fn map_request_error(e: reqwest::Error) -> CoreError {
    if e.is_timeout() {
        CoreError::ExternalServiceTimeout
    } else {
        CoreError::ExternalServiceError(format!("LLM API error: {}", e))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::net::SocketAddr;

    use axum::Router;
    use tokio::net::TcpListener;

    /// Serve `router` on an ephemeral local port for the lifetime of the test runtime
    pub(crate) async fn spawn_server(router: Router) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    /// An address nothing listens on
    pub(crate) async fn closed_port() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    }
}
