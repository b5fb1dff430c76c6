use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        common::{LLMConfig, entities::app_errors::CoreError},
        ingredient::ports::LLMClient,
    },
    infrastructure::llm::{build_http_client, map_request_error},
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        Ok(Self {
            api_key: config.api_key.clone(),
            model_name: config.model(),
            base_url: config.base_url(),
            client: build_http_client(config.timeout)?,
        })
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                map_request_error(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            map_request_error(e)
        })?;

        // Blocked or empty candidates read as empty text; the sanitizer
        // turns that into "no ingredients".
        Ok(gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.clone())
            .unwrap_or_default())
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image_data);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type,
                            data: base64_image,
                        },
                    },
                ],
            }],
            generation_config: Some(GenerationConfig {
                temperature: 0.0,
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    use axum::{
        Json, Router,
        http::{HeaderMap, StatusCode, Uri},
        response::IntoResponse,
    };
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        domain::common::LLMProvider, infrastructure::llm::test_support::spawn_server,
    };

    #[derive(Debug, Default)]
    struct SeenRequest {
        path: String,
        api_key: Option<String>,
        body: Value,
    }

    /// Fake `generateContent` endpoint answering with `status` and `reply`
    async fn gemini_server(
        status: StatusCode,
        reply: Value,
    ) -> (GeminiLLMClient, Arc<Mutex<SeenRequest>>) {
        let seen: Arc<Mutex<SeenRequest>> = Arc::default();
        let recorder = seen.clone();
        let router = Router::new().fallback(
            move |uri: Uri, headers: HeaderMap, Json(body): Json<Value>| {
                let recorder = recorder.clone();
                let reply = reply.clone();
                async move {
                    *recorder.lock().unwrap() = SeenRequest {
                        path: uri.path().to_string(),
                        api_key: headers
                            .get("x-goog-api-key")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string),
                        body,
                    };
                    (status, Json(reply)).into_response()
                }
            },
        );
        let addr = spawn_server(router).await;

        let client = GeminiLLMClient::new(&LLMConfig {
            provider: LLMProvider::Gemini,
            api_key: "gemini-key".to_string(),
            model: None,
            base_url: Some(format!("http://{}/v1beta", addr)),
            timeout: Duration::from_secs(5),
        })
        .unwrap();

        (client, seen)
    }

    async fn ask(client: &GeminiLLMClient) -> Result<String, CoreError> {
        client
            .generate_with_image(
                "list".to_string(),
                vec![1, 2, 3],
                "image/webp".to_string(),
                json!({ "type": "array" }),
            )
            .await
    }

    #[tokio::test]
    async fn test_generate_content_round_trip() {
        let (client, seen) = gemini_server(
            StatusCode::OK,
            json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": "[\"Glycerin\"]" }] }
                }]
            }),
        )
        .await;

        assert_eq!(ask(&client).await.unwrap(), "[\"Glycerin\"]");

        let seen = seen.lock().unwrap();
        assert_eq!(
            seen.path,
            "/v1beta/models/gemini-2.0-flash:generateContent"
        );
        assert_eq!(seen.api_key.as_deref(), Some("gemini-key"));
        assert_eq!(
            seen.body["contents"][0]["parts"][1]["inline_data"]["mime_type"],
            "image/webp"
        );
        assert_eq!(seen.body["generation_config"]["temperature"], 0.0);
        assert_eq!(
            seen.body["generation_config"]["response_schema"]["type"],
            "array"
        );
    }

    #[tokio::test]
    async fn test_blocked_prompt_reads_as_empty_text() {
        let (client, _) = gemini_server(
            StatusCode::OK,
            json!({ "promptFeedback": { "blockReason": "SAFETY" } }),
        )
        .await;

        assert_eq!(ask(&client).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_error_status_is_service_error() {
        let (client, _) = gemini_server(
            StatusCode::FORBIDDEN,
            json!({ "error": { "message": "API key not valid" } }),
        )
        .await;

        match ask(&client).await {
            Err(CoreError::ExternalServiceError(message)) => assert!(message.contains("403")),
            other => panic!("expected service error, got {:?}", other),
        }
    }

    #[test]
    fn test_request_shape() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: "list".to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/png".to_string(),
                            data: "AAAA".to_string(),
                        },
                    },
                ],
            }],
            generation_config: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "list");
        assert_eq!(
            json["contents"][0]["parts"][1]["inline_data"]["mime_type"],
            "image/png"
        );
        assert!(json.get("generation_config").is_none());
    }

    #[test]
    fn test_response_without_candidates_parses() {
        let response: GeminiResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(response.candidates.is_empty());
    }
}
