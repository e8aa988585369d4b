use crate::errors::AppError;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Client for the OpenAI-compatible chat-completions API.
///
/// One synchronous request per assessment: prompt in, free-text completion
/// out. No streaming, no retry, no response-schema enforcement; determinism
/// is only requested via zero-temperature sampling.
#[derive(Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl ChatClient {
    /// Creates a new `ChatClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the chat-completions API (injectable so
    ///   tests can point at a mock server).
    /// * `api_key` - Bearer token for authentication.
    /// * `model` - Model identifier to request.
    pub fn new(base_url: String, api_key: String, model: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create chat client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url,
            api_key,
            model,
        })
    }

    /// The model identifier this client requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Submits a prompt and returns the model's reply text.
    ///
    /// Sends a single user message with `temperature: 0` and extracts the
    /// first choice's content. The reply is returned unmodified; parsing or
    /// validating it is deliberately out of scope.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The fully assembled prompt string.
    ///
    /// # Returns
    ///
    /// * `Result<String, AppError>` - The free-text completion.
    pub async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::info!("Submitting prompt to model {} ({} bytes)", self.model, prompt.len());

        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": 0
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Model request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Model API returned {}: {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse model response: {}", e))
        })?;

        let reply = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                AppError::ExternalApiError("Model response contained no choices".to_string())
            })?;

        tracing::info!("Model reply received ({} bytes)", reply.len());
        Ok(reply)
    }
}
