//! Text-generation backends.
//!
//! [`TextGenerator`] is the seam the interpreter depends on. [`LlmBackend`]
//! dispatches over the concrete HTTP backends with an enum, since async trait
//! methods cannot be used through trait objects.

use std::future::Future;
use std::time::Duration;

use crate::config::{BackendKind, OracleConfig};
use crate::error::{OracleError, OracleResult};
use crate::prompt::Prompt;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

/// Something that turns a prompt into text.
pub trait TextGenerator {
    /// Generate a completion for `prompt`.
    fn generate(&self, prompt: &Prompt) -> impl Future<Output = OracleResult<String>> + Send;
}

// ---------------------------------------------------------------------------
// Unified backend enum
// ---------------------------------------------------------------------------

/// A configured HTTP backend.
pub enum LlmBackend {
    /// Google Gemini `generateContent` API.
    Gemini(GeminiBackend),
    /// OpenAI-compatible chat completions API.
    OpenAi(OpenAiBackend),
}

impl LlmBackend {
    /// Human-readable name for logging.
    pub const fn name(&self) -> &str {
        match self {
            Self::Gemini(_) => "gemini",
            Self::OpenAi(_) => "openai-compatible",
        }
    }

    /// Model identifier the backend sends.
    pub fn model(&self) -> &str {
        match self {
            Self::Gemini(backend) => &backend.model,
            Self::OpenAi(backend) => &backend.model,
        }
    }
}

impl TextGenerator for LlmBackend {
    async fn generate(&self, prompt: &Prompt) -> OracleResult<String> {
        match self {
            Self::Gemini(backend) => backend.complete(prompt).await,
            Self::OpenAi(backend) => backend.complete(prompt).await,
        }
    }
}

/// Create a backend from configuration.
///
/// # Errors
///
/// Returns [`OracleError::Config`] when no API key is configured and
/// [`OracleError::Backend`] if the HTTP client cannot be built.
pub fn create_backend(config: &OracleConfig) -> OracleResult<LlmBackend> {
    let api_key = config.require_api_key()?.to_string();
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| OracleError::Backend(format!("failed to build HTTP client: {e}")))?;
    let settings = Settings {
        client,
        api_url: config.api_url.clone(),
        api_key,
        model: config.model.clone(),
        temperature: config.temperature,
        top_p: config.top_p,
    };

    Ok(match config.backend {
        BackendKind::Gemini => LlmBackend::Gemini(GeminiBackend::from(settings)),
        BackendKind::OpenAi => LlmBackend::OpenAi(OpenAiBackend::from(settings)),
    })
}

struct Settings {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    top_p: f32,
}

async fn post_json(
    request: reqwest::RequestBuilder,
    body: &serde_json::Value,
    label: &str,
) -> OracleResult<serde_json::Value> {
    let response = request
        .header("Content-Type", "application/json")
        .json(body)
        .send()
        .await
        .map_err(|e| OracleError::Backend(format!("{label} request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "unable to read error body".to_owned());
        return Err(OracleError::Backend(format!(
            "{label} returned {status}: {error_body}"
        )));
    }

    response
        .json()
        .await
        .map_err(|e| OracleError::Backend(format!("{label} response parse failed: {e}")))
}

// ---------------------------------------------------------------------------
// Gemini backend
// ---------------------------------------------------------------------------

/// Backend for the Gemini `generateContent` API.
///
/// Sends requests to `{api_url}/models/{model}:generateContent` with the key
/// in the `x-goog-api-key` header.
pub struct GeminiBackend {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    top_p: f32,
}

impl From<Settings> for GeminiBackend {
    fn from(s: Settings) -> Self {
        Self {
            client: s.client,
            api_url: s.api_url,
            api_key: s.api_key,
            model: s.model,
            temperature: s.temperature,
            top_p: s.top_p,
        }
    }
}

impl GeminiBackend {
    async fn complete(&self, prompt: &Prompt) -> OracleResult<String> {
        let url = format!("{}/models/{}:generateContent", self.api_url, self.model);
        let body = serde_json::json!({
            "systemInstruction": {
                "parts": [{"text": prompt.system}]
            },
            "contents": [
                {"role": "user", "parts": [{"text": prompt.user}]}
            ],
            "generationConfig": {
                "temperature": self.temperature,
                "topP": self.top_p
            }
        });

        let request = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key);
        let json = post_json(request, &body, "Gemini").await?;
        extract_gemini_content(&json)
    }
}

/// Concatenate the text parts of the first Gemini candidate.
fn extract_gemini_content(json: &serde_json::Value) -> OracleResult<String> {
    let text: String = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(serde_json::Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(serde_json::Value::as_str))
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(OracleError::Backend(
            "Gemini response missing candidates[0].content.parts[].text".to_owned(),
        ));
    }
    Ok(text)
}

// ---------------------------------------------------------------------------
// OpenAI-compatible backend
// ---------------------------------------------------------------------------

/// Backend for OpenAI-compatible chat completions APIs.
///
/// Sends requests to `{api_url}/chat/completions`.
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    top_p: f32,
}

impl From<Settings> for OpenAiBackend {
    fn from(s: Settings) -> Self {
        Self {
            client: s.client,
            api_url: s.api_url,
            api_key: s.api_key,
            model: s.model,
            temperature: s.temperature,
            top_p: s.top_p,
        }
    }
}

impl OpenAiBackend {
    async fn complete(&self, prompt: &Prompt) -> OracleResult<String> {
        let url = format!("{}/chat/completions", self.api_url);
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": prompt.system},
                {"role": "user", "content": prompt.user}
            ],
            "temperature": self.temperature,
            "top_p": self.top_p
        });

        let request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key));
        let json = post_json(request, &body, "OpenAI").await?;
        extract_openai_content(&json)
    }
}

/// Extract the message content from a chat completions response.
fn extract_openai_content(json: &serde_json::Value) -> OracleResult<String> {
    json.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(ToOwned::to_owned)
        .ok_or_else(|| {
            OracleError::Backend("OpenAI response missing choices[0].message.content".to_owned())
        })
}
