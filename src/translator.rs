use crate::config::Config;
use crate::extract::TranslatableContent;
use crate::i18n::{Language, TranslationMetrics, TranslationValidator};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Pipeline error taxonomy.
///
/// Both variants propagate to the language session, which records them and
/// keeps the baseline document displayed. `Unavailable` is transient and
/// worth retrying; `InvalidStructure` means the model responded but the
/// payload failed structural validation.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation service unavailable: {0}")]
    Unavailable(String),

    #[error("invalid translation structure: {0}")]
    InvalidStructure(String),
}

/// OpenAI Chat Completion request for translation
#[derive(Debug, Serialize)]
struct TranslationRequest {
    model: String,
    messages: Vec<Message>,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Check if a model is a reasoning model that doesn't support temperature
fn is_reasoning_model(model: &str) -> bool {
    model.starts_with("gpt-5")
        || model.starts_with("o1")
        || model.starts_with("o3")
        || model.starts_with("o4")
}

/// Build the system prompt carrying the fixed translation instruction set.
///
/// The constraints here define correctness the model is graded against:
/// brand names stay, team proper nouns stay, the `{year}` placeholder stays
/// verbatim, and the response must mirror the input structure exactly.
fn build_translation_instructions(source_language: Language, target_language: Language) -> String {
    format!(
        r#"You are a professional translator. Translate the JSON content document provided by the user from {} to {}.

## Translation Rules

### DO NOT translate:
- URLs, numeric ids, or icon identifiers (none should be present in the document)
- Brand and technology names (e.g., 'React', 'Next.js', 'GitHub', 'Docker', 'Git'), even though they are string values
- Technical terms that are commonly used in English in the {} tech community
- Proper nouns such as collaborator names in any 'team' field, unless a canonical translation exists

### DO translate:
- Titles, descriptions, section headings, and skill names
- Button labels and other interface text
- The copyright line, keeping the '{{year}}' placeholder verbatim and unmodified

### Structure:
- Respond ONLY with a JSON object structurally identical to the input: same keys, same array lengths, same ordering
- Replace string values with their translations; never add, remove, or reorder keys or array elements"#,
        source_language.name(),
        target_language.name(),
        target_language.name(),
    )
}

/// Build the user prompt for translation
fn build_translation_user_prompt(view_json: &str, target_language: Language) -> String {
    format!(
        "Translate the following portfolio content document to {}:\n\n{}",
        target_language.name(),
        view_json
    )
}

/// Models often wrap JSON answers in a markdown code fence; tolerate it.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }
    let body = match trimmed.find('\n') {
        Some(newline) => &trimmed[newline + 1..],
        None => return trimmed,
    };
    body.trim_end().trim_end_matches("```").trim()
}

/// Client for the external text-completion collaborator.
///
/// Owns the single request/response contract: serialize the translatable
/// view, send it with the instruction set, validate the response shape.
/// Performs exactly one attempt per call; retry policy belongs to the
/// caller.
pub struct TranslationClient {
    http: reqwest::Client,
    config: Config,
}

impl TranslationClient {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, config })
    }

    /// Translate a view from `source_language` to `target_language`.
    ///
    /// Suspends until the external collaborator responds or the bounded
    /// request timeout expires (surfaced as `Unavailable`).
    pub async fn translate(
        &self,
        view: &TranslatableContent,
        source_language: Language,
        target_language: Language,
    ) -> Result<TranslatableContent, TranslationError> {
        // Translating into the canonical language is the identity
        if target_language == source_language {
            return Ok(view.clone());
        }

        let metrics = TranslationMetrics::global();
        metrics.record_request();

        let result = self
            .request_translation(view, source_language, target_language)
            .await;
        if result.is_err() {
            metrics.record_request_failure();
        }
        result
    }

    async fn request_translation(
        &self,
        view: &TranslatableContent,
        source_language: Language,
        target_language: Language,
    ) -> Result<TranslatableContent, TranslationError> {
        let view_json = serde_json::to_string_pretty(view)
            .map_err(|e| TranslationError::InvalidStructure(format!(
                "failed to serialize translatable view: {}",
                e
            )))?;

        // Reasoning models need higher token limits and don't support
        // temperature or response_format
        let is_reasoning = is_reasoning_model(&self.config.openai_model);
        let max_completion_tokens = if is_reasoning {
            16000
        } else {
            self.config.max_completion_tokens
        };

        let request = TranslationRequest {
            model: self.config.openai_model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: build_translation_instructions(source_language, target_language),
                },
                Message {
                    role: "user".to_string(),
                    content: build_translation_user_prompt(&view_json, target_language),
                },
            ],
            max_completion_tokens,
            temperature: if is_reasoning { None } else { Some(0.3) },
            reasoning_effort: if is_reasoning {
                Some("low".to_string())
            } else {
                None
            },
            response_format: if is_reasoning {
                None
            } else {
                Some(ResponseFormat {
                    format_type: "json_object".to_string(),
                })
            },
        };

        let response = self
            .http
            .post(&self.config.openai_api_url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.openai_api_key),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                TranslationError::Unavailable(format!("failed to send translation request: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TranslationError::Unavailable(format!(
                "translation service error ({}): {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            TranslationError::InvalidStructure(format!("failed to parse response envelope: {}", e))
        })?;

        let content = chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| {
                TranslationError::InvalidStructure("response contained no choices".to_string())
            })?;

        let payload = strip_code_fence(&content);
        if payload.is_empty() {
            return Err(TranslationError::InvalidStructure(
                "response contained an empty message".to_string(),
            ));
        }

        let translated: TranslatableContent = serde_json::from_str(payload).map_err(|e| {
            TranslationError::InvalidStructure(format!(
                "failed to parse translated document: {}",
                e
            ))
        })?;

        let validation = TranslationValidator::validate(view, &translated);
        for warning in &validation.warnings {
            warn!(
                "Translation validation warning for {} ({}): {}",
                target_language.name(),
                target_language.code(),
                warning
            );
        }
        if validation.has_errors() {
            return Err(TranslationError::InvalidStructure(
                validation.errors.join("; "),
            ));
        }

        Ok(translated)
    }
}
