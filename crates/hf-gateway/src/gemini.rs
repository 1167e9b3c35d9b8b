//! Gemini `generateContent` client.

use std::time::Duration;

use hf_config::{GeminiConfig, TransmissionScope};
use hf_core::catalog;
use hf_core::entities::{ChatMessage, DetailedEnrichment, Diagnosis};
use hf_core::enums::{ApplianceKind, ChatRole};
use hf_schema::{DETAILED_ENRICHMENT, DIAGNOSIS, SchemaRegistry};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GatewayError;
use crate::http::ensure_success;
use crate::{AiGateway, prompts, select_turns};

const JSON_MIME: &str = "application/json";

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_json_schema: Value,
}

impl<'a> Content<'a> {
    const fn system(text: &'a str) -> Self {
        Self {
            role: None,
            parts: [Part { text }],
        }
    }

    const fn user(text: &'a str) -> Self {
        Self {
            role: Some("user"),
            parts: [Part { text }],
        }
    }

    fn turn(message: &'a ChatMessage) -> Self {
        Self {
            role: Some(match message.role {
                ChatRole::User => "user",
                ChatRole::Model => "model",
            }),
            parts: [Part {
                text: &message.text,
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    /// Reasoning summaries from thinking models; never part of the answer.
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateResponse {
    /// Concatenated answer text of the first candidate.
    fn into_text(self) -> Result<String, GatewayError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self.prompt_feedback.and_then(|f| f.block_reason).map_or_else(
                || "no candidates".to_string(),
                |r| format!("prompt blocked ({r})"),
            );
            return Err(GatewayError::EmptyResponse(reason));
        };
        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter(|p| !p.thought)
            .filter_map(|p| p.text)
            .collect();
        if text.trim().is_empty() {
            let reason = candidate
                .finish_reason
                .unwrap_or_else(|| "no text".to_string());
            return Err(GatewayError::EmptyResponse(format!(
                "candidate without text (finish reason {reason})"
            )));
        }
        Ok(text)
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Gemini generative API.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
    schemas: SchemaRegistry,
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotConfigured`] without an API key, or
    /// [`GatewayError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &GeminiConfig) -> Result<Self, GatewayError> {
        if !config.is_configured() {
            return Err(GatewayError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("homefix/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            config: config.clone(),
            schemas: SchemaRegistry::new(),
        })
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest<'_>,
    ) -> Result<String, GatewayError> {
        let url = self.config.generate_url(model);
        tracing::debug!(model, turns = request.contents.len(), "generateContent");
        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let body: GenerateResponse = resp.json().await?;
        body.into_text()
    }

    async fn generate_structured<T: DeserializeOwned>(
        &self,
        schema: &str,
        system: &str,
        prompt: &str,
    ) -> Result<T, GatewayError> {
        let response_json_schema = self
            .schemas
            .response_schema(schema)
            .map_err(|e| GatewayError::SchemaViolation(e.to_string()))?;
        let request = GenerateRequest {
            system_instruction: Content::system(system),
            contents: vec![Content::user(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: JSON_MIME,
                response_json_schema,
            }),
        };
        let text = self.generate(&self.config.model, &request).await?;
        parse_structured(&self.schemas, schema, &text)
    }
}

/// Parse reply text as JSON, check it against `schema`, then deserialize.
fn parse_structured<T: DeserializeOwned>(
    schemas: &SchemaRegistry,
    schema: &str,
    text: &str,
) -> Result<T, GatewayError> {
    let value: Value = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| GatewayError::SchemaViolation(format!("reply is not JSON: {e}")))?;
    schemas
        .validate(schema, &value)
        .map_err(|e| GatewayError::SchemaViolation(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| GatewayError::SchemaViolation(e.to_string()))
}

/// Models occasionally wrap JSON mode output in a Markdown fence.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .map_or(trimmed, str::trim)
}

impl AiGateway for GeminiClient {
    async fn diagnose_free_text(
        &self,
        appliance: ApplianceKind,
        description: &str,
    ) -> Result<Diagnosis, GatewayError> {
        let prompt = prompts::free_text_prompt(catalog::appliance(appliance).label, description);
        let reply: Diagnosis = self
            .generate_structured(DIAGNOSIS, prompts::FREE_TEXT_SYSTEM, &prompt)
            .await?;
        // enrichment only ever comes from an explicit detail request
        Diagnosis::new(reply.causes, reply.cost_level, reply.cost_range, reply.tip)
            .map_err(|e| GatewayError::SchemaViolation(e.to_string()))
    }

    async fn detail_enrichment(
        &self,
        appliance: ApplianceKind,
        problem: &str,
    ) -> Result<DetailedEnrichment, GatewayError> {
        let prompt = prompts::detail_prompt(catalog::appliance(appliance).label, problem);
        self.generate_structured(DETAILED_ENRICHMENT, prompts::DETAIL_SYSTEM, &prompt)
            .await
    }

    async fn chat(
        &self,
        history: &[ChatMessage],
        scope: TransmissionScope,
    ) -> Result<String, GatewayError> {
        let turns = select_turns(history, scope);
        if turns.is_empty() {
            return Err(GatewayError::NothingToSend);
        }
        let request = GenerateRequest {
            system_instruction: Content::system(prompts::CHAT_SYSTEM),
            contents: turns.iter().map(Content::turn).collect(),
            generation_config: None,
        };
        let text = self.generate(&self.config.chat_model, &request).await?;
        Ok(text.trim().to_string())
    }
}
