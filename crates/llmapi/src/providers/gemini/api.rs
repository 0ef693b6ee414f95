use anyhow::{Context, Result};
use serde_json::{Value, json};
use tracing::debug;

use crate::types::{LLMClient, LLMMessage, LLMUserType, ResponseModality};

use super::models::{GeminiErrorResponse, GeminiResponse, InlineData};

fn role_to_str(role: LLMUserType) -> &'static str {
    match role {
        LLMUserType::Human => "user",
        LLMUserType::AI => "model",
    }
}

pub fn build_generate_body(messages: &[LLMMessage], modalities: &[ResponseModality]) -> Value {
    let contents: Vec<Value> = messages
        .iter()
        .map(|m| {
            json!({
                "role": role_to_str(m.role),
                "parts": [{ "text": m.text }]
            })
        })
        .collect();

    let mut body = json!({ "contents": contents });
    if !modalities.is_empty() {
        body["generationConfig"] = json!({ "responseModalities": modalities });
    }
    body
}

/// Sends a single `generateContent` call. No retries; a non-success status is
/// turned into an error carrying the API's own message when it provides one.
pub async fn send_generate_request(
    api_client: &LLMClient,
    messages: &[LLMMessage],
    modalities: &[ResponseModality],
) -> Result<GeminiResponse> {
    let endpoint = api_client.endpoint().trim_end_matches('/');
    let url = format!(
        "{}/{}:generateContent",
        endpoint,
        api_client.default_model()
    );
    let body = build_generate_body(messages, modalities);

    debug!(%url, messages = messages.len(), "sending Gemini generateContent request");

    let response = api_client
        .http
        .post(&url)
        .header("x-goog-api-key", api_client.api_key())
        .json(&body)
        .send()
        .await
        .context("HTTP request (generateContent) failed")?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .context("Reading generateContent response body failed")?;

    if !status.is_success() {
        return Err(match serde_json::from_str::<GeminiErrorResponse>(&response_text) {
            Ok(parsed) => anyhow::anyhow!(
                "Gemini generateContent failed: status {} message {}",
                status,
                parsed.error.message
            ),
            Err(_) => anyhow::anyhow!(
                "Gemini generateContent failed: status {} body {}",
                status,
                response_text
            ),
        });
    }

    let response: GeminiResponse = serde_json::from_str(&response_text).with_context(|| {
        format!(
            "Failed to decode Gemini response JSON. Raw response: {}",
            response_text
        )
    })?;

    Ok(response)
}

/// First inline payload in the first candidate, skipping text-only parts and
/// parts whose data is blank.
pub fn first_inline_image(response: &GeminiResponse) -> Option<&InlineData> {
    response
        .candidates
        .first()?
        .content
        .parts
        .iter()
        .filter_map(|part| part.inline_data.as_ref())
        .find(|inline_data| !inline_data.data.trim().is_empty())
}

pub fn response_to_text_data(response: &GeminiResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let full_text: String = candidate
        .content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();
    let trimmed = full_text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
