use llmapi::providers::gemini::models::GeminiResponse;
use llmapi::providers::gemini::{first_inline_image, response_to_text_data, send_generate_request};
use llmapi::utils::decode_base64;
use llmapi::{LLMClient, LLMMessage, ResponseModality};
use tracing::info;

use crate::config::{Config, GEMINI_API_KEY};
use crate::constants::DEFAULT_IMAGE_MIME;
use crate::error::{PosterError, Result};
use crate::fs_utils::persist_image;
use crate::models::GeneratedImage;

pub const NO_IMAGE_GENERATED: &str = "No image generated";

/// Asks Gemini for an image for `prompt` and, when an artifact path is
/// configured, also writes the decoded bytes there.
pub async fn generate_image(config: &Config, prompt: &str) -> Result<GeneratedImage> {
    let api_key = config
        .gemini_api_key
        .as_deref()
        .ok_or(PosterError::MissingConfig(GEMINI_API_KEY))?;

    let client = LLMClient::new(
        api_key,
        config.gemini_endpoint.as_str(),
        config.gemini_model.as_str(),
    );

    let response = send_generate_request(
        &client,
        &[LLMMessage::user(prompt)],
        &[ResponseModality::Text, ResponseModality::Image],
    )
    .await
    .map_err(|err| PosterError::Generation(format!("{err:#}")))?;

    let generated = extract_generated_image(&response)?;

    if let Some(path) = config.output_image_path.as_deref() {
        persist_image(path, &generated.bytes).await?;
        info!(path = %path.display(), bytes = generated.bytes.len(), "Image saved");
    }

    Ok(generated)
}

pub fn extract_generated_image(response: &GeminiResponse) -> Result<GeneratedImage> {
    let inline_data = first_inline_image(response)
        .ok_or_else(|| PosterError::Generation(NO_IMAGE_GENERATED.to_string()))?;

    let bytes = decode_base64(&inline_data.data)
        .map_err(|err| PosterError::Generation(format!("{err:#}")))?;

    let mime_type = inline_data.mime_type.trim();
    let mime_type = if mime_type.is_empty() {
        DEFAULT_IMAGE_MIME
    } else {
        mime_type
    };

    Ok(GeneratedImage {
        bytes,
        mime_type: mime_type.to_string(),
        model_text: response_to_text_data(response),
    })
}
