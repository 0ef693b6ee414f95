use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::config::{Config, FACEBOOK_PAGE_ACCESS_TOKEN, FACEBOOK_PAGE_ID};
use crate::constants::{DEFAULT_IMAGE_MIME, UPLOAD_FILE_NAME};
use crate::error::{PosterError, Result};
use crate::models::{GraphPhotoResponse, PostResult};

/// Uploads `image` to the page's photos edge with `caption` and returns the id
/// of the resulting post. One request, no retries.
pub async fn publish_photo(config: &Config, image: &[u8], caption: &str) -> Result<PostResult> {
    let page_id = config
        .facebook_page_id
        .as_deref()
        .ok_or(PosterError::MissingConfig(FACEBOOK_PAGE_ID))?;
    let access_token = config
        .facebook_access_token
        .as_deref()
        .ok_or(PosterError::MissingConfig(FACEBOOK_PAGE_ACCESS_TOKEN))?;

    let source = Part::bytes(image.to_vec())
        .file_name(UPLOAD_FILE_NAME)
        .mime_str(DEFAULT_IMAGE_MIME)?;

    let form = Form::new()
        .text("access_token", access_token.to_string())
        .text("caption", caption.to_string())
        .part("source", source);

    let url = format!("{}/{}/photos", config.graph_url.trim_end_matches('/'), page_id);
    debug!(%url, bytes = image.len(), "uploading photo");

    let response = reqwest::Client::new()
        .post(&url)
        .multipart(form)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    parse_publish_response(status, &body)
}

pub fn parse_publish_response(status: StatusCode, body: &str) -> Result<PostResult> {
    let parsed = serde_json::from_str::<GraphPhotoResponse>(body);

    if !status.is_success() {
        return Err(PosterError::Publish(match parsed {
            Ok(GraphPhotoResponse {
                error: Some(error), ..
            }) => error.message,
            _ => format!("HTTP {}: {}", status, body.trim()),
        }));
    }

    let parsed = parsed.map_err(|err| {
        PosterError::Publish(format!("unreadable response ({err}): {}", body.trim()))
    })?;

    if let Some(error) = parsed.error {
        return Err(PosterError::Publish(error.message));
    }

    parsed
        .post_id
        .as_ref()
        .and_then(id_to_string)
        .or_else(|| parsed.id.as_ref().and_then(id_to_string))
        .map(|post_id| PostResult { post_id })
        .ok_or_else(|| PosterError::Publish("response did not include a post id".to_string()))
}

fn id_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
