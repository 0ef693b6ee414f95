use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use crate::commands::format::FormatDescriptor;

#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    /// First text part returned next to the image, if the model sent one.
    pub model_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostResult {
    pub post_id: String,
}

impl fmt::Display for PostResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.post_id)
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub prompt: String,
    pub caption: String,
    pub format: Option<FormatDescriptor>,
    pub image_size: usize,
    pub artifact_path: Option<PathBuf>,
    pub post: PostResult,
}

/// Graph API photo upload reply; either an error object or the new ids.
#[derive(Debug, Deserialize)]
pub struct GraphPhotoResponse {
    pub error: Option<GraphError>,
    pub post_id: Option<serde_json::Value>,
    pub id: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct GraphError {
    pub message: String,
}
