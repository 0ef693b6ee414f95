use std::path::PathBuf;

use crate::constants::{
    DEFAULT_GEMINI_ENDPOINT, DEFAULT_GRAPH_URL, DEFAULT_IMAGE_MODEL, DEFAULT_OUTPUT_IMAGE,
    DEFAULT_PROMPTS_FILE,
};
use crate::error::{PosterError, Result};

pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const FACEBOOK_PAGE_ID: &str = "FACEBOOK_PAGE_ID";
pub const FACEBOOK_PAGE_ACCESS_TOKEN: &str = "FACEBOOK_PAGE_ACCESS_TOKEN";
const GEMINI_MODEL: &str = "GEMINI_MODEL";
const GEMINI_ENDPOINT: &str = "GEMINI_ENDPOINT";
const FACEBOOK_GRAPH_URL: &str = "FACEBOOK_GRAPH_URL";
const PROMPTS_FILE: &str = "PROMPTS_FILE";
const PROMPT_LIMIT: &str = "PROMPT_LIMIT";
const CAPTIONS_FILE: &str = "CAPTIONS_FILE";
const FORMAT_HINTS: &str = "FORMAT_HINTS";
const GENERATED_IMAGE_PATH: &str = "GENERATED_IMAGE_PATH";
const EXIT_ZERO_ON_FAILURE: &str = "EXIT_ZERO_ON_FAILURE";

/// Everything a run needs, read once at startup and passed by reference.
///
/// Credentials are optional here: a missing key only fails the call that
/// needs it.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_endpoint: String,
    pub facebook_page_id: Option<String>,
    pub facebook_access_token: Option<String>,
    pub graph_url: String,
    pub prompts_path: PathBuf,
    pub prompt_limit: Option<usize>,
    pub captions_path: Option<PathBuf>,
    pub format_hints: bool,
    pub output_image_path: Option<PathBuf>,
    pub exit_zero_on_failure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let prompt_limit = match get(PROMPT_LIMIT) {
            Some(raw) => Some(raw.parse::<usize>().map_err(|_| PosterError::InvalidConfig {
                key: PROMPT_LIMIT,
                value: raw.clone(),
            })?),
            None => None,
        };

        // An explicitly empty value switches the artifact off.
        let output_image_path = match lookup(GENERATED_IMAGE_PATH) {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(PathBuf::from(raw.trim())),
            None => Some(PathBuf::from(DEFAULT_OUTPUT_IMAGE)),
        };

        Ok(Self {
            gemini_api_key: get(GEMINI_API_KEY),
            gemini_model: get(GEMINI_MODEL).unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            gemini_endpoint: get(GEMINI_ENDPOINT)
                .unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.to_string()),
            facebook_page_id: get(FACEBOOK_PAGE_ID),
            facebook_access_token: get(FACEBOOK_PAGE_ACCESS_TOKEN),
            graph_url: get(FACEBOOK_GRAPH_URL).unwrap_or_else(|| DEFAULT_GRAPH_URL.to_string()),
            prompts_path: get(PROMPTS_FILE)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROMPTS_FILE)),
            prompt_limit,
            captions_path: get(CAPTIONS_FILE).map(PathBuf::from),
            format_hints: parse_flag(FORMAT_HINTS, get(FORMAT_HINTS))?,
            output_image_path,
            exit_zero_on_failure: parse_flag(EXIT_ZERO_ON_FAILURE, get(EXIT_ZERO_ON_FAILURE))?,
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<set>"))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_endpoint", &self.gemini_endpoint)
            .field("facebook_page_id", &self.facebook_page_id)
            .field(
                "facebook_access_token",
                &self.facebook_access_token.as_ref().map(|_| "<set>"),
            )
            .field("graph_url", &self.graph_url)
            .field("prompts_path", &self.prompts_path)
            .field("prompt_limit", &self.prompt_limit)
            .field("captions_path", &self.captions_path)
            .field("format_hints", &self.format_hints)
            .field("output_image_path", &self.output_image_path)
            .field("exit_zero_on_failure", &self.exit_zero_on_failure)
            .finish()
    }
}

fn parse_flag(key: &'static str, value: Option<String>) -> Result<bool> {
    let Some(raw) = value else {
        return Ok(false);
    };

    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PosterError::InvalidConfig { key, value: raw }),
    }
}
