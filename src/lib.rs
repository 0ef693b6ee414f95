mod commands;
mod config;
mod constants;
mod error;
mod fs_utils;
mod models;
pub mod pipeline;

pub use commands::format::{
    apply_format, pick_format, pick_format_with, FormatDescriptor, ALL_FORMATS,
    FORMAT_CLOSING_INSTRUCTION, LANDSCAPE, PORTRAIT, SQUARE,
};
pub use commands::generate::{extract_generated_image, generate_image, NO_IMAGE_GENERATED};
pub use commands::prompts::{pick_random, pick_random_with, select_caption, select_prompt};
pub use commands::publish::{parse_publish_response, publish_photo};

pub use config::Config;

pub use constants::{
    DEFAULT_CAPTION, DEFAULT_GEMINI_ENDPOINT, DEFAULT_GRAPH_URL, DEFAULT_IMAGE_MIME,
    DEFAULT_IMAGE_MODEL, DEFAULT_OUTPUT_IMAGE, DEFAULT_PROMPT, DEFAULT_PROMPTS_FILE,
    UPLOAD_FILE_NAME,
};

pub use error::{PosterError, Result};

pub use fs_utils::{load_captions, load_prompts, parse_captions, parse_prompts, persist_image};

pub use models::{GeneratedImage, PostResult, RunReport};

pub use pipeline::{exit_status, run, PipelineError, Stage};
