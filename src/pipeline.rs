//! One generate-and-post run.
//!
//! The run walks a fixed sequence of stages exactly once:
//! `Start -> PromptSelected -> CaptionSelected -> ImageGenerated -> Published -> Done`.
//! Any failure stops the run and is reported together with the last stage
//! that completed; nothing is retried or rolled back.

use std::fmt;

use thiserror::Error;
use tracing::info;

use crate::commands::format::{apply_format, pick_format};
use crate::commands::generate::generate_image;
use crate::commands::prompts::{select_caption, select_prompt};
use crate::commands::publish::publish_photo;
use crate::config::Config;
use crate::error::PosterError;
use crate::models::RunReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    PromptSelected,
    CaptionSelected,
    ImageGenerated,
    Published,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::PromptSelected => "prompt selected",
            Stage::CaptionSelected => "caption selected",
            Stage::ImageGenerated => "image generated",
            Stage::Published => "published",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
#[error("run failed after stage '{stage}': {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: PosterError,
}

pub async fn run(config: &Config) -> Result<RunReport, PipelineError> {
    let mut stage = Stage::Start;
    let fail = |stage: Stage| move |source: PosterError| PipelineError { stage, source };

    let prompt = select_prompt(config).await;
    info!(%prompt, "Prompt");
    stage = advance(stage, Stage::PromptSelected);

    let caption = select_caption(config, &prompt).await;
    info!(%caption, "Caption");
    stage = advance(stage, Stage::CaptionSelected);

    let format = config.format_hints.then(pick_format);
    let generation_prompt = match &format {
        Some(descriptor) => {
            info!(format = %descriptor, "Format hint");
            apply_format(&prompt, descriptor)
        }
        None => prompt.clone(),
    };

    info!("Generating image...");
    let image = generate_image(config, &generation_prompt)
        .await
        .map_err(fail(stage))?;
    info!(
        mime_type = %image.mime_type,
        bytes = image.bytes.len(),
        model_text = image.model_text.as_deref().unwrap_or(""),
        "Image generated"
    );
    stage = advance(stage, Stage::ImageGenerated);

    info!("Posting to Facebook...");
    let post = publish_photo(config, &image.bytes, &caption)
        .await
        .map_err(fail(stage))?;
    info!(post_id = %post, "Posted image to Facebook");
    stage = advance(stage, Stage::Published);

    advance(stage, Stage::Done);
    info!("Done!");

    Ok(RunReport {
        prompt,
        caption,
        format,
        image_size: image.bytes.len(),
        artifact_path: config.output_image_path.clone(),
        post,
    })
}

/// Process exit status for a finished run: 0 on success, 1 on failure unless
/// the config asks failures to exit cleanly.
pub fn exit_status(result: &Result<RunReport, PipelineError>, config: &Config) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) if config.exit_zero_on_failure => 0,
        Err(_) => 1,
    }
}

fn advance(from: Stage, to: Stage) -> Stage {
    tracing::debug!(%from, %to, "stage transition");
    to
}
