use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::warn;

use crate::config::Config;
use crate::constants::{DEFAULT_CAPTION, DEFAULT_PROMPT};
use crate::fs_utils::{load_captions, load_prompts};

/// Uniformly random element of `candidates`, or `fallback` when there are none.
pub fn pick_random<T: Clone>(candidates: &[T], fallback: T) -> T {
    pick_random_with(&mut rand::rng(), candidates, fallback)
}

pub fn pick_random_with<R, T>(rng: &mut R, candidates: &[T], fallback: T) -> T
where
    R: Rng,
    T: Clone,
{
    candidates.choose(rng).cloned().unwrap_or(fallback)
}

pub async fn select_prompt(config: &Config) -> String {
    let prompts = match load_prompts(&config.prompts_path, config.prompt_limit).await {
        Ok(prompts) => prompts,
        Err(err) => {
            warn!(error = %err, "Falling back to the default prompt");
            return DEFAULT_PROMPT.to_string();
        }
    };

    if prompts.is_empty() {
        warn!(path = %config.prompts_path.display(), "No prompts available, using the default");
    }
    pick_random(&prompts, DEFAULT_PROMPT.to_string())
}

/// Without a captions file the prompt doubles as the caption.
pub async fn select_caption(config: &Config, prompt: &str) -> String {
    let Some(path) = config.captions_path.as_deref() else {
        return prompt.to_string();
    };

    match load_captions(path).await {
        Ok(captions) => pick_random(&captions, DEFAULT_CAPTION.to_string()),
        Err(err) => {
            warn!(error = %err, "Falling back to the default caption");
            DEFAULT_CAPTION.to_string()
        }
    }
}
