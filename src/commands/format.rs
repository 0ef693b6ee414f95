use std::fmt;

use rand::Rng;

use super::prompts::pick_random_with;

/// Aspect-ratio hint spliced into a prompt to steer the generated dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub ratio: &'static str,
    pub description: &'static str,
    pub suffix: &'static str,
}

impl fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.ratio, self.description)
    }
}

pub const LANDSCAPE: FormatDescriptor = FormatDescriptor {
    ratio: "16:9",
    description: "Landscape",
    suffix: ", composed as a wide 16:9 landscape image with a horizontal, cinematic layout",
};

pub const SQUARE: FormatDescriptor = FormatDescriptor {
    ratio: "1:1",
    description: "Square",
    suffix: ", composed as a 1:1 square image with the subject centered and balanced",
};

pub const PORTRAIT: FormatDescriptor = FormatDescriptor {
    ratio: "4:5",
    description: "Portrait",
    suffix: ", composed as a tall 4:5 portrait image with a vertical layout",
};

pub const ALL_FORMATS: [FormatDescriptor; 3] = [LANDSCAPE, SQUARE, PORTRAIT];

pub const FORMAT_CLOSING_INSTRUCTION: &str =
    ". Respect this aspect ratio exactly and keep the whole subject in frame without cropping.";

pub fn pick_format() -> FormatDescriptor {
    pick_format_with(&mut rand::rng())
}

pub fn pick_format_with<R: Rng>(rng: &mut R) -> FormatDescriptor {
    pick_random_with(rng, &ALL_FORMATS, SQUARE)
}

pub fn apply_format(prompt: &str, descriptor: &FormatDescriptor) -> String {
    format!(
        "{}{}{}",
        prompt, descriptor.suffix, FORMAT_CLOSING_INSTRUCTION
    )
}
