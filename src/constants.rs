pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com/v16.0";
pub const DEFAULT_IMAGE_MIME: &str = "image/png";
pub const DEFAULT_PROMPTS_FILE: &str = "prompts.txt";
pub const DEFAULT_OUTPUT_IMAGE: &str = "generated_image.png";
pub const UPLOAD_FILE_NAME: &str = "image.png";

pub const CAPTION_DELIMITER: &str = "===";
/// Caption sections this short (after trimming) are separators or stubs.
pub const MIN_CAPTION_LEN: usize = 10;

pub const DEFAULT_PROMPT: &str =
    "A serene mountain lake at sunrise, mist over the water, soft golden light, highly detailed";
pub const DEFAULT_CAPTION: &str = "Fresh from the imagination machine. Have a beautiful day!";
