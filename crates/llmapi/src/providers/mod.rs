pub mod gemini;

pub use gemini::{first_inline_image, send_generate_request};
