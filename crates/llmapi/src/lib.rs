pub mod providers;
pub mod types;
pub mod utils;

pub use types::{LLMClient, LLMMessage, LLMUserType, ResponseModality};
