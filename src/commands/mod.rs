pub mod format;
pub mod generate;
pub mod prompts;
pub mod publish;
