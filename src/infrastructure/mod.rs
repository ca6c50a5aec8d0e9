pub mod audio;
pub mod export;
pub mod llm;
pub mod observability;
