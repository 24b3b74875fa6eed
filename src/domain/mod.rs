pub mod chat;
pub mod error;
pub mod interview;
pub mod llm_config;
