pub mod bootstrap;
pub mod config;
pub mod cover_image;
pub mod db;
pub mod llm_clients;
