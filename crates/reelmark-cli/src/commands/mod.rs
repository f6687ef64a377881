pub mod config;
pub mod prompts;
pub mod render;
pub mod search;
pub mod search_ui;
pub mod session;
