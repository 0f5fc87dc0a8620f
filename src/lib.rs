pub mod bot;
pub mod chatbot;
pub mod commands;
pub mod config;
pub mod error;
pub mod gemini;
pub mod relay;

pub use bot::run;
