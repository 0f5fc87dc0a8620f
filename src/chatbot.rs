//! Relay chat messages to the AI service and answer in place.

mod handler;
mod query;
mod response;

pub use handler::handle_text_message;
