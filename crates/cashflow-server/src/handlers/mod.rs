//! HTTP request handlers organized by domain

pub mod chat;
pub mod reports;
pub mod status;

// Re-export all handlers for use in router
pub use chat::*;
pub use reports::*;
pub use status::*;
