//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `serve` - Web server command
//! - `generate` - Mock transaction batch generation
//! - `chat` - Offline canned chat replies

pub mod chat;
pub mod generate;
pub mod serve;

// Re-export command functions for main.rs
pub use chat::*;
pub use generate::*;
pub use serve::*;
