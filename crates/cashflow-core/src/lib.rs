//! Cashflow Core Library
//!
//! Shared functionality for the cash flow report service:
//! - Wire-level data model (transactions, report and chat queries)
//! - Mock transaction generator for local development
//! - Canned-reply selector for offline chat
//! - Pluggable record store (mock, remote document-store gateway)
//! - Pluggable chat backend (canned, hosted model)
//! - Secret resolution and deployment configuration

pub mod chat;
pub mod config;
pub mod error;
pub mod models;
pub mod secrets;
pub mod store;

pub use chat::{report_context, select_reply, CannedBackend, ChatBackend, ChatClient, OpenAiBackend};
pub use config::DeploymentMode;
pub use error::{Error, Result};
pub use models::{ChatQuery, ReportQuery, Transaction};
pub use secrets::SecretStore;
pub use store::{MockStore, RecordProvider, RecordStore, RemoteStore};
