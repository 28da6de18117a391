//! Pluggable record store abstraction
//!
//! This module provides a backend-agnostic interface for fetching
//! transaction records for a report query.
//!
//! # Architecture
//!
//! - `RecordStore` trait: defines the query interface
//! - `RecordProvider` enum: concrete wrapper providing Clone + compile-time
//!   dispatch
//! - Backend implementations: `MockStore` (local development), `RemoteStore`
//!   (document-store gateway)
//!
//! The provider is selected once at startup from the deployment mode, never
//! branched on per call.

mod mock;
mod remote;

pub use mock::MockStore;
pub use remote::RemoteStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Transaction;

/// Trait defining the interface for record stores
///
/// Implementations must be Send + Sync to allow use across async tasks.
/// An empty result is a valid, non-error outcome.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch transactions for a (report type, year, month) query,
    /// sorted ascending by date
    async fn query(&self, report_type: &str, year: i32, month: u32) -> Result<Vec<Transaction>>;

    /// Human-readable backend description (for logging)
    fn describe(&self) -> &str;
}

/// Concrete record provider enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Debug, Clone)]
pub enum RecordProvider {
    /// Mock generator for local development
    Mock(MockStore),
    /// Remote document-store gateway
    Remote(RemoteStore),
}

impl RecordProvider {
    /// Create a mock provider
    pub fn mock() -> Self {
        RecordProvider::Mock(MockStore::new())
    }

    /// Create a seeded mock provider (reproducible batches, for tests)
    pub fn mock_seeded(seed: u64) -> Self {
        RecordProvider::Mock(MockStore::with_seed(seed))
    }

    /// Create a remote provider against a document-store gateway
    pub fn remote(base_url: &str, api_key: Option<String>) -> Self {
        RecordProvider::Remote(RemoteStore::new(base_url, api_key))
    }
}

#[async_trait]
impl RecordStore for RecordProvider {
    async fn query(&self, report_type: &str, year: i32, month: u32) -> Result<Vec<Transaction>> {
        match self {
            RecordProvider::Mock(s) => s.query(report_type, year, month).await,
            RecordProvider::Remote(s) => s.query(report_type, year, month).await,
        }
    }

    fn describe(&self) -> &str {
        match self {
            RecordProvider::Mock(s) => s.describe(),
            RecordProvider::Remote(s) => s.describe(),
        }
    }
}
