//! Secret resolution
//!
//! Production deployments source credentials from a managed vault exposed
//! through the environment; local development reads plain environment
//! variables. Tests use the static variant so no process state leaks in.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Resolves named secrets for collaborator construction
#[derive(Debug, Clone)]
pub enum SecretStore {
    /// Read from process environment variables
    Env,
    /// Fixed map, for tests
    Static(HashMap<String, String>),
}

impl SecretStore {
    /// Look up a secret by name
    ///
    /// Missing or empty secrets are errors; callers surface them through
    /// the route error boundary rather than crashing.
    pub fn get(&self, name: &str) -> Result<String> {
        let value = match self {
            SecretStore::Env => std::env::var(name).ok(),
            SecretStore::Static(map) => map.get(name).cloned(),
        };

        value
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::SecretNotFound(name.to_string()))
    }
}
