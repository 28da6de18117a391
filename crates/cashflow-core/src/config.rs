//! Deployment configuration
//!
//! The deployment mode is resolved once at startup and injected into the
//! store and chat collaborators at construction time. Nothing in the core
//! reads ambient environment state per request, so tests can select
//! behavior deterministically.

use std::fmt;
use std::str::FromStr;

/// Which set of collaborators the service runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentMode {
    /// Mock store and canned chat replies (no external services)
    #[default]
    Local,
    /// Remote record store and hosted model
    Production,
}

impl DeploymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentMode::Local => "local",
            DeploymentMode::Production => "production",
        }
    }
}

impl FromStr for DeploymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "dev" | "development" => Ok(DeploymentMode::Local),
            "production" | "prod" => Ok(DeploymentMode::Production),
            other => Err(format!(
                "Unknown deployment mode '{}' (expected local or production)",
                other
            )),
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
