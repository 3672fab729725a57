//! Resolved application settings

use anyhow::{Context, Result};
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use task_review_sdk::{Strategy, Weights};

/// Decides which response may replace the results when requests overlap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderPolicy {
    /// Only the most recently issued request may render; older responses are dropped
    #[default]
    LatestRequest,
    /// Whichever response arrives last is rendered
    LastResponse,
}

impl FromStr for RenderPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "latest-request" => Ok(RenderPolicy::LatestRequest),
            "last-response" => Ok(RenderPolicy::LastResponse),
            other => Err(format!(
                "unknown render policy '{}' (expected latest-request or last-response)",
                other
            )),
        }
    }
}

impl fmt::Display for RenderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderPolicy::LatestRequest => f.write_str("latest-request"),
            RenderPolicy::LastResponse => f.write_str("last-response"),
        }
    }
}

/// Settings the interactive app runs with
#[derive(Debug, Clone, Default)]
pub struct AppSettings {
    pub api_base: String,
    pub strategy: Strategy,
    pub weights: Option<Weights>,
    pub top: Option<usize>,
    pub render_policy: RenderPolicy,
}

/// Read task input from a file, or from stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read tasks from stdin")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tasks from {}", path.display()))
}
