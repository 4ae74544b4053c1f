//! Shared types for the research assistant service and the research panel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Path the panel posts to on the research assistant service
pub const PROCESS_PATH: &str = "/api/research/process";

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /api/research/process`
///
/// The operation stays a plain string on the wire so the service can report
/// unknown tags itself instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub operation: Option<String>,
}

impl ResearchRequest {
    pub fn new(content: impl Into<String>, operation: Operation) -> Self {
        Self {
            content: content.into(),
            operation: Some(operation.as_str().to_string()),
        }
    }
}

// =====================================================
// Domain Types
// =====================================================

/// Operation tag, selected by which panel button was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Summarize,
    Suggest,
    Analyze,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Summarize, Operation::Suggest, Operation::Analyze];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Summarize => "summarize",
            Operation::Suggest => "suggest",
            Operation::Analyze => "analyze",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an operation tag outside the known set. Displays the same
/// message the service returns to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown Operation: {}", self.0)
    }
}

impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summarize" => Ok(Operation::Summarize),
            "suggest" => Ok(Operation::Suggest),
            "analyze" => Ok(Operation::Analyze),
            _ => Err(UnknownOperation(s.to_string())),
        }
    }
}

// =====================================================
// Response Types
// =====================================================

/// Service health status
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub running: bool,
    pub uptime_secs: u64,
    pub total_processed: u64,
    pub model_host: String,
}
