use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Override for the research service endpoint
    pub const API_URL: &str = "RESEARCH_API_URL";
    /// JSON file backing local storage for the terminal host
    pub const STORAGE_PATH: &str = "RESEARCH_PANEL_STORAGE";
}

/// Default values
pub mod defaults {
    pub const API_URL: &str = "http://localhost:8080/api/research/process";
    pub const STORAGE_PATH: &str = "./.research-panel/storage.json";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Full URL the selection is posted to
    pub endpoint: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::API_URL.to_string(),
        }
    }
}

impl PanelConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var(env_vars::API_URL)
                .ok()
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| defaults::API_URL.to_string()),
        }
    }
}

/// Get the storage file used by the terminal host
pub fn storage_path() -> PathBuf {
    env::var(env_vars::STORAGE_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(defaults::STORAGE_PATH))
}
