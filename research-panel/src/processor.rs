//! Client for the research service's process endpoint.

use crate::config::PanelConfig;
use crate::error::ProcessError;
use async_trait::async_trait;
use research_types::{Operation, ResearchRequest};

/// Marker substituted for every line break before display
pub const LINE_BREAK_MARKER: &str = "<br>";

/// Sends selected content for processing and returns display-ready text
#[async_trait]
pub trait Processor: Send + Sync {
    async fn process(&self, content: &str, operation: Operation) -> Result<String, ProcessError>;
}

/// Replace `\r\n`, `\r` and `\n` with the line break marker
pub fn normalize_line_breaks(text: &str) -> String {
    text.replace("\r\n", LINE_BREAK_MARKER)
        .replace('\r', LINE_BREAK_MARKER)
        .replace('\n', LINE_BREAK_MARKER)
}

/// HTTP client for `POST /api/research/process`.
///
/// One request per call: no retry and no timeout.
pub struct ResearchClient {
    endpoint: String,
    client: reqwest::Client,
}

impl ResearchClient {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Processor for ResearchClient {
    async fn process(&self, content: &str, operation: Operation) -> Result<String, ProcessError> {
        let body = ResearchRequest::new(content, operation);

        log::debug!("[PANEL] POST {} ({})", self.endpoint, operation);

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProcessError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProcessError::Status(status.as_u16()));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| ProcessError::Network(e.to_string()))?;

        Ok(normalize_line_breaks(&text))
    }
}
