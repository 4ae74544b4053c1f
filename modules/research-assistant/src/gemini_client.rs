//! Typed HTTP client for the Gemini `generateContent` API.

use serde::{Deserialize, Serialize};

pub struct GeminiClient {
    api_url: String,
    api_key: String,
    client: reqwest::Client,
}

// ── Gemini API types ────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TextPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct RequestContent {
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
pub struct GenerateContentBody {
    pub contents: Vec<RequestContent>,
}

impl GenerateContentBody {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Pull the first candidate's first text part out of a raw response body.
///
/// `Ok(None)` means the body parsed but carried no usable text.
pub fn extract_text(body: &str) -> Result<Option<String>, String> {
    let parsed: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| e.to_string())?;

    let text = parsed
        .candidates
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.content)
        .and_then(|c| c.parts)
        .and_then(|p| p.into_iter().next())
        .and_then(|p| p.text);

    Ok(text)
}

// ── Client impl ─────────────────────────────────────

impl GeminiClient {
    pub fn new(api_url: &str, api_key: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Host part of the configured model URL, for status reporting
    pub fn host(&self) -> String {
        url::Url::parse(&self.api_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default()
    }

    /// Send a prompt and return the raw response body
    pub async fn generate(&self, prompt: &str) -> Result<String, String> {
        let body = GenerateContentBody::from_prompt(prompt);

        log::debug!("[GEMINI] Sending prompt ({} chars)", prompt.len());

        let resp = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Gemini API request failed: {}", e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            log::warn!("[GEMINI] HTTP {}: {}", status, body);
            return Err(format!("Gemini API request failed with status: {}", status));
        }

        resp.text()
            .await
            .map_err(|e| format!("Read Gemini response: {}", e))
    }
}
