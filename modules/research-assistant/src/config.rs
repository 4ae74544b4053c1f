use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "RESEARCH_PORT";
    pub const HOST: &str = "RESEARCH_HOST";
    /// Full `generateContent` URL of the Gemini model to use
    pub const GEMINI_API_URL: &str = "GEMINI_API_URL";
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const HOST: &str = "127.0.0.1";
    pub const GEMINI_API_URL: &str =
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub gemini_api_url: String,
    pub gemini_api_key: String,
}

impl Config {
    /// Read the service configuration from the environment.
    /// Fails only when the Gemini API key is missing.
    pub fn from_env() -> Result<Self, String> {
        let port = env::var(env_vars::PORT)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults::PORT);

        let host = env::var(env_vars::HOST).unwrap_or_else(|_| defaults::HOST.to_string());

        let gemini_api_url = env::var(env_vars::GEMINI_API_URL)
            .unwrap_or_else(|_| defaults::GEMINI_API_URL.to_string());

        let gemini_api_key = env::var(env_vars::GEMINI_API_KEY)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| format!("{} is not set", env_vars::GEMINI_API_KEY))?;

        Ok(Self {
            host,
            port,
            gemini_api_url,
            gemini_api_key,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
