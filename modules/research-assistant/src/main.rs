//! Research Assistant Service — prompt builder in front of Gemini.
//!
//! Accepts `{ content, operation }` from the research panel, turns it into an
//! operation-specific prompt and returns the model's answer as plain text.
//!
//! Default: http://127.0.0.1:8080/

mod config;
mod gemini_client;
mod prompt;
mod routes;

use config::Config;
use gemini_client::GeminiClient;
use routes::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let gemini = GeminiClient::new(&config.gemini_api_url, &config.gemini_api_key);
    log::info!("Using Gemini model endpoint on {}", gemini.host());

    let app = routes::router(Arc::new(AppState::new(gemini)));

    let addr = config.bind_addr();
    log::info!("Research Assistant Service listening on http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
