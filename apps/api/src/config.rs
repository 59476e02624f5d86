use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
///
/// AI features are a deployment decision, not a runtime branch: when
/// `ENABLE_AI_FEATURES` is false the service runs entirely on the
/// keyword/template fallbacks and never touches the network.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub ai_enabled: bool,
    pub google_api_key: Option<String>,
    pub candidate_data_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let ai_enabled = std::env::var("ENABLE_AI_FEATURES")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let google_api_key = std::env::var("GOOGLE_API_KEY").ok();
        if ai_enabled && google_api_key.is_none() {
            bail!("ENABLE_AI_FEATURES is set but GOOGLE_API_KEY is not");
        }

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            ai_enabled,
            google_api_key,
            candidate_data_path: std::env::var("CANDIDATE_DATA_PATH")
                .unwrap_or_else(|_| "data/candidates.json".to_string()),
        })
    }
}
