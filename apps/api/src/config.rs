use anyhow::{Context, Result};

/// Value shipped in sample `.env` files. Treated the same as an unset key.
pub const PLACEHOLDER_API_KEY: &str = "your-openai-api-key-here";

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables once at startup.
/// Nothing downstream reads the environment after this point.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub generation_timeout_secs: u64,
    /// Seeds template selection for reproducible replies. Unset in production.
    pub template_seed: Option<u64>,
    pub port: u16,
    pub debug: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let debug = parse_flag(std::env::var("DEBUG").ok().as_deref());

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            generation_timeout_secs: std::env::var("GENERATION_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?,
            template_seed: std::env::var("TEMPLATE_SEED")
                .ok()
                .map(|seed| seed.parse::<u64>())
                .transpose()
                .context("TEMPLATE_SEED must be an unsigned integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            debug,
            rust_log: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| if debug { "debug" } else { "info" }.to_string()),
        })
    }

    /// Returns the usable API key, or `None` when the AI path must stay off.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            generation_timeout_secs: 30,
            template_seed: None,
            port: 5000,
            debug: false,
            rust_log: "info".to_string(),
        }
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "yes")
    )
}
