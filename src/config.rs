use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// Base URL of the OpenAI-compatible backend, without the `/responses` suffix.
    pub backend_url: String,
    /// Model used for quick single-shot lookups.
    pub quick_think_llm: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BraveConfig {
    pub country: String,
    pub search_lang: String,
    pub safesearch: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub openai: OpenAiConfig,
    pub brave: BraveConfig,
    pub logging: LoggingConfig,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let config_file = match environment.as_str() {
            "production" => "prod",
            "development" | _ => "dev",
        };

        let s = Config::builder()
            .add_source(File::with_name("config/default.yaml").required(false))
            .add_source(File::with_name(&format!("config/{}.yaml", config_file)).required(false))
            .add_source(File::with_name("config/local.yaml").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
