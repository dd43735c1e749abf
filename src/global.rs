use std::sync::Arc;

use anyhow::Context as _;

use crate::config::Settings;

const USER_AGENT: &str = "trading-dataflows/0.1 (+https://github.com/trading-dataflows)";

pub struct Global {
    pub config: Settings,
    pub http_client: reqwest::Client,
}

impl Global {
    pub fn init(config: Settings) -> anyhow::Result<Arc<Self>> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("http client")?;

        Ok(Arc::new(Self {
            config,
            http_client,
        }))
    }
}
