use std::sync::Arc;

use tracing_test::traced_test;

use super::{brave, openai};
use crate::config::{BraveConfig, LoggingConfig, OpenAiConfig, Settings};
use crate::global::Global;

fn live_global() -> Arc<Global> {
    let settings = Settings {
        openai: OpenAiConfig {
            backend_url: "https://api.openai.com/v1".to_string(),
            quick_think_llm: "gpt-4o-mini".to_string(),
        },
        brave: BraveConfig {
            country: "US".to_string(),
            search_lang: "en".to_string(),
            safesearch: "moderate".to_string(),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    };

    Global::init(settings).expect("global init")
}

#[tokio::test]
#[traced_test]
#[ignore = "hits the live Brave endpoint, needs BRAVE_API_KEY"]
async fn live_brave_global_news() {
    let global = live_global();
    let today = chrono::Utc::now().date_naive().to_string();

    let digest = brave::fetch_global_news(
        &global,
        &today,
        brave::DEFAULT_LOOK_BACK_DAYS,
        brave::DEFAULT_LIMIT,
    )
    .await
    .unwrap();

    // Zero results is valid for a quiet window; anything else must carry the header
    if !digest.is_empty() {
        assert!(digest.starts_with("## Global News (Brave Search), from "));
        assert!(digest.matches("### ").count() <= brave::DEFAULT_LIMIT);
    }

    println!("{digest}");
}

#[tokio::test]
#[traced_test]
#[ignore = "hits the live OpenAI endpoint, needs OPENAI_API_KEY"]
async fn live_openai_social_sentiment() {
    let global = live_global();

    let text = openai::fetch_social_sentiment(&global, "AAPL", "2024-03-08", "2024-03-15")
        .await
        .unwrap();

    assert!(!text.is_empty());
    println!("{text}");
}

#[tokio::test]
#[traced_test]
#[ignore = "hits the live OpenAI endpoint, needs OPENAI_API_KEY"]
async fn live_openai_fundamentals() {
    let global = live_global();

    let text = openai::fetch_fundamentals_via_llm(&global, "AAPL", "2024-03-15")
        .await
        .unwrap();

    assert!(!text.is_empty());
    println!("{text}");
}
