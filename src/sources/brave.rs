use chrono::{Days, NaiveDate};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::error::{DataflowError, Result};
use crate::global::Global;
use crate::types::brave::{NewsArticle, NewsSearchResponse};

const NEWS_SEARCH_URL: &str = "https://api.search.brave.com/res/v1/news/search";
const API_KEY_VAR: &str = "BRAVE_API_KEY";
const GLOBAL_NEWS_QUERY: &str = "global macroeconomic financial market news";
/// Brave rejects `count` above 50 on every plan.
const MAX_RESULT_COUNT: usize = 50;

pub const DEFAULT_LOOK_BACK_DAYS: u32 = 7;
pub const DEFAULT_LIMIT: usize = 5;

/// Fetch global macro/financial news published in the `look_back_days` window
/// ending at `curr_date` (`YYYY-MM-DD`) and render them as a markdown digest.
///
/// An empty window is not an error: zero provider results yield an empty
/// string, with no digest header, so callers can tell "no news" apart from a
/// failed call.
#[tracing::instrument(skip(global))]
pub async fn fetch_global_news(
    global: &Global,
    curr_date: &str,
    look_back_days: u32,
    limit: usize,
) -> Result<String> {
    let api_key = std::env::var(API_KEY_VAR)
        .ok()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| DataflowError::Configuration(format!("{API_KEY_VAR} is not set")))?;

    if limit == 0 {
        return Err(DataflowError::Input("limit must be at least 1".into()));
    }

    let (start_date, end_date) = resolve_date_range(curr_date, look_back_days)?;
    let freshness = format!("{start_date}to{end_date}");
    let count = limit.min(MAX_RESULT_COUNT).to_string();

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        "X-Subscription-Token",
        HeaderValue::from_str(&api_key).map_err(|_| {
            DataflowError::Configuration(format!("{API_KEY_VAR} contains invalid characters"))
        })?,
    );

    let brave = &global.config.brave;
    let response = global
        .http_client
        .get(NEWS_SEARCH_URL)
        .headers(headers)
        .query(&[
            ("q", GLOBAL_NEWS_QUERY),
            ("count", count.as_str()),
            ("country", brave.country.as_str()),
            ("search_lang", brave.search_lang.as_str()),
            ("freshness", freshness.as_str()),
            ("safesearch", brave.safesearch.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        tracing::error!(%status, "brave news search failed");
        return Err(DataflowError::Transport { status, message });
    }

    let body: NewsSearchResponse = response.json().await?;

    if body.results.is_empty() {
        tracing::info!(%freshness, "no news results in window");
        return Ok(String::new());
    }

    tracing::info!(count = body.results.len(), "fetched news results");

    Ok(format_digest(start_date, curr_date, &body.results, limit))
}

fn resolve_date_range(curr_date: &str, look_back_days: u32) -> Result<(NaiveDate, NaiveDate)> {
    let end = NaiveDate::parse_from_str(curr_date, "%Y-%m-%d")
        .map_err(|e| DataflowError::Input(format!("invalid date {curr_date:?}: {e}")))?;

    let start = end
        .checked_sub_days(Days::new(look_back_days as u64))
        .ok_or_else(|| {
            DataflowError::Input(format!("look_back_days {look_back_days} is out of range"))
        })?;

    Ok((start, end))
}

/// Render at most `limit` articles, in provider order, under a header naming
/// the resolved window. The header uses the caller's `end` string verbatim.
fn format_digest(start: NaiveDate, end: &str, articles: &[NewsArticle], limit: usize) -> String {
    let mut sections = String::new();

    for article in articles.iter().take(limit) {
        sections.push_str(&format!("### {}", article.title));
        if let Some(age) = article.age.as_deref().filter(|age| !age.is_empty()) {
            sections.push_str(&format!(" ({age})"));
        }
        sections.push_str(&format!("\n\n{}\n\n", article.description));
    }

    format!("## Global News (Brave Search), from {start} to {end}:\n{sections}")
}
