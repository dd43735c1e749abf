use serde_json::json;

use crate::error::{DataflowError, Result};
use crate::global::Global;
use crate::types::openai::ResponsesEnvelope;

const API_KEY_VAR: &str = "OPENAI_API_KEY";
const SEARCH_CONTEXT_SIZE: &str = "low";
const MAX_OUTPUT_TOKENS: u32 = 4096;

/// Search social media for posts about `query` between the two dates. The
/// date window is passed to the hosted tool as prompt text only; the provider
/// is not guaranteed to honor it.
#[tracing::instrument(skip(global))]
pub async fn fetch_social_sentiment(
    global: &Global,
    query: &str,
    start_date: &str,
    end_date: &str,
) -> Result<String> {
    let instruction = format!(
        "Can you search Social Media for {query} from {start_date} to {end_date}? \
         Make sure you only get the data posted during that period."
    );

    web_search(global, &instruction).await
}

/// LLM-backed variant of the global news lookup. `limit` is embedded in the
/// instruction; the synthesized answer is returned as-is, not truncated.
#[tracing::instrument(skip(global))]
pub async fn fetch_global_news_via_llm(
    global: &Global,
    curr_date: &str,
    look_back_days: u32,
    limit: usize,
) -> Result<String> {
    let instruction = format!(
        "Can you search global or macroeconomics news from {look_back_days} days before \
         {curr_date} to {curr_date} that would be informative for trading purposes? Make sure \
         you only get the data posted during that period. Limit the results to {limit} articles."
    );

    web_search(global, &instruction).await
}

/// Search for fundamentals discussions on `ticker` over the month leading up
/// to `curr_date`, asking for a table of the usual ratios.
#[tracing::instrument(skip(global))]
pub async fn fetch_fundamentals_via_llm(
    global: &Global,
    ticker: &str,
    curr_date: &str,
) -> Result<String> {
    let instruction = format!(
        "Can you search Fundamental for discussions on {ticker} during of the month before \
         {curr_date} to the month of {curr_date}. Make sure you only get the data posted during \
         that period. List as a table, with PE/PS/Cash flow/ etc"
    );

    web_search(global, &instruction).await
}

/// One round trip to the Responses API with the hosted web-search tool
/// enabled. All three entry points differ only in their instruction text.
async fn web_search(global: &Global, instruction: &str) -> Result<String> {
    let openai = &global.config.openai;
    if openai.backend_url.is_empty() {
        return Err(DataflowError::Configuration(
            "openai.backend_url is not set".into(),
        ));
    }
    if openai.quick_think_llm.is_empty() {
        return Err(DataflowError::Configuration(
            "openai.quick_think_llm is not set".into(),
        ));
    }

    let api_key = std::env::var(API_KEY_VAR)
        .ok()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| DataflowError::Configuration(format!("{API_KEY_VAR} is not set")))?;

    let body = json!({
        "model": openai.quick_think_llm,
        "input": [{
            "role": "system",
            "content": [{
                "type": "input_text",
                "text": instruction,
            }],
        }],
        "text": { "format": { "type": "text" } },
        "reasoning": {},
        "tools": [{
            "type": "web_search_preview",
            "user_location": { "type": "approximate" },
            "search_context_size": SEARCH_CONTEXT_SIZE,
        }],
        "temperature": 1,
        "max_output_tokens": MAX_OUTPUT_TOKENS,
        "top_p": 1,
        "store": true,
    });

    let url = format!("{}/responses", openai.backend_url.trim_end_matches('/'));
    let response = global
        .http_client
        .post(&url)
        .bearer_auth(&api_key)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        tracing::error!(%status, "responses call failed");
        return Err(DataflowError::Transport { status, message });
    }

    let envelope: ResponsesEnvelope = response.json().await?;

    extract_text(&envelope)
}

/// Unwrap the polymorphic envelope: prefer the flattened `output_text`, then
/// the first non-empty text block across the ordered output items. A response
/// with tool calls but no synthesized text is not actionable downstream, so it
/// fails hard.
fn extract_text(envelope: &ResponsesEnvelope) -> Result<String> {
    if let Some(text) = envelope.output_text.as_deref().filter(|t| !t.is_empty()) {
        return Ok(text.to_string());
    }

    for item in &envelope.output {
        for block in &item.content {
            if let Some(text) = block.text.as_deref().filter(|t| !t.is_empty()) {
                return Ok(text.to_string());
            }
        }
    }

    Err(DataflowError::Extraction(
        "no text content in response output".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(value: serde_json::Value) -> ResponsesEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn flattened_output_text_wins() {
        let envelope = envelope(json!({
            "output_text": "the answer",
            "output": [{ "content": [{ "text": "nested, should lose" }] }],
        }));

        assert_eq!(extract_text(&envelope).unwrap(), "the answer");
    }

    #[test]
    fn empty_flattened_text_falls_through_to_nested_blocks() {
        let envelope = envelope(json!({
            "output_text": "",
            "output": [{ "content": [{ "text": "nested answer" }] }],
        }));

        assert_eq!(extract_text(&envelope).unwrap(), "nested answer");
    }

    #[test]
    fn first_non_empty_block_wins_in_order() {
        let envelope = envelope(json!({
            "output": [
                // tool-call record, no content at all
                { "type": "web_search_call", "status": "completed" },
                { "content": [
                    { "text": "" },
                    { "text": "second block" },
                    { "text": "third block" },
                ]},
            ],
        }));

        assert_eq!(extract_text(&envelope).unwrap(), "second block");
    }

    #[test]
    fn no_text_anywhere_is_an_extraction_error() {
        let envelope = envelope(json!({
            "output": [
                { "type": "web_search_call" },
                { "content": [{ "annotations": [] }, { "text": "" }] },
            ],
        }));

        let err = extract_text(&envelope).unwrap_err();
        assert!(matches!(err, DataflowError::Extraction(_)), "got {err:?}");
    }

    #[test]
    fn completely_empty_envelope_is_an_extraction_error() {
        let envelope = envelope(json!({}));
        assert!(extract_text(&envelope).is_err());
    }
}
