use serde::Deserialize;

/// Body returned by the Brave news search endpoint. Only the fields the digest
/// needs are modeled; everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
pub struct NewsSearchResponse {
    #[serde(default)]
    pub results: Vec<NewsArticle>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsArticle {
    #[serde(default = "untitled")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Relative recency label, e.g. "2 days ago". Not always present.
    #[serde(default)]
    pub age: Option<String>,
}

fn untitled() -> String {
    "No title".to_string()
}
