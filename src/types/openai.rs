use serde::Deserialize;

/// Envelope returned by the Responses API. The shape varies with the tools the
/// model invoked: some servers flatten the answer into `output_text`, others
/// only ship the nested `output` list, where items may be tool-call records
/// with no `content` at all.
#[derive(Debug, Default, Deserialize)]
pub struct ResponsesEnvelope {
    #[serde(default)]
    pub output_text: Option<String>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputItem {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}
