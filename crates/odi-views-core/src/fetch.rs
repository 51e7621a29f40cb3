//! Inline remote resources as `data:` URIs

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::errors::Result;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Fetch `uri` and return it as a base64 `data:` URI.
///
/// Dropping the future cancels the request; timeouts come from `client`.
pub async fn data_uri(client: &reqwest::Client, uri: &str) -> Result<String> {
    debug!(uri, "fetching for data uri");
    let response = client.get(uri).send().await?.error_for_status()?;
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();
    let body = response.bytes().await?;
    Ok(encode_data_uri(&content_type, &body))
}

/// `data:{content_type};base64,{bytes}`
pub fn encode_data_uri(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, STANDARD.encode(bytes))
}
