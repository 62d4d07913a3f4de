//! Endpoint fetching.
//!
//! This module fetches JSON documents from REST endpoints: it builds the
//! request with the API key header, enforces the response size limit,
//! surfaces endpoint error envelopes, and parses the body.

use log::debug;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use crate::config::{API_KEY_HEADER, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::FetchError;

/// Error envelope shape used by API gateways.
///
/// Non-success responses usually carry `{"status": ..., "message": ...}`.
/// Only `message` matters here; it is surfaced to the user when present.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: Option<String>,
}

/// Fetches a JSON document from an endpoint.
///
/// Sends a GET request, attaching the API key as an `x-api-key` header when
/// one is configured. Non-success statuses become [`FetchError::HttpStatus`]
/// carrying the message from the endpoint's error envelope when the body has
/// one, so gateway answers like "Missing Authentication Token" reach the user
/// verbatim. Bodies over the size limit are rejected before parsing.
///
/// # Arguments
///
/// * `client` - HTTP client (carries timeout and User-Agent)
/// * `url` - Endpoint URL to fetch
/// * `api_key` - Optional API key for the `x-api-key` header
///
/// # Returns
///
/// The parsed JSON document.
///
/// # Errors
///
/// Returns a [`FetchError`] if the URL is invalid, the request fails, the
/// endpoint answers with a non-success status, the body is too large, or the
/// body is not valid JSON.
pub async fn fetch_json(
    client: &reqwest::Client,
    url: &str,
    api_key: Option<&str>,
) -> Result<Value, FetchError> {
    let url = Url::parse(url)?;
    debug!("Fetching JSON from {url}");

    let mut request = client.get(url);
    if let Some(key) = api_key {
        request = request.header(API_KEY_HEADER, key);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Endpoint answered with status {status}");

    // Reject oversized bodies early when the endpoint declares a length
    if let Some(len) = response.content_length() {
        if len as usize > MAX_RESPONSE_BODY_SIZE {
            return Err(FetchError::BodyTooLarge {
                size: len as usize,
                limit: MAX_RESPONSE_BODY_SIZE,
            });
        }
    }

    let body = response.bytes().await?;
    if body.len() > MAX_RESPONSE_BODY_SIZE {
        return Err(FetchError::BodyTooLarge {
            size: body.len(),
            limit: MAX_RESPONSE_BODY_SIZE,
        });
    }

    if !status.is_success() {
        let message = extract_error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown Status Code")
                .to_string()
        });
        return Err(FetchError::HttpStatus { status, message });
    }

    let value: Value = serde_json::from_slice(&body)?;
    debug!("Fetched {} bytes of JSON", body.len());
    Ok(value)
}

/// Extracts the error message from an endpoint's error envelope.
///
/// Returns `None` when the body is not JSON, has no `message` field, or the
/// message is empty, letting the caller fall back to the status reason.
fn extract_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .filter(|message| !message.is_empty())
}
