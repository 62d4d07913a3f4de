//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error for a JSON Pointer selection that matched nothing.
///
/// `detail` carries the document's own `message` field when it has one, so a
/// miss against an error envelope still shows the endpoint's explanation.
#[derive(Error, Debug)]
#[error("Selector {pointer:?} matched nothing in the document ({detail})")]
pub struct SelectError {
    /// The JSON Pointer that found no value.
    pub pointer: String,
    /// The document's own explanation, or a generic note.
    pub detail: String,
}

/// Error types for endpoint fetches.
///
/// Distinguishes transport failures (the request never completed) from
/// endpoint answers we reject (bad status, oversized body, non-JSON body).
#[derive(Error, Debug)]
pub enum FetchError {
    /// The endpoint URL could not be parsed.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request could not be sent or the response body could not be read.
    #[error("HTTP request error: {0}")]
    RequestError(#[from] ReqwestError),

    /// The endpoint answered with a non-success status.
    ///
    /// `message` carries the endpoint's own explanation when its error
    /// envelope had one, otherwise the canonical reason for the status.
    #[error("Endpoint returned HTTP {status}: {message}")]
    HttpStatus {
        /// Status code of the response.
        status: reqwest::StatusCode,
        /// Explanation extracted from the response body, or the canonical
        /// status reason.
        message: String,
    },

    /// The response body exceeded the configured size limit.
    #[error("Response body too large: {size} bytes exceeds {limit} byte limit")]
    BodyTooLarge {
        /// Observed body size in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// The response body was not valid JSON.
    #[error("Response was not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
