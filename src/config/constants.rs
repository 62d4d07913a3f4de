//! Configuration constants.
//!
//! This module defines the constants used throughout the application:
//! class naming, network parameters, and size limits.

// Highlighting defaults
/// Default CSS class prefix for token spans.
///
/// Each highlighted token is wrapped in `<span class="{prefix}{category}">`,
/// so the default produces `json-key`, `json-string`, `json-number`,
/// `json-boolean`, and `json-null`. Users can override this via the
/// `--class-prefix` CLI flag when embedding fragments into pages that
/// already use these class names for something else.
pub const DEFAULT_CLASS_PREFIX: &str = "json-";

/// Default `<title>` for generated standalone pages.
pub const DEFAULT_PAGE_TITLE: &str = "JSON";

// Network operation parameters
/// Per-request timeout in seconds for endpoint fetches.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Identifies this tool and its version to API gateways. Users can override
/// this via the `--user-agent` CLI flag if an endpoint expects something else.
pub const DEFAULT_USER_AGENT: &str = concat!("json_highlight/", env!("CARGO_PKG_VERSION"));

/// Request header carrying the API key.
///
/// `x-api-key` is the header AWS API Gateway (and most key-protected REST
/// gateways) expect; the key value itself always comes from configuration.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Environment variable consulted for the API key when `--api-key` is not
/// given. Loaded from `.env` if present.
pub const API_KEY_ENV: &str = "JSON_HIGHLIGHT_API_KEY";

// Response and body size limits
/// Maximum response body size in bytes (2MB).
/// Responses larger than this are rejected to prevent memory exhaustion.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;
