//! Errors raised on the request path of the API client.
//!
//! None of these reach the store or the controller: the client logs them and
//! hands back an empty or absent value instead. The only place an `ApiError`
//! escapes is `ApiClient::new`, where it means the configuration is unusable.
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured base URL cannot be parsed or cannot carry a path.
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Connection refused, DNS failure, timeout, or a client builder failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: StatusCode },

    /// The body did not match the expected JSON shape.
    #[error("Malformed body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
