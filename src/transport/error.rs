use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    ResponseBody(String, #[source] reqwest::Error),

    #[error("Failed to parse JSON response from {0}")]
    JsonParse(String, #[source] serde_json::Error),
}
