//! The HTTP side of the PI service: one blocking GET per operation.

pub mod error;
#[cfg(test)]
pub(crate) mod fixtures;

use crate::transport::error::TransportError;
use crate::types::query::QueryParams;
use log::{info, warn};
use reqwest::blocking::Client;

/// Root of the public CIC Plata FEWS PI REST service.
pub const DEFAULT_BASE_URL: &str =
    "https://sstdfews.cicplata.org/FewsWebServices/rest/fewspiservice/v1";

/// Performs a single request/response exchange with a PI service.
///
/// Implemented by [`HttpTransport`] for real traffic; tests and callers with
/// their own HTTP stack can provide another implementation.
pub trait PiTransport {
    /// GETs `endpoint` (relative to the service root, e.g. `"timeseries"`) with
    /// the given parameters and returns the raw response body.
    fn get(&self, endpoint: &str, params: &QueryParams) -> Result<String, TransportError>;
}

/// [`PiTransport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PiTransport for HttpTransport {
    fn get(&self, endpoint: &str, params: &QueryParams) -> Result<String, TransportError> {
        let url = self.endpoint_url(endpoint);
        info!("Requesting {} with {} parameters", url, params.len());

        let response = self
            .client
            .get(&url)
            .query(&params.to_pairs())
            .send()
            .map_err(|e| TransportError::NetworkRequest(url.clone(), e))?;
        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return match e.status() {
                    Some(status) => Err(TransportError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }),
                    None => Err(TransportError::NetworkRequest(url, e)),
                };
            }
        };

        response
            .text()
            .map_err(|e| TransportError::ResponseBody(url, e))
    }
}
