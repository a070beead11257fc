use crate::parse::error::ParseError;
use crate::transport::error::TransportError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PiServiceError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("No time series found in response")]
    NoSeriesFound,

    #[error("No locations found in response")]
    NoLocationsFound,

    #[error("Series index {index} not found, response holds {count} series")]
    SeriesIndexOutOfRange { index: usize, count: usize },

    #[error("No series for location '{location_id}' and parameter '{parameter_id}'")]
    SeriesNotFound {
        location_id: String,
        parameter_id: String,
    },

    #[error("Failed building DataFrame: {0}")]
    DataFrame(#[from] PolarsError),
}
