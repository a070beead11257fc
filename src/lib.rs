mod client;
mod error;
mod frames;
mod parse;
mod transport;
mod types;

pub use client::*;
pub use error::PiServiceError;

pub use parse::error::ParseError;
pub use parse::location::{parse_location, parse_locations};
pub use parse::series::{parse_events, parse_series, MISSING_VALUE};
pub use parse::timestamp::{decode_pi_datetime, decode_timestamp};

pub use transport::error::TransportError;
pub use transport::{HttpTransport, PiTransport, DEFAULT_BASE_URL};

pub use types::query::{IdList, QueryCriteria, QueryParams, QueryValue, DOCUMENT_FORMAT_KEY, PI_JSON};
pub use types::series::{Observation, ParsedSeries, SeriesData, Variable};
pub use types::station::{Location, Station};

/// Serde structures mirroring the PI_JSON wire format.
pub mod raw {
    pub use crate::types::raw::*;
}

pub use frames::observation_frame::{observations_frame, ObservationLazyFrame, OBSERVATION_COLUMNS};
pub use frames::station_frame::{series_stations_frame, stations_frame, STATION_COLUMNS};
pub use frames::summary_frame::{series_summary_frame, SUMMARY_COLUMNS};
