//! This module provides the main entry point for talking to a FEWS PI web service.
//! It builds requests from [`QueryCriteria`], runs them through a [`PiTransport`]
//! and normalizes the PI_JSON answer into [`ParsedSeries`] or [`Station`] values.

use crate::error::PiServiceError;
use crate::frames::station_frame::stations_frame;
use crate::frames::summary_frame::series_summary_frame;
use crate::parse::location::parse_locations;
use crate::parse::series::parse_series;
use crate::transport::error::TransportError;
use crate::transport::{HttpTransport, PiTransport, DEFAULT_BASE_URL};
use crate::types::query::QueryCriteria;
use crate::types::raw::{RawLocationsResponse, RawSeries, RawTimeSeriesResponse};
use crate::types::series::ParsedSeries;
use crate::types::station::Station;
use bon::bon;
use chrono::{DateTime, Utc};
use log::info;
use polars::prelude::DataFrame;
use serde::de::DeserializeOwned;

pub const TIMESERIES_ENDPOINT: &str = "timeseries";
pub const DISPLAY_GROUPS_ENDPOINT: &str = "timeseries/displaygroups";
pub const LOCATIONS_ENDPOINT: &str = "locations";

/// Module instance used by the single-series call when none is given.
pub const DEFAULT_MODULE_INSTANCE_ID: &str = "MGB_Forecast";

fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError::JsonParse(endpoint.to_string(), e))
}

fn parse_all(raw: &[RawSeries]) -> Result<Vec<ParsedSeries>, PiServiceError> {
    let series = raw
        .iter()
        .map(parse_series)
        .collect::<Result<Vec<_>, _>>()?;
    info!("Parsed {} time series", series.len());
    Ok(series)
}

/// Returns the first series measured at `location_id` for `parameter_id`.
///
/// # Errors
///
/// Returns [`PiServiceError::SeriesNotFound`] when no series matches both ids.
pub fn find_series<'a>(
    series: &'a [ParsedSeries],
    location_id: &str,
    parameter_id: &str,
) -> Result<&'a ParsedSeries, PiServiceError> {
    series
        .iter()
        .find(|s| s.matches(location_id, parameter_id))
        .ok_or_else(|| PiServiceError::SeriesNotFound {
            location_id: location_id.to_string(),
            parameter_id: parameter_id.to_string(),
        })
}

/// The client for a FEWS PI REST service.
///
/// Every operation performs exactly one blocking request, then parses the answer
/// locally. A response without any record is an error, never an empty success.
///
/// # Examples
///
/// ```no_run
/// # use fews_pi::{PiClient, PiServiceError, QueryCriteria};
/// # fn run() -> Result<(), PiServiceError> {
/// let client = PiClient::new();
/// let criteria = QueryCriteria::builder()
///     .location_ids("6362")
///     .parameter_ids("Q.sim")
///     .module_instance_ids("MGB_Forecast")
///     .build();
///
/// for series in client.fetch_series(&criteria)? {
///     println!("{}", series.chart_title("MGB_Forecast"));
/// }
/// # Ok(())
/// # }
/// ```
pub struct PiClient<T: PiTransport = HttpTransport> {
    transport: T,
}

impl PiClient<HttpTransport> {
    /// Creates a client for the default service at [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client for another FEWS PI service root, e.g.
    /// `https://host/FewsWebServices/rest/fewspiservice/v1`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_transport(HttpTransport::new(base_url))
    }
}

impl Default for PiClient<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

#[bon]
impl<T: PiTransport> PiClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        criteria: &QueryCriteria,
    ) -> Result<R, PiServiceError> {
        let params = criteria.to_query().with_document_format();
        let body = self.transport.get(endpoint, &params)?;
        Ok(decode(endpoint, &body)?)
    }

    fn request_series(
        &self,
        endpoint: &str,
        criteria: &QueryCriteria,
    ) -> Result<Vec<RawSeries>, PiServiceError> {
        let response: RawTimeSeriesResponse = self.request(endpoint, criteria)?;
        if response.time_series.is_empty() {
            return Err(PiServiceError::NoSeriesFound);
        }
        Ok(response.time_series)
    }

    /// Fetches and parses every series matching `criteria` from `/timeseries`.
    ///
    /// The request carries exactly the criteria that are set, plus
    /// `documentFormat=PI_JSON`. Records are returned in response order.
    ///
    /// # Arguments
    ///
    /// * `criteria` - The [`QueryCriteria`] selecting locations, parameters, module
    ///   instances and the time window.
    ///
    /// # Returns
    ///
    /// A `Result` containing one [`ParsedSeries`] per `timeSeries` record, with
    /// sentinel events already dropped.
    ///
    /// # Errors
    ///
    /// * [`PiServiceError::NoSeriesFound`] when the response holds no series.
    /// * [`PiServiceError::Transport`] for network, HTTP status or JSON failures.
    /// * [`PiServiceError::Parse`] for the first record that fails to parse.
    pub fn fetch_series(&self, criteria: &QueryCriteria) -> Result<Vec<ParsedSeries>, PiServiceError> {
        parse_all(&self.request_series(TIMESERIES_ENDPOINT, criteria)?)
    }

    /// Fetches the series matching `criteria` and parses only the one at `index`.
    ///
    /// Sibling records are not parsed, so a malformed record elsewhere in the
    /// response does not fail the call.
    ///
    /// # Arguments
    ///
    /// * `criteria` - The [`QueryCriteria`] sent to `/timeseries`.
    /// * `index` - Zero-based position of the wanted record in the response.
    ///
    /// # Returns
    ///
    /// A `Result` containing the [`ParsedSeries`] at `index`.
    ///
    /// # Errors
    ///
    /// * [`PiServiceError::NoSeriesFound`] when the response holds no series.
    /// * [`PiServiceError::SeriesIndexOutOfRange`] when `index` is past the last series.
    /// * [`PiServiceError::Transport`] or [`PiServiceError::Parse`] as for [`Self::fetch_series`].
    pub fn fetch_series_at(
        &self,
        criteria: &QueryCriteria,
        index: usize,
    ) -> Result<ParsedSeries, PiServiceError> {
        let raw = self.request_series(TIMESERIES_ENDPOINT, criteria)?;
        let record = raw
            .get(index)
            .ok_or(PiServiceError::SeriesIndexOutOfRange {
                index,
                count: raw.len(),
            })?;
        Ok(parse_series(record)?)
    }

    /// Fetches every series of a display group from `/timeseries/displaygroups`.
    /// The criteria normally carry `plot_id` and a time window.
    pub fn fetch_display_group_series(
        &self,
        criteria: &QueryCriteria,
    ) -> Result<Vec<ParsedSeries>, PiServiceError> {
        parse_all(&self.request_series(DISPLAY_GROUPS_ENDPOINT, criteria)?)
    }

    /// Fetches and parses the locations matching `criteria` from `/locations`.
    ///
    /// # Arguments
    ///
    /// * `criteria` - The [`QueryCriteria`] sent to `/locations`. An empty
    ///   [`QueryCriteria::default`] lists every location the service knows.
    ///
    /// # Returns
    ///
    /// A `Result` containing one [`Station`] per record, in response order.
    ///
    /// # Errors
    ///
    /// * [`PiServiceError::NoLocationsFound`] when the response holds no location.
    /// * [`PiServiceError::Parse`] when a record lacks an id, a name or usable coordinates.
    pub fn fetch_locations(&self, criteria: &QueryCriteria) -> Result<Vec<Station>, PiServiceError> {
        let response: RawLocationsResponse = self.request(LOCATIONS_ENDPOINT, criteria)?;
        if response.locations.is_empty() {
            return Err(PiServiceError::NoLocationsFound);
        }
        let stations = parse_locations(&response.locations)?;
        info!("Parsed {} locations", stations.len());
        Ok(stations)
    }

    /// [`Self::fetch_series`] plus a summary table with one row per series.
    ///
    /// The table has the [`SUMMARY_COLUMNS`](crate::SUMMARY_COLUMNS) layout built by
    /// [`series_summary_frame`]. Observations stay on the returned series; use
    /// [`ParsedSeries::observations_frame`] for the values of one of them.
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_series`], plus [`PiServiceError::DataFrame`] if the table
    /// cannot be built.
    pub fn fetch_series_frame(
        &self,
        criteria: &QueryCriteria,
    ) -> Result<(Vec<ParsedSeries>, DataFrame), PiServiceError> {
        let series = self.fetch_series(criteria)?;
        let frame = series_summary_frame(&series)?;
        Ok((series, frame))
    }

    /// [`Self::fetch_series_at`] plus the `[date, value]` table of the selected series.
    pub fn fetch_series_at_frame(
        &self,
        criteria: &QueryCriteria,
        index: usize,
    ) -> Result<(ParsedSeries, DataFrame), PiServiceError> {
        let series = self.fetch_series_at(criteria, index)?;
        let frame = series.observations_frame()?;
        Ok((series, frame))
    }

    /// [`Self::fetch_locations`] plus the `[id, name, lon, lat]` table.
    pub fn fetch_locations_frame(
        &self,
        criteria: &QueryCriteria,
    ) -> Result<(Vec<Station>, DataFrame), PiServiceError> {
        let stations = self.fetch_locations(criteria)?;
        let frame = stations_frame(&stations)?;
        Ok((stations, frame))
    }

    /// Fetches one series for one location and parameter.
    ///
    /// Shortcut over [`Self::fetch_series_at_frame`] for the common single-station case.
    /// `module_instance_id` defaults to `"MGB_Forecast"` and `index` to `0`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use fews_pi::{PiClient, PiServiceError};
    /// use chrono::{TimeZone, Utc};
    ///
    /// # fn run() -> Result<(), PiServiceError> {
    /// let client = PiClient::new();
    /// let (series, frame) = client
    ///     .single_series()
    ///     .location_id("6362")
    ///     .parameter_id("Q.sim")
    ///     .start_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    ///     .end_time(Utc.with_ymd_and_hms(2025, 3, 20, 0, 0, 0).unwrap())
    ///     .call()?;
    ///
    /// println!("{}\n{}", series.chart_title("MGB_Forecast"), frame);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn single_series(
        &self,
        #[builder(into)] location_id: String,
        #[builder(into)] parameter_id: String,
        #[builder(into)] module_instance_id: Option<String>,
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
        index: Option<usize>,
    ) -> Result<(ParsedSeries, DataFrame), PiServiceError> {
        let module_instance_id =
            module_instance_id.unwrap_or_else(|| DEFAULT_MODULE_INSTANCE_ID.to_string());
        let criteria = QueryCriteria::builder()
            .location_ids(location_id)
            .parameter_ids(parameter_id)
            .module_instance_ids(module_instance_id)
            .maybe_start_time(start_time)
            .maybe_end_time(end_time)
            .build();

        self.fetch_series_at_frame(&criteria, index.unwrap_or(0))
    }
}
