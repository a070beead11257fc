//! Strict internal model of one parsed PI time series: *what* is measured
//! ([`Variable`]), *where* ([`Station`]) and the values themselves ([`SeriesData`]).

use crate::types::station::Station;
use chrono::{DateTime, TimeDelta, Utc};

/// Identifies the measured quantity of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The FEWS parameter code (e.g., "Q.sim").
    pub id: String,
    /// Spacing between consecutive events. Always derived from
    /// `timeStep.multiplier` read as a count of seconds.
    pub sampling_interval: TimeDelta,
    /// Unit of the values (e.g., "m3/s").
    pub units: String,
    /// The `timeStep.unit` reported by the service, kept for reference only.
    pub time_step_unit: Option<String>,
}

/// A single retained event of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// The values of a series together with the forecast issue time.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    /// `header.forecastDate`.
    pub forecast_issued_at: DateTime<Utc>,
    /// Retained observations, in the order the service sent them.
    pub observations: Vec<Observation>,
    /// `header.startDate`, when the service reports it.
    pub start: Option<DateTime<Utc>>,
    /// `header.endDate`, when the service reports it.
    pub end: Option<DateTime<Utc>>,
}

/// One fully parsed `timeSeries` record.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSeries {
    pub variable: Variable,
    pub station: Station,
    pub data: SeriesData,
    /// `header.moduleInstanceId`, when the service reports it.
    pub module_instance_id: Option<String>,
}

impl ParsedSeries {
    /// Composes the chart title used for plotting this series:
    /// `"<moduleInstanceId> - <variableId> [<units>] - <stationName> [<stationId>]"`.
    pub fn chart_title(&self, module_instance_id: &str) -> String {
        format!(
            "{} - {} [{}] - {} [{}]",
            module_instance_id,
            self.variable.id,
            self.variable.units,
            self.station.name,
            self.station.id
        )
    }

    /// Returns `true` when the series belongs to the given location and parameter.
    pub fn matches(&self, location_id: &str, parameter_id: &str) -> bool {
        self.station.id == location_id && self.variable.id == parameter_id
    }
}
