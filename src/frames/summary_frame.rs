use crate::types::series::ParsedSeries;
use chrono::NaiveDateTime;
use polars::prelude::*;

/// Column names of a series summary table, in order.
pub const SUMMARY_COLUMNS: [&str; 11] = [
    "parameterId",
    "units",
    "timeStepUnit",
    "timeStepMultiplier",
    "startDate",
    "endDate",
    "locationId",
    "stationName",
    "lon",
    "lat",
    "forecastDate",
];

/// Builds a metadata table with one row per series, without the observations.
///
/// # Arguments
///
/// * `series` - Parsed series, typically all members of a display group.
///
/// # Returns
///
/// A `DataFrame` with the [`SUMMARY_COLUMNS`] layout, one row per series in input
/// order. `timeStepMultiplier` holds the sampling interval in seconds. `startDate`,
/// `endDate` and `timeStepUnit` are null when the service did not report them.
pub fn series_summary_frame(series: &[ParsedSeries]) -> PolarsResult<DataFrame> {
    let parameter_ids: Vec<String> = series.iter().map(|s| s.variable.id.clone()).collect();
    let units: Vec<String> = series.iter().map(|s| s.variable.units.clone()).collect();
    let time_step_units: Vec<Option<String>> = series
        .iter()
        .map(|s| s.variable.time_step_unit.clone())
        .collect();
    let multipliers: Vec<i64> = series
        .iter()
        .map(|s| s.variable.sampling_interval.num_seconds())
        .collect();
    let start_dates: Vec<Option<NaiveDateTime>> = series
        .iter()
        .map(|s| s.data.start.map(|d| d.naive_utc()))
        .collect();
    let end_dates: Vec<Option<NaiveDateTime>> = series
        .iter()
        .map(|s| s.data.end.map(|d| d.naive_utc()))
        .collect();
    let location_ids: Vec<String> = series.iter().map(|s| s.station.id.clone()).collect();
    let station_names: Vec<String> = series.iter().map(|s| s.station.name.clone()).collect();
    let lons: Vec<f64> = series.iter().map(|s| s.station.location.longitude).collect();
    let lats: Vec<f64> = series.iter().map(|s| s.station.location.latitude).collect();
    let forecast_dates: Vec<NaiveDateTime> = series
        .iter()
        .map(|s| s.data.forecast_issued_at.naive_utc())
        .collect();

    df!(
        SUMMARY_COLUMNS[0] => parameter_ids,
        SUMMARY_COLUMNS[1] => units,
        SUMMARY_COLUMNS[2] => time_step_units,
        SUMMARY_COLUMNS[3] => multipliers,
        SUMMARY_COLUMNS[4] => start_dates,
        SUMMARY_COLUMNS[5] => end_dates,
        SUMMARY_COLUMNS[6] => location_ids,
        SUMMARY_COLUMNS[7] => station_names,
        SUMMARY_COLUMNS[8] => lons,
        SUMMARY_COLUMNS[9] => lats,
        SUMMARY_COLUMNS[10] => forecast_dates
    )
}
