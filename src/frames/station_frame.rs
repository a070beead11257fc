use crate::types::series::ParsedSeries;
use crate::types::station::Station;
use polars::prelude::*;

/// Column names of a station table, in order.
pub const STATION_COLUMNS: [&str; 4] = ["id", "name", "lon", "lat"];

/// Builds an `[id, name, lon, lat]` table, one row per station.
pub fn stations_frame<'a, I>(stations: I) -> PolarsResult<DataFrame>
where
    I: IntoIterator<Item = &'a Station>,
{
    let mut ids = Vec::new();
    let mut names = Vec::new();
    let mut lons = Vec::new();
    let mut lats = Vec::new();
    for station in stations {
        ids.push(station.id.clone());
        names.push(station.name.clone());
        lons.push(station.location.longitude);
        lats.push(station.location.latitude);
    }
    df!(
        STATION_COLUMNS[0] => ids,
        STATION_COLUMNS[1] => names,
        STATION_COLUMNS[2] => lons,
        STATION_COLUMNS[3] => lats
    )
}

/// Station table of a set of series, one row per series.
pub fn series_stations_frame(series: &[ParsedSeries]) -> PolarsResult<DataFrame> {
    stations_frame(series.iter().map(|s| &s.station))
}
