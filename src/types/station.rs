//! Defines the data structures representing FEWS monitoring locations: the
//! identifier, display name and point geometry of *where* a series is measured.

/// Represents a single FEWS location (gauge, forecast point, sub-basin outlet, ...).
///
/// Built either from a time series header (`locationId`, `stationName`, `lon`, `lat`)
/// or from a `/locations` record (`locationId`, `shortName`, `lon`, `lat`).
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// The FEWS location identifier (e.g., "6362").
    pub id: String,
    /// Human-readable station name.
    pub name: String,
    /// Point geometry of the station.
    pub location: Location,
}

/// Represents the geographical location of a station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Longitude in decimal degrees (positive for East, negative for West).
    pub longitude: f64,
    /// Latitude in decimal degrees (positive for North, negative for South).
    pub latitude: f64,
}

impl Location {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Returns the `[lon, lat]` coordinate pair, GeoJSON point order.
    pub fn coordinates(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}
