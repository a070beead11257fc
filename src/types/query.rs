//! Query criteria for the FEWS PI REST endpoints and their translation into
//! request parameters.
//!
//! Every criterion is independently optional. The only "unset" state is `None`:
//! an unset criterion is left out of the request entirely, because the service
//! treats an absent parameter differently from an empty one.

use bon::Builder;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Name of the parameter selecting the response document format.
pub const DOCUMENT_FORMAT_KEY: &str = "documentFormat";
/// The only document format this crate can parse.
pub const PI_JSON: &str = "PI_JSON";

/// One or more identifiers for a multi-valued criterion.
///
/// Built from a single scalar (`"Q.sim"`, `6362_u32`) or from a sequence
/// (`vec!["Q.sim", "H.sim"]`). A sequence is forwarded as given; the transport
/// repeats the parameter once per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdList {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for IdList {
    fn from(value: &str) -> Self {
        IdList::One(value.to_string())
    }
}

impl From<String> for IdList {
    fn from(value: String) -> Self {
        IdList::One(value)
    }
}

impl From<&String> for IdList {
    fn from(value: &String) -> Self {
        IdList::One(value.clone())
    }
}

macro_rules! id_from_integer {
    ($($t:ty),*) => {
        $(impl From<$t> for IdList {
            fn from(value: $t) -> Self {
                IdList::One(value.to_string())
            }
        })*
    };
}

id_from_integer!(i32, i64, u32, u64);

impl<T: Into<String>> From<Vec<T>> for IdList {
    fn from(values: Vec<T>) -> Self {
        IdList::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<String>, const N: usize> From<[T; N]> for IdList {
    fn from(values: [T; N]) -> Self {
        IdList::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<String>> FromIterator<T> for IdList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        IdList::Many(iter.into_iter().map(Into::into).collect())
    }
}

/// A single request parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    /// Sent as one repeated parameter per entry.
    Multiple(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

/// Conversion of a criterion value into its wire representation.
trait ToQueryValue {
    fn to_query_value(&self) -> QueryValue;
}

impl ToQueryValue for String {
    fn to_query_value(&self) -> QueryValue {
        QueryValue::Single(self.clone())
    }
}

impl ToQueryValue for bool {
    fn to_query_value(&self) -> QueryValue {
        QueryValue::Single(self.to_string())
    }
}

impl ToQueryValue for u32 {
    fn to_query_value(&self) -> QueryValue {
        QueryValue::Single(self.to_string())
    }
}

impl ToQueryValue for u64 {
    fn to_query_value(&self) -> QueryValue {
        QueryValue::Single(self.to_string())
    }
}

impl ToQueryValue for DateTime<Utc> {
    fn to_query_value(&self) -> QueryValue {
        QueryValue::Single(format_instant(self))
    }
}

impl ToQueryValue for Vec<DateTime<Utc>> {
    fn to_query_value(&self) -> QueryValue {
        QueryValue::Multiple(self.iter().map(format_instant).collect())
    }
}

impl ToQueryValue for IdList {
    fn to_query_value(&self) -> QueryValue {
        match self {
            IdList::One(id) => QueryValue::Single(id.clone()),
            IdList::Many(ids) => QueryValue::Multiple(ids.clone()),
        }
    }
}

fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Flat mapping from PI parameter names to values, holding only set criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<&'static str, QueryValue>);

impl QueryParams {
    fn insert(&mut self, key: &'static str, value: QueryValue) {
        self.0.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Parameter names present in the mapping, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds `documentFormat=PI_JSON`, which every outgoing request carries.
    pub fn with_document_format(mut self) -> Self {
        self.insert(DOCUMENT_FORMAT_KEY, QueryValue::from(PI_JSON));
        self
    }

    /// Expands the mapping into `(name, value)` pairs, repeating the name once
    /// per entry of a multi-valued parameter.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            match value {
                QueryValue::Single(v) => pairs.push((*key, v.clone())),
                QueryValue::Multiple(vs) => pairs.extend(vs.iter().map(|v| (*key, v.clone()))),
            }
        }
        pairs
    }
}

/// Filter and output-shaping criteria accepted by the PI service.
///
/// Build with [`QueryCriteria::builder`]; every setter is optional and any
/// criterion that is not set is omitted from the request. No cross-field
/// consistency is checked here (e.g. `filter_id` versus `location_ids`); the
/// service enforces which combinations are legal.
///
/// # Examples
///
/// ```
/// use fews_pi::QueryCriteria;
/// use chrono::{TimeZone, Utc};
///
/// let criteria = QueryCriteria::builder()
///     .location_ids("6362")
///     .parameter_ids(vec!["Q.sim", "H.sim"])
///     .module_instance_ids("MGB_Forecast")
///     .start_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
///     .build();
///
/// let params = criteria.to_query();
/// assert_eq!(params.len(), 4);
/// assert!(!params.contains_key("endTime"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct QueryCriteria {
    // --- identifiers ---
    /// Id of a FEWS filter grouping locations and parameters.
    #[builder(into)]
    pub filter_id: Option<String>,
    #[builder(into)]
    pub location_ids: Option<IdList>,
    #[builder(into)]
    pub parameter_ids: Option<IdList>,
    #[builder(into)]
    pub qualifier_ids: Option<IdList>,
    #[builder(into)]
    pub module_instance_ids: Option<IdList>,
    #[builder(into)]
    pub task_run_ids: Option<IdList>,
    #[builder(into)]
    pub ensemble_id: Option<String>,
    #[builder(into)]
    pub ensemble_member_id: Option<String>,
    #[builder(into)]
    pub time_step_id: Option<String>,
    /// Display group plot id, used by `/timeseries/displaygroups`.
    #[builder(into)]
    pub plot_id: Option<String>,
    /// Display group node id, used by `/timeseries/displaygroups`.
    #[builder(into)]
    pub node_id: Option<String>,
    /// e.g. `EXTERNAL_HISTORICAL`, `SIMULATED_FORECASTING`.
    #[builder(into)]
    pub time_series_type: Option<String>,

    // --- time windows ---
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub start_forecast_time: Option<DateTime<Utc>>,
    pub end_forecast_time: Option<DateTime<Utc>>,
    pub start_creation_time: Option<DateTime<Utc>>,
    pub end_creation_time: Option<DateTime<Utc>>,
    pub external_forecast_times: Option<Vec<DateTime<Utc>>>,

    // --- counts ---
    /// Number of most recent forecasts to return.
    pub forecast_count: Option<u32>,
    /// Thinning resolution in milliseconds.
    pub thinning: Option<u64>,
    pub time_series_set_index: Option<u32>,

    // --- output shaping ---
    pub only_headers: Option<bool>,
    pub only_forecasts: Option<bool>,
    pub only_manual_edits: Option<bool>,
    pub show_statistics: Option<bool>,
    pub omit_missing: Option<bool>,
    pub omit_empty_time_series: Option<bool>,
    pub show_ensemble_member_ids: Option<bool>,
    pub show_thresholds: Option<bool>,
    pub show_products: Option<bool>,
    pub show_location_attributes: Option<bool>,
    /// `/locations` only.
    pub show_attributes: Option<bool>,
    pub show_parent_locations: Option<bool>,
    pub include_location_relations: Option<bool>,
    pub include_time_dependency: Option<bool>,
    pub include_icon_names: Option<bool>,
    pub use_display_units: Option<bool>,
    pub convert_datum: Option<bool>,
    pub import_from_external_data_source: Option<bool>,

    // --- format ---
    #[builder(into)]
    pub document_version: Option<String>,
}

macro_rules! forward_set {
    ($params:ident, $( $field:expr => $key:literal ),* $(,)?) => {
        $(
            if let Some(value) = &$field {
                $params.insert($key, value.to_query_value());
            }
        )*
    };
}

impl QueryCriteria {
    /// Translates the criteria into PI request parameters, forwarding only the
    /// criteria that were set.
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::default();
        forward_set!(params,
            self.filter_id => "filterId",
            self.location_ids => "locationIds",
            self.parameter_ids => "parameterIds",
            self.qualifier_ids => "qualifierIds",
            self.module_instance_ids => "moduleInstanceIds",
            self.task_run_ids => "taskRunIds",
            self.ensemble_id => "ensembleId",
            self.ensemble_member_id => "ensembleMemberId",
            self.time_step_id => "timeStepId",
            self.plot_id => "plotId",
            self.node_id => "nodeId",
            self.time_series_type => "timeSeriesType",
            self.start_time => "startTime",
            self.end_time => "endTime",
            self.start_forecast_time => "startForecastTime",
            self.end_forecast_time => "endForecastTime",
            self.start_creation_time => "startCreationTime",
            self.end_creation_time => "endCreationTime",
            self.external_forecast_times => "externalForecastTimes",
            self.forecast_count => "forecastCount",
            self.thinning => "thinning",
            self.time_series_set_index => "timeSeriesSetIndex",
            self.only_headers => "onlyHeaders",
            self.only_forecasts => "onlyForecasts",
            self.only_manual_edits => "onlyManualEdits",
            self.show_statistics => "showStatistics",
            self.omit_missing => "omitMissing",
            self.omit_empty_time_series => "omitEmptyTimeSeries",
            self.show_ensemble_member_ids => "showEnsembleMemberIds",
            self.show_thresholds => "showThresholds",
            self.show_products => "showProducts",
            self.show_location_attributes => "showLocationAttributes",
            self.show_attributes => "showAttributes",
            self.show_parent_locations => "showParentLocations",
            self.include_location_relations => "includeLocationRelations",
            self.include_time_dependency => "includeTimeDependency",
            self.include_icon_names => "includeIconNames",
            self.use_display_units => "useDisplayUnits",
            self.convert_datum => "convertDatum",
            self.import_from_external_data_source => "importFromExternalDataSource",
            self.document_version => "documentVersion",
        );
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_criteria_yield_no_params() {
        let params = QueryCriteria::default().to_query();
        assert!(params.is_empty());
        assert!(QueryCriteria::builder().build().to_query().is_empty());
    }

    #[test]
    fn test_key_set_equals_set_fields() {
        let criteria = QueryCriteria::builder()
            .filter_id("MGB")
            .start_forecast_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .only_headers(false)
            .forecast_count(2)
            .document_version("1.32")
            .build();

        let keys: Vec<&str> = criteria.to_query().keys().collect();
        assert_eq!(
            keys,
            [
                "documentVersion",
                "filterId",
                "forecastCount",
                "onlyHeaders",
                "startForecastTime"
            ]
        );
    }

    #[test]
    fn test_every_field_is_forwarded_when_set() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let criteria = QueryCriteria::builder()
            .filter_id("f")
            .location_ids("l")
            .parameter_ids("p")
            .qualifier_ids("q")
            .module_instance_ids("m")
            .task_run_ids("t")
            .ensemble_id("e")
            .ensemble_member_id("em")
            .time_step_id("ts")
            .plot_id("plot")
            .node_id("node")
            .time_series_type("EXTERNAL_FORECASTING")
            .start_time(t)
            .end_time(t)
            .start_forecast_time(t)
            .end_forecast_time(t)
            .start_creation_time(t)
            .end_creation_time(t)
            .external_forecast_times(vec![t])
            .forecast_count(1)
            .thinning(3_600_000)
            .time_series_set_index(0)
            .only_headers(true)
            .only_forecasts(true)
            .only_manual_edits(true)
            .show_statistics(true)
            .omit_missing(true)
            .omit_empty_time_series(true)
            .show_ensemble_member_ids(true)
            .show_thresholds(true)
            .show_products(true)
            .show_location_attributes(true)
            .show_attributes(true)
            .show_parent_locations(true)
            .include_location_relations(true)
            .include_time_dependency(true)
            .include_icon_names(true)
            .use_display_units(true)
            .convert_datum(true)
            .import_from_external_data_source(true)
            .document_version("1.32")
            .build();

        let params = criteria.to_query();
        assert_eq!(params.len(), 41);
        assert!(!params.contains_key(DOCUMENT_FORMAT_KEY));
    }

    #[test]
    fn test_value_rendering() {
        let criteria = QueryCriteria::builder()
            .start_time(Utc.with_ymd_and_hms(2024, 1, 1, 6, 30, 0).unwrap())
            .omit_missing(false)
            .thinning(900_000)
            .build();
        let params = criteria.to_query();

        assert_eq!(
            params.get("startTime"),
            Some(&QueryValue::Single("2024-01-01T06:30:00Z".to_string()))
        );
        assert_eq!(
            params.get("omitMissing"),
            Some(&QueryValue::Single("false".to_string()))
        );
        assert_eq!(
            params.get("thinning"),
            Some(&QueryValue::Single("900000".to_string()))
        );
    }

    #[test]
    fn test_scalar_and_sequence_ids() {
        let criteria = QueryCriteria::builder()
            .location_ids(6362_u32)
            .parameter_ids(vec!["Q.sim", "H.sim"])
            .qualifier_ids(["max"])
            .build();
        let params = criteria.to_query();

        assert_eq!(
            params.get("locationIds"),
            Some(&QueryValue::Single("6362".to_string()))
        );
        assert_eq!(
            params.get("parameterIds"),
            Some(&QueryValue::Multiple(vec![
                "Q.sim".to_string(),
                "H.sim".to_string()
            ]))
        );
        // A one-element sequence stays a sequence.
        assert_eq!(
            params.get("qualifierIds"),
            Some(&QueryValue::Multiple(vec!["max".to_string()]))
        );
    }

    #[test]
    fn test_pairs_repeat_multi_valued_params() {
        let params = QueryCriteria::builder()
            .location_ids(vec!["a", "b"])
            .build()
            .to_query()
            .with_document_format();

        assert_eq!(
            params.to_pairs(),
            vec![
                ("documentFormat", "PI_JSON".to_string()),
                ("locationIds", "a".to_string()),
                ("locationIds", "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_id_list_from_iterator() {
        let ids: IdList = ["1", "2", "3"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            ids,
            IdList::Many(vec!["1".to_string(), "2".to_string(), "3".to_string()])
        );
    }
}
