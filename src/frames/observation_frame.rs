//! Observation tables (`date`, `value`) and the `ObservationLazyFrame` wrapper.

use crate::types::series::{Observation, ParsedSeries};
use chrono::{DateTime, NaiveDateTime, Utc};
use polars::prelude::*;

/// Column names of an observation table, in order.
pub const OBSERVATION_COLUMNS: [&str; 2] = ["date", "value"];

/// Builds a `[date, value]` table from observations, keeping their order.
///
/// # Arguments
///
/// * `observations` - The retained observations of one series, sentinel values
///   already removed.
///
/// # Returns
///
/// A `DataFrame` with the [`OBSERVATION_COLUMNS`] layout. `date` is a Datetime
/// column holding the UTC wall clock and `value` a Float64 column. An empty
/// slice gives an empty table that still has both columns.
pub fn observations_frame(observations: &[Observation]) -> PolarsResult<DataFrame> {
    let dates: Vec<NaiveDateTime> = observations
        .iter()
        .map(|o| o.timestamp.naive_utc())
        .collect();
    let values: Vec<f64> = observations.iter().map(|o| o.value).collect();
    df!(
        OBSERVATION_COLUMNS[0] => dates,
        OBSERVATION_COLUMNS[1] => values
    )
}

impl ParsedSeries {
    /// The observation table of this series.
    pub fn observations_frame(&self) -> PolarsResult<DataFrame> {
        observations_frame(&self.data.observations)
    }
}

/// A wrapper around a Polars `LazyFrame` holding an observation table.
///
/// Filtering stays lazy until `.frame.collect()` is called.
#[derive(Clone)]
pub struct ObservationLazyFrame {
    /// The underlying Polars LazyFrame with `date` and `value` columns.
    pub frame: LazyFrame,
}

impl ObservationLazyFrame {
    /// Creates a new `ObservationLazyFrame` wrapping the given Polars `LazyFrame`.
    ///
    /// # Arguments
    ///
    /// * `frame` - A `LazyFrame` with the `date` and `value` columns built by
    ///   [`observations_frame`].
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    pub fn from_observations(observations: &[Observation]) -> PolarsResult<Self> {
        Ok(Self::new(observations_frame(observations)?.lazy()))
    }

    /// Filters the observations with an arbitrary Polars predicate.
    ///
    /// # Example
    ///
    /// ```
    /// use fews_pi::{Observation, ObservationLazyFrame};
    /// use chrono::{TimeZone, Utc};
    /// use polars::prelude::{col, lit};
    ///
    /// let observations = vec![
    ///     Observation { timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(), value: 1.0 },
    ///     Observation { timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(), value: 25.0 },
    /// ];
    /// let high = ObservationLazyFrame::from_observations(&observations)?
    ///     .filter(col("value").gt(lit(10.0f64)))
    ///     .frame
    ///     .collect()?;
    /// assert_eq!(high.height(), 1);
    /// # Ok::<(), polars::prelude::PolarsError>(())
    /// ```
    pub fn filter(&self, predicate: Expr) -> ObservationLazyFrame {
        ObservationLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps observations with `start <= date <= end`.
    ///
    /// Both bounds are inclusive and compared on the UTC wall clock stored in
    /// the `date` column.
    ///
    /// # Arguments
    ///
    /// * `start` - First instant to keep.
    /// * `end` - Last instant to keep.
    ///
    /// # Returns
    ///
    /// A new `ObservationLazyFrame` with the range filter applied lazily.
    pub fn get_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> ObservationLazyFrame {
        self.filter(
            col("date")
                .gt_eq(lit(start.naive_utc()))
                .and(col("date").lt_eq(lit(end.naive_utc()))),
        )
    }
}
