//! Row-oriented Polars tables built from parsed series and stations.
//!
//! Every table has a fixed column set; empty input yields an empty table with
//! the same columns.

pub mod observation_frame;
pub mod station_frame;
pub mod summary_frame;
