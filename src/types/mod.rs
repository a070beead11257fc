pub mod query;
pub mod raw;
pub mod series;
pub mod station;
