//! demos/plot_series.rs
//!
//! Fetches one forecast series from the FEWS PI service and plots it with `plotlars`.
//!
//! To run this demo:
//! cargo run --example plot_series --features plotting

use std::error::Error;

use chrono::{TimeZone, Utc};
use fews_pi::PiClient;
use plotlars::{Plot, Rgb, Text, TimeSeriesPlot};
use polars::prelude::*;

const MODULE_INSTANCE_ID: &str = "MGB_Forecast";

fn main() -> Result<(), Box<dyn Error>> {
    println!("Fetching forecast from the FEWS PI service...");

    let client = PiClient::new();
    let (series, frame) = client
        .single_series()
        .location_id("6362")
        .parameter_id("Q.sim")
        .module_instance_id(MODULE_INSTANCE_ID)
        .start_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .end_time(Utc.with_ymd_and_hms(2025, 3, 20, 0, 0, 0).unwrap())
        .call()?;

    println!("{}", frame);
    plot_values(&frame, &series.chart_title(MODULE_INSTANCE_ID));
    println!("Plot shown in browser.");

    Ok(())
}

/// Plots the `value` column of an observation table against `date`.
fn plot_values(data: &DataFrame, title: &str) {
    TimeSeriesPlot::builder()
        .data(data)
        .x("date")
        .y("value")
        .colors(vec![Rgb(69, 157, 230)])
        .plot_title(Text::from(title).font("Arial").size(18))
        .x_title("date")
        .y_title("value")
        .build()
        .plot();
}
