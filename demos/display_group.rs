//! Lists every series of the "MGB" display group, then prints the discharge
//! forecast at Ladario.

use chrono::{TimeZone, Utc};
use fews_pi::{find_series, series_summary_frame, PiClient, PiServiceError, QueryCriteria};

fn main() -> Result<(), PiServiceError> {
    let client = PiClient::new();
    let criteria = QueryCriteria::builder()
        .plot_id("MGB")
        .start_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .end_time(Utc.with_ymd_and_hms(2025, 3, 20, 0, 0, 0).unwrap())
        .build();

    let series = client.fetch_display_group_series(&criteria)?;
    println!("{}", series_summary_frame(&series)?);

    let ladario = find_series(&series, "5965", "Q.sim")?;
    println!("{}", ladario.chart_title("MGB"));
    println!("{}", ladario.observations_frame()?);

    Ok(())
}
