use fews_pi::{PiClient, PiServiceError, QueryCriteria};
use std::env;

fn main() -> Result<(), PiServiceError> {
    configure_polars_display();
    let client = PiClient::new();

    let (stations, frame) = client.fetch_locations_frame(&QueryCriteria::default())?;

    println!("{} locations", stations.len());
    println!("{}", frame);

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
