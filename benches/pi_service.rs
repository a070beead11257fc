use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fews_pi::raw::RawTimeSeriesResponse;
use fews_pi::{parse_series, series_summary_frame, QueryCriteria};

/// A one-series PI_JSON document with `n` hourly events, every tenth one missing.
fn synthetic_document(n: usize) -> String {
    let events: Vec<String> = (0..n)
        .map(|i| {
            let value = if i % 10 == 0 {
                "-999".to_string()
            } else {
                format!("{}.25", i)
            };
            format!(
                r#"{{"date":"2024-{:02}-{:02}","time":"{:02}:00:00","value":"{}","flag":"0"}}"#,
                (i / 24 / 28) % 12 + 1,
                (i / 24) % 28 + 1,
                i % 24,
                value
            )
        })
        .collect();
    format!(
        r#"{{"timeSeries":[{{"header":{{"locationId":"6362","parameterId":"Q.sim",
        "timeStep":{{"unit":"second","multiplier":"3600"}},
        "forecastDate":{{"date":"2024-01-01","time":"00:00:00"}},
        "stationName":"Rosario","lat":"-32.94","lon":"-60.63","units":"m3/s"}},
        "events":[{}]}}]}}"#,
        events.join(",")
    )
}

fn bench_parsing(c: &mut Criterion) {
    let document = synthetic_document(8_000);
    let response: RawTimeSeriesResponse = serde_json::from_str(&document).unwrap();

    c.bench_function("decode_document", |b| {
        b.iter(|| serde_json::from_str::<RawTimeSeriesResponse>(black_box(&document)))
    });
    c.bench_function("parse_series", |b| {
        b.iter(|| parse_series(black_box(&response.time_series[0])))
    });

    let parsed = vec![parse_series(&response.time_series[0]).unwrap(); 100];
    c.bench_function("series_summary_frame", |b| {
        b.iter(|| series_summary_frame(black_box(&parsed)))
    });

    let criteria = QueryCriteria::builder()
        .location_ids(vec!["6362", "5965"])
        .parameter_ids("Q.sim")
        .only_forecasts(true)
        .build();
    c.bench_function("criteria_to_query", |b| {
        b.iter(|| black_box(&criteria).to_query().to_pairs())
    });
}

criterion_group!(benches, bench_parsing);
criterion_main!(benches);
