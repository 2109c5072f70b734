//! Black-box flow tests: serialized request in, serialized response out.

use std::sync::Arc;
use std::thread;

use stockcast_forecast::{
    predict_stock, ForecastDispatcher, InMemoryForecastSink, PredictStockRequest,
    PredictStockResponse,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

fn wire_request(model_kind: &str, history: Vec<f64>, horizon: u32) -> PredictStockRequest {
    PredictStockRequest {
        model_kind: model_kind.to_string(),
        consumable_id: "consumable-7".to_string(),
        history_data: history,
        horizon_days: horizon,
    }
}

#[test]
fn trend_request_round_trips_through_json() {
    init_tracing();
    let dispatcher = ForecastDispatcher::new(InMemoryForecastSink::new());

    let json = r#"{
        "modelKind": "trend",
        "consumableId": "consumable-7",
        "historyData": [10.0, 20.0, 30.0, 40.0, 50.0],
        "horizonDays": 3
    }"#;
    let request: PredictStockRequest = serde_json::from_str(json).unwrap();
    let response = predict_stock(&dispatcher, request);

    assert!(response.success);
    assert!(!response.degraded);
    assert_eq!(response.data.as_deref(), Some(&[60, 70, 80][..]));

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["data"][0], 60);
    assert!(value.get("error").is_none());
}

#[test]
fn short_history_yields_a_degraded_response_not_an_error() {
    init_tracing();
    let sink = Arc::new(InMemoryForecastSink::new());
    let dispatcher = ForecastDispatcher::new(Arc::clone(&sink));

    let response = predict_stock(&dispatcher, wire_request("trend", vec![100.0], 3));

    assert!(response.success);
    assert!(response.degraded);
    assert_eq!(response.data.as_deref(), Some(&[99, 98, 97][..]));
    assert!(response.error.is_none());

    // The degraded call is still recorded for diagnostics.
    let records = sink.all();
    assert_eq!(records.len(), 1);
    assert!(records[0].degraded);
}

#[test]
fn unknown_model_kind_is_an_explicit_failure() {
    init_tracing();
    let dispatcher = ForecastDispatcher::new(InMemoryForecastSink::new());

    let response = predict_stock(&dispatcher, wire_request("nonexistent", vec![1.0, 2.0], 3));

    assert!(!response.success);
    assert!(response.data.is_none());
    assert_eq!(response.error.as_deref(), Some("UnsupportedModel"));
}

#[test]
fn response_shape_survives_a_full_serde_round_trip() {
    init_tracing();
    let dispatcher = ForecastDispatcher::new(InMemoryForecastSink::new());
    let history: Vec<f64> = (0..14).map(|i| 30.0 + f64::from(i)).collect();

    let response = predict_stock(
        &dispatcher,
        wire_request("differenced-autoregressive", history, 7),
    );
    assert!(response.success);
    assert_eq!(response.data.as_ref().map(Vec::len), Some(7));

    let json = serde_json::to_string(&response).unwrap();
    let reparsed: PredictStockResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed, response);
}

#[test]
fn one_dispatcher_serves_concurrent_requests() {
    init_tracing();
    let sink = Arc::new(InMemoryForecastSink::new());
    let dispatcher = Arc::new(ForecastDispatcher::new(Arc::clone(&sink)));

    let handles: Vec<_> = ["trend", "differenced-autoregressive", "smoothed-window"]
        .into_iter()
        .map(|kind| {
            let dispatcher = Arc::clone(&dispatcher);
            thread::spawn(move || {
                let history: Vec<f64> = (0..20).map(|i| 50.0 + f64::from(i % 4)).collect();
                predict_stock(&dispatcher, wire_request(kind, history, 10))
            })
        })
        .collect();

    for handle in handles {
        let response = handle.join().unwrap();
        assert!(response.success);
        assert_eq!(response.data.as_ref().map(Vec::len), Some(10));
    }

    assert_eq!(sink.all().len(), 3);
}
