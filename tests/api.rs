use std::net::TcpListener;

use once_cell::sync::Lazy;
use ride_booking_backend::run;
use serde_json::{json, Value};

static LOGGER: Lazy<()> = Lazy::new(|| {
  let _ = env_logger::builder().is_test(true).try_init();
});

// Binds the real server on an ephemeral port and returns its base URL.
fn spawn_app() -> String {
  Lazy::force(&LOGGER);

  let listener =
    TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
  let port = listener.local_addr().unwrap().port();
  let server = run(listener).expect("Failed to start server");
  actix_rt::spawn(server);
  format!("http://127.0.0.1:{}", port)
}

#[actix_rt::test]
async fn health_check_works() {
  let address = spawn_app();
  let client = reqwest::Client::new();

  let response = client
    .get(format!("{}/?ping=1", address))
    .send()
    .await
    .expect("Failed to execute request");

  assert!(response.status().is_success());
  let body: Value = response.json().await.unwrap();
  assert_eq!(body, json!({ "status": "Backend running" }));
}

#[actix_rt::test]
async fn book_returns_200_for_valid_payload() {
  let address = spawn_app();
  let client = reqwest::Client::new();

  let response = client
    .post(format!("{}/book", address))
    .json(&json!({ "pickup": "Main St", "dropoff": "Oak Ave" }))
    .send()
    .await
    .expect("Failed to execute request");

  assert_eq!(response.status().as_u16(), 200);
  let body: Value = response.json().await.unwrap();
  assert_eq!(
    body,
    json!({
      "message": "Booking received",
      "pickup": "Main St",
      "dropoff": "Oak Ave"
    })
  );
}

#[actix_rt::test]
async fn book_returns_422_for_malformed_payloads() {
  let address = spawn_app();
  let client = reqwest::Client::new();
  let test_cases = vec![
    (json!({ "dropoff": "Oak Ave" }), "missing pickup"),
    (json!({ "pickup": "Main St" }), "missing dropoff"),
    (json!({ "pickup": "Main St", "dropoff": 7 }), "numeric dropoff"),
    (json!({ "pickup": null, "dropoff": "Oak Ave" }), "null pickup"),
    (json!({}), "empty object"),
  ];

  for (payload, description) in test_cases {
    let response = client
      .post(format!("{}/book", address))
      .json(&payload)
      .send()
      .await
      .expect("Failed to execute request");

    assert_eq!(
      response.status().as_u16(),
      422,
      "The API did not fail with 422 when the payload was {}.",
      description
    );
    let body: Value = response.json().await.unwrap();
    assert!(body.get("message").is_none());
    assert_eq!(body["detail"][0]["loc"][0], "body");
  }
}

#[actix_rt::test]
async fn cors_preflight_allows_credentials_from_any_origin() {
  let address = spawn_app();
  let client = reqwest::Client::new();
  let origin = "http://10.0.0.5:8081";

  let response = client
    .request(reqwest::Method::OPTIONS, format!("{}/book", address))
    .header("Origin", origin)
    .header("Access-Control-Request-Method", "POST")
    .send()
    .await
    .expect("Failed to execute request");

  assert!(response.status().is_success());
  let headers = response.headers();
  assert_eq!(headers["access-control-allow-origin"], origin);
  assert_eq!(headers["access-control-allow-credentials"], "true");
}

#[actix_rt::test]
async fn book_accepts_json_without_content_type() {
  let address = spawn_app();
  let client = reqwest::Client::new();

  let response = client
    .post(format!("{}/book", address))
    .body(r#"{"pickup":"Main St","dropoff":"Oak Ave"}"#)
    .send()
    .await
    .expect("Failed to execute request");

  assert_eq!(response.status().as_u16(), 200);
  let body: Value = response.json().await.unwrap();
  assert_eq!(body["pickup"], "Main St");
  assert_eq!(body["dropoff"], "Oak Ave");
}

#[actix_rt::test]
async fn quote_prices_a_ride() {
  let address = spawn_app();
  let client = reqwest::Client::new();

  let response = client
    .post(format!("{}/quote", address))
    .json(&json!({ "tier": "Business", "passengers": 4, "luggage": 3 }))
    .send()
    .await
    .expect("Failed to execute request");

  assert_eq!(response.status().as_u16(), 200);
  let body: Value = response.json().await.unwrap();
  assert_eq!(body, json!({ "quote": 118 }));
}
