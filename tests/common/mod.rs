#![allow(dead_code)]

use parkhooks::clients::ParksClient;
use parkhooks::core::config::AppConfig;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SEARCH_PATH: &str = "/parks-service/parks/search";
pub const DIRECTORY_PATH: &str = "/brands/1/parks";

/// Points both park endpoints at the mock server.
pub fn parks_client(server: &MockServer) -> ParksClient {
    let config = AppConfig {
        parks_api_url: server.uri(),
        directory_api_url: server.uri(),
        ..AppConfig::default()
    };
    ParksClient::new(reqwest::Client::new(), &config)
}

pub fn park_json(id: i64, name: &str, miles: f64, zip: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "distanceInMiles": miles,
        "timezone": "America/Chicago",
        "phoneNumber": "(555) 010-0100",
        "urlSlug": name.to_lowercase().replace(' ', "-"),
        "address": {
            "streetAddress": format!("{id} Main St"),
            "city": "Frisco",
            "state": "TX",
            "zipCode": zip
        }
    })
}

pub async fn mount_search(server: &MockServer, miles: &str, parks: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("distanceInMiles", miles))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": parks })))
        .expect(expected_calls)
        .mount(server)
        .await;
}
