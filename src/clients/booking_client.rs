//! Booking cart API client

use reqwest::Client;
use serde_json::Value;
use tracing::{error, info};

/// Result of a single cart-creation attempt. Every variant is a normal outcome for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// The endpoint answered with a 2xx status.
    Created {
        status: u16,
        status_text: String,
        data: Value,
    },
    /// The endpoint answered with a non-2xx status.
    Rejected {
        status: u16,
        status_text: String,
        data: Value,
    },
    /// No response was received.
    Unreachable { message: String },
}

pub struct BookingClient {
    http: Client,
    booking_url: Option<String>,
}

impl BookingClient {
    pub fn new(http: Client, booking_url: Option<String>) -> Self {
        Self { http, booking_url }
    }

    /// POSTs `payload` to the booking endpoint once. Never retries.
    pub async fn create_cart(&self, payload: &Value) -> BookingOutcome {
        let Some(url) = self.booking_url.as_deref() else {
            error!("BOOKING_URL is not configured");
            return BookingOutcome::Unreachable {
                message: "BOOKING_URL is not configured".to_string(),
            };
        };

        info!("Creating booking cart at {}", url);
        let resp = match self.http.post(url).json(payload).send().await {
            Ok(resp) => resp,
            Err(e) => {
                error!("Booking cart request failed: {}", e);
                return BookingOutcome::Unreachable {
                    message: e.to_string(),
                };
            }
        };

        let status = resp.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let data = match resp.text().await {
            Ok(body) => decode_body(&body),
            Err(e) => {
                error!("Failed to read booking cart response body: {}", e);
                Value::Null
            }
        };

        if status.is_success() {
            info!("Booking cart created: status={}", status);
            BookingOutcome::Created {
                status: status.as_u16(),
                status_text,
                data,
            }
        } else {
            error!("Booking cart creation rejected: status={} body={}", status, data);
            BookingOutcome::Rejected {
                status: status.as_u16(),
                status_text,
                data,
            }
        }
    }
}

/// JSON bodies are decoded; anything else is kept as text so it can still be echoed.
fn decode_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

/// Cart identifier from `data.data.cookieId`, or `data.cookieId` when there is no nested `data`.
#[must_use]
pub fn cart_id(data: &Value) -> Option<String> {
    let holder = match data.get("data") {
        Some(inner) if inner.is_object() => inner,
        _ => data,
    };
    match holder.get("cookieId")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cart_id_prefers_nested_data() {
        let data = json!({ "data": { "cookieId": "abc-123" }, "cookieId": "outer" });
        assert_eq!(cart_id(&data).as_deref(), Some("abc-123"));
    }

    #[test]
    fn cart_id_falls_back_to_top_level() {
        let data = json!({ "cookieId": "outer" });
        assert_eq!(cart_id(&data).as_deref(), Some("outer"));
        let data = json!({ "data": null, "cookieId": 42 });
        assert_eq!(cart_id(&data).as_deref(), Some("42"));
    }

    #[test]
    fn cart_id_missing() {
        assert!(cart_id(&json!({ "data": {} })).is_none());
        assert!(cart_id(&json!("plain text")).is_none());
    }

    #[test]
    fn non_json_bodies_are_kept_as_text() {
        assert_eq!(decode_body("oops"), json!("oops"));
        assert_eq!(decode_body(""), Value::Null);
        assert_eq!(decode_body(r#"{"a":1}"#), json!({ "a": 1 }));
    }
}
