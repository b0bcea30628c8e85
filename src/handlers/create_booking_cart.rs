use lambda_runtime::{Error, LambdaEvent};
use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::responses;
use crate::clients::booking_client::cart_id;
use crate::clients::{BookingClient, BookingOutcome};
use crate::core::config::AppConfig;
use crate::core::input::booking_payload;

/// Reply for every booking outcome. Fields that don't apply are left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingCartResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(rename = "statusText", skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub next_step: String,
}

impl From<BookingOutcome> for BookingCartResponse {
    fn from(outcome: BookingOutcome) -> Self {
        match outcome {
            BookingOutcome::Created {
                status,
                status_text,
                data,
            } => Self {
                success: true,
                status: Some(status),
                status_text: Some(status_text),
                next_step: responses::booking_created(cart_id(&data).as_deref()),
                data: Some(data),
                message: None,
            },
            BookingOutcome::Rejected {
                status,
                status_text,
                data,
            } => Self {
                success: false,
                status: Some(status),
                status_text: Some(status_text),
                data: Some(data),
                message: None,
                next_step: responses::BOOKING_RETRY_NEXT_STEP.to_string(),
            },
            BookingOutcome::Unreachable { message } => Self {
                success: false,
                status: None,
                status_text: None,
                data: None,
                message: Some(message),
                next_step: responses::BOOKING_ONLINE_FLOW_NEXT_STEP.to_string(),
            },
        }
    }
}

/// Forwards the caller's booking payload and reshapes the outcome. Never fails.
pub async fn create_booking_cart(client: &BookingClient, event: &Value) -> BookingCartResponse {
    let payload = booking_payload(event);
    let response = BookingCartResponse::from(client.create_cart(&payload).await);
    info!(
        success = response.success,
        status = ?response.status,
        "Returning booking cart response"
    );
    response
}

/// Lambda handler for booking cart creation.
#[tracing::instrument(level = "info", skip(http, config, event))]
pub async fn function_handler(
    http: &HttpClient,
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<BookingCartResponse, Error> {
    info!("Received event: {}", event.payload);
    let client = BookingClient::new(http.clone(), config.booking_url.clone());
    Ok(create_booking_cart(&client, &event.payload).await)
}
