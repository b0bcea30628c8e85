//! parkhooks - Voice-agent webhooks for finding parks and starting a booking.
//!
//! This crate backs three independent AWS Lambda functions called by an IVR
//! conversational agent:
//! 1. `create-booking-cart` forwards a booking payload and reports the cart id
//! 2. `find-nearest-parks` ranks the parks closest to a caller's ZIP code
//! 3. `validate-park-location` resolves a spoken park name and ranks the parks around it
//!
//! Every reply carries a `next_steps`/`next_step` instruction for the agent.
//! Only malformed caller input surfaces as a Lambda error; upstream failures
//! degrade into a spoken fallback.
//!
//! # Example
//!
//! ```no_run
//! use parkhooks::clients::ParksClient;
//! use parkhooks::core::config::AppConfig;
//! use parkhooks::handlers::find_nearest_parks::find_nearest_parks;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     parkhooks::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let client = ParksClient::new(reqwest::Client::new(), &config);
//!     let event = serde_json::json!({ "args": { "zip_code": "75034" } });
//!
//!     let reply = find_nearest_parks(&client, &event).await?;
//!     println!("{}", serde_json::to_string_pretty(&reply)?);
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod core;
pub mod errors;
pub mod handlers;
pub mod parks;

pub use errors::HandlerError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. Call it once at the start of each Lambda binary. Later calls are
/// ignored.
///
/// # Example
///
/// ```
/// parkhooks::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
