use lambda_runtime::{Error, LambdaEvent};
use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{error, info};

use super::responses::{self, NextSteps};
use crate::clients::ParksClient;
use crate::core::config::AppConfig;
use crate::core::input::{resolve_zip_code, valid_zip};
use crate::errors::HandlerError;
use crate::parks::{ESCALATING_RADII_MILES, prefixed_fields, rank_parks, search_with_escalation};

/// Parks nearest to the caller, each flattened under its slot prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestParksResponse {
    pub nearest_park: Map<String, Value>,
    pub back_up_park_one: Map<String, Value>,
    pub back_up_park_two: Map<String, Value>,
    pub next_steps: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NearestParksReply {
    Found(NearestParksResponse),
    Fallback(NextSteps),
}

/// Resolves the caller's ZIP code and ranks the closest parks.
///
/// # Errors
///
/// Returns [`HandlerError::InvalidInput`] when no five-digit ZIP code was
/// supplied. Every other failure becomes a [`NearestParksReply::Fallback`].
pub async fn find_nearest_parks(
    client: &ParksClient,
    event: &Value,
) -> Result<NearestParksReply, HandlerError> {
    let raw_zip = resolve_zip_code(event).unwrap_or_default();
    info!("Raw ZIP input: {:?}", raw_zip);

    let Some(zip) = valid_zip(&raw_zip) else {
        error!("Missing or invalid ZIP code.");
        return Err(HandlerError::InvalidInput(
            responses::INVALID_ZIP_MESSAGE.to_string(),
        ));
    };

    let ranked = match search_with_escalation(client, zip, &ESCALATING_RADII_MILES).await {
        Ok(parks) => rank_parks(parks),
        Err(e) => {
            error!("Park search failed: {}", e);
            None
        }
    };

    let Some(ranked) = ranked else {
        return Ok(NearestParksReply::Fallback(NextSteps::new(
            responses::NO_PARKS_NEXT_STEPS,
        )));
    };

    let next_steps =
        responses::confirm_nearest_park(&ranked.nearest.name, &ranked.nearest.distance);
    let response = NearestParksResponse {
        nearest_park: prefixed_fields("nearest_park", Some(&ranked.nearest)),
        back_up_park_one: prefixed_fields("back_up_park_one", ranked.backup_one.as_ref()),
        back_up_park_two: prefixed_fields("back_up_park_two", ranked.backup_two.as_ref()),
        next_steps,
    };

    info!(
        nearest = ?response.nearest_park,
        back_up_one = ?response.back_up_park_one,
        back_up_two = ?response.back_up_park_two,
        "Returning nearest parks"
    );
    Ok(NearestParksReply::Found(response))
}

/// Lambda handler for the nearest-park lookup.
#[tracing::instrument(level = "info", skip(http, config, event))]
pub async fn function_handler(
    http: &HttpClient,
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<NearestParksReply, Error> {
    info!("Received event: {}", event.payload);
    let client = ParksClient::new(http.clone(), config);
    find_nearest_parks(&client, &event.payload)
        .await
        .map_err(super::into_lambda_error)
}
