use lambda_runtime::{Error, LambdaEvent};
use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use super::responses::{self, NextSteps, empty_object_if_none};
use crate::clients::ParksClient;
use crate::core::config::AppConfig;
use crate::core::input::resolve_arg;
use crate::core::models::{DirectoryPark, NormalizedPark, RankedParks};
use crate::errors::HandlerError;
use crate::parks::{VALIDATED_RADIUS_MILES, rank_parks, search_with_escalation};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedParkResponse {
    pub nearest_park: NormalizedPark,
    #[serde(serialize_with = "empty_object_if_none")]
    pub back_up_park_one: Option<NormalizedPark>,
    #[serde(serialize_with = "empty_object_if_none")]
    pub back_up_park_two: Option<NormalizedPark>,
    pub next_steps: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidatedParkReply {
    Validated(ValidatedParkResponse),
    Fallback(NextSteps),
}

/// Case-insensitive exact match on the park name.
#[must_use]
pub fn find_by_name<'a>(parks: &'a [DirectoryPark], name: &str) -> Option<&'a DirectoryPark> {
    let wanted = name.to_lowercase();
    parks
        .iter()
        .find(|p| p.name.as_deref().is_some_and(|n| n.to_lowercase() == wanted))
}

/// Resolves a spoken park name to a directory entry, then ranks the parks around it.
///
/// # Errors
///
/// Returns [`HandlerError::InvalidInput`] when `park_location` is missing or
/// blank. Every other failure becomes a [`ValidatedParkReply::Fallback`].
pub async fn validate_park_location(
    client: &ParksClient,
    event: &Value,
) -> Result<ValidatedParkReply, HandlerError> {
    let Some(park_location) = resolve_arg(event, "park_location") else {
        error!("Missing or invalid park_location.");
        return Err(HandlerError::InvalidInput(
            responses::INVALID_PARK_LOCATION_MESSAGE.to_string(),
        ));
    };
    let park_location = park_location.trim();
    info!("Validating park location {:?}", park_location);

    match lookup(client, park_location).await {
        Ok(Some(ranked)) => {
            let next_steps = responses::confirm_validated_park(&ranked.nearest.name);
            let response = ValidatedParkResponse {
                nearest_park: ranked.nearest,
                back_up_park_one: ranked.backup_one,
                back_up_park_two: ranked.backup_two,
                next_steps,
            };
            info!(response = ?response, "Returning validated park");
            Ok(ValidatedParkReply::Validated(response))
        }
        Ok(None) => Ok(ValidatedParkReply::Fallback(NextSteps::new(
            responses::park_not_found(park_location),
        ))),
        Err(e) => {
            error!("Park validation failed: {}", e);
            Ok(ValidatedParkReply::Fallback(NextSteps::new(
                responses::VALIDATION_FAILED_NEXT_STEPS,
            )))
        }
    }
}

/// `Ok(None)` means the name is not in the directory.
async fn lookup(
    client: &ParksClient,
    park_location: &str,
) -> Result<Option<RankedParks>, HandlerError> {
    let all_parks = client.list_all().await?;
    let Some(matched) = find_by_name(&all_parks, park_location) else {
        info!("No directory match for {:?}", park_location);
        return Ok(None);
    };

    let Some(zip) = matched.zip_code() else {
        return Err(HandlerError::MissingZip {
            park: park_location.to_string(),
        });
    };
    info!("Matched {:?} at ZIP {}", matched.name, zip);
    let nearby = search_with_escalation(client, zip, &[VALIDATED_RADIUS_MILES]).await?;

    rank_parks(nearby)
        .map(Some)
        .ok_or_else(|| HandlerError::NoParksFound {
            zip: zip.to_string(),
        })
}

/// Lambda handler for park name validation.
#[tracing::instrument(level = "info", skip(http, config, event))]
pub async fn function_handler(
    http: &HttpClient,
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<ValidatedParkReply, Error> {
    info!("Received event: {}", event.payload);
    let client = ParksClient::new(http.clone(), config);
    validate_park_location(&client, &event.payload)
        .await
        .map_err(super::into_lambda_error)
}
