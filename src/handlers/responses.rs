//! Reply payloads and the spoken guidance handed back to the voice agent.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::core::models::NormalizedPark;

pub const INVALID_ZIP_MESSAGE: &str = "Missing or invalid ZIP code.";

pub const INVALID_PARK_LOCATION_MESSAGE: &str =
    "Missing or invalid park_location. We need a valid US City and State.";

pub const NO_PARKS_NEXT_STEPS: &str = "Advise the caller that no parks were found, and try again with a new zip code. \
     Say: 'There doesn't seem to be any parks within an hour of your zip code. \
     Do you have another zip code in mind?'";

pub const VALIDATION_FAILED_NEXT_STEPS: &str = "Something went wrong validating the park location, try using the zip code flow. Say: \
     'I’m sorry, I wasn't able to find your park. Let's try a different approach. What's your five digit code?'";

pub const BOOKING_RETRY_NEXT_STEP: &str = "Booking cart creation has failed. Please try again.";

pub const BOOKING_ONLINE_FLOW_NEXT_STEP: &str =
    "Booking cart creation has failed. Refer them to the online flow and end the call.";

/// A reply that carries nothing but guidance for the agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextSteps {
    pub next_steps: String,
}

impl NextSteps {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            next_steps: text.into(),
        }
    }
}

#[must_use]
pub fn confirm_nearest_park(name: &str, distance: &str) -> String {
    format!(
        "Confirm the nearest park {name} with the caller. Say: \
         'It looks like the nearest park to you is {name}, which is about {distance} \
         away from you. Does that sound okay?'"
    )
}

#[must_use]
pub fn confirm_validated_park(name: &str) -> String {
    format!(
        "The park {name} has been successfully validated. \
         Confirm the park address. (Fill in the correct values below. Translate abbreviations into full words.) \
         Say: 'Great, found it! This is our {name} location at [Street Address]. Zip Code: [Zip Code]. Does that address sound okay?.'"
    )
}

#[must_use]
pub fn park_not_found(park_location: &str) -> String {
    format!(
        "Advise the caller that \"{park_location}\" couldn't be validated and switch to the zip code flow. Say: \
         'I’m sorry, I couldn't find a park named {park_location}. \
         Let's try a different approach. What's your five digit code?'"
    )
}

#[must_use]
pub fn booking_created(cart_id: Option<&str>) -> String {
    format!(
        "Booking cart has been created successfully, with Cart ID: '{}'. \
         Immediately transition to decide_date_and_time to pull up the Park's Calendar and Availability. ",
        cart_id.unwrap_or("unknown")
    )
}

/// Serializes a missing park as `{}` so the agent script always sees an object.
pub fn empty_object_if_none<S>(park: &Option<NormalizedPark>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match park {
        Some(p) => p.serialize(serializer),
        None => Map::<String, Value>::new().serialize(serializer),
    }
}
