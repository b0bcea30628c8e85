//! Webhook handlers, one per Lambda binary

pub mod create_booking_cart;
pub mod find_nearest_parks;
pub mod responses;
pub mod validate_park_location;

use tracing::{error, warn};

use crate::errors::HandlerError;

/// Maps a handler failure onto the Lambda error channel.
///
/// Only caller input problems reach this point; anything else is logged as unexpected.
pub(crate) fn into_lambda_error(error: HandlerError) -> lambda_runtime::Error {
    if error.is_invalid_input() {
        warn!("Rejecting invocation: {}", error);
    } else {
        error!("Unexpected handler failure: {}", error);
    }
    lambda_runtime::Error::from(error)
}
