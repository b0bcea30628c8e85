use tracing::warn;

use crate::clients::ParksClient;
use crate::core::models::ParkRecord;
use crate::errors::HandlerError;

/// Radii tried in order by the ZIP code flow.
pub const ESCALATING_RADII_MILES: [u32; 2] = [50, 100];

/// Fixed radius used once a park name has been resolved to a ZIP code.
pub const VALIDATED_RADIUS_MILES: u32 = 100;

/// Searches each radius in turn and returns the first non-empty result.
///
/// A larger radius is only tried when the previous one came back empty;
/// request failures are returned immediately.
pub async fn search_with_escalation(
    client: &ParksClient,
    zip: &str,
    radii: &[u32],
) -> Result<Vec<ParkRecord>, HandlerError> {
    for &miles in radii {
        let parks = client.search(zip, miles).await?;
        if !parks.is_empty() {
            return Ok(parks);
        }
        warn!("No parks found within {} miles of {}", miles, zip);
    }
    Err(HandlerError::NoParksFound {
        zip: zip.to_string(),
    })
}
