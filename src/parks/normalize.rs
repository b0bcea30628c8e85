use serde_json::{Map, Value};

use crate::core::models::{NormalizedPark, ParkAddress, ParkRecord, RankedParks};

/// Maximum number of parks considered for a single lookup.
pub const MAX_RANKED_PARKS: usize = 3;

/// Rounds to the nearest whole mile, halves up.
#[must_use]
pub fn format_distance(miles: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = (miles + 0.5).floor() as i64;
    format!("{rounded} miles")
}

#[must_use]
pub fn format_address(address: &ParkAddress) -> String {
    format!(
        "{} {}, {}, {}.",
        address.street_address, address.city, address.state, address.zip_code
    )
}

#[must_use]
pub fn normalize_park(park: &ParkRecord) -> NormalizedPark {
    NormalizedPark {
        name: park.name.clone(),
        distance: format_distance(park.distance_in_miles),
        timezone: park.timezone.clone(),
        phone_number: park.phone_number.clone(),
        address: format_address(&park.address),
        slug: park.url_slug.clone(),
        id: park.id.clone(),
    }
}

/// Sorts by distance, keeps the closest three and normalizes them.
///
/// Returns `None` for an empty list.
#[must_use]
pub fn rank_parks(mut parks: Vec<ParkRecord>) -> Option<RankedParks> {
    parks.sort_by(|a, b| a.distance_in_miles.total_cmp(&b.distance_in_miles));
    let mut normalized = parks.iter().take(MAX_RANKED_PARKS).map(normalize_park);

    Some(RankedParks {
        nearest: normalized.next()?,
        backup_one: normalized.next(),
        backup_two: normalized.next(),
    })
}

/// Flattens a park under `prefix`, e.g. `nearest_park`, `nearest_park_distance`, ...
///
/// An absent park yields an empty map.
#[must_use]
pub fn prefixed_fields(prefix: &str, park: Option<&NormalizedPark>) -> Map<String, Value> {
    let mut map = Map::new();
    let Some(park) = park else {
        return map;
    };

    let opt = |v: &Option<String>| v.clone().map_or(Value::Null, Value::String);
    map.insert(prefix.to_string(), Value::String(park.name.clone()));
    map.insert(
        format!("{prefix}_distance"),
        Value::String(park.distance.clone()),
    );
    map.insert(format!("{prefix}_timezone"), opt(&park.timezone));
    map.insert(format!("{prefix}_phone_number"), opt(&park.phone_number));
    map.insert(
        format!("{prefix}_address"),
        Value::String(park.address.clone()),
    );
    map.insert(format!("{prefix}_slug"), opt(&park.slug));
    map.insert(
        format!("{prefix}_id"),
        serde_json::to_value(&park.id).unwrap_or(Value::Null),
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ParkId;

    fn park(name: &str, miles: f64) -> ParkRecord {
        ParkRecord {
            name: name.to_string(),
            distance_in_miles: miles,
            timezone: Some("America/Chicago".to_string()),
            phone_number: Some("555-0100".to_string()),
            address: ParkAddress {
                street_address: "123 Main St".to_string(),
                city: "Frisco".to_string(),
                state: "TX".to_string(),
                zip_code: "75034".to_string(),
            },
            url_slug: Some(name.to_lowercase().replace(' ', "-")),
            id: ParkId::Number(7),
        }
    }

    #[test]
    fn distance_rounds_halves_up() {
        assert_eq!(format_distance(12.9), "13 miles");
        assert_eq!(format_distance(30.4), "30 miles");
        assert_eq!(format_distance(2.5), "3 miles");
        assert_eq!(format_distance(0.0), "0 miles");
    }

    #[test]
    fn address_is_single_line() {
        assert_eq!(
            format_address(&park("A", 1.0).address),
            "123 Main St Frisco, TX, 75034."
        );
    }

    #[test]
    fn ranking_sorts_and_keeps_three() {
        let ranked = rank_parks(vec![
            park("Far", 45.0),
            park("Near", 12.9),
            park("Mid", 30.4),
            park("Farthest", 80.0),
        ])
        .unwrap();
        assert_eq!(ranked.nearest.name, "Near");
        assert_eq!(ranked.nearest.distance, "13 miles");
        assert_eq!(ranked.backup_one.unwrap().distance, "30 miles");
        assert_eq!(ranked.backup_two.unwrap().name, "Far");
    }

    #[test]
    fn ranking_empty_list_is_none() {
        assert!(rank_parks(Vec::new()).is_none());
    }

    #[test]
    fn prefixed_fields_flatten_under_prefix() {
        let normalized = normalize_park(&park("Urban Air Frisco", 4.2));
        let map = prefixed_fields("back_up_park_one", Some(&normalized));
        assert_eq!(map["back_up_park_one"], "Urban Air Frisco");
        assert_eq!(map["back_up_park_one_distance"], "4 miles");
        assert_eq!(map["back_up_park_one_phone_number"], "555-0100");
        assert_eq!(map["back_up_park_one_slug"], "urban-air-frisco");
        assert_eq!(map["back_up_park_one_id"], 7);
        assert_eq!(map.len(), 7);
    }

    #[test]
    fn prefixed_fields_for_missing_park_is_empty() {
        assert!(prefixed_fields("back_up_park_two", None).is_empty());
    }
}
