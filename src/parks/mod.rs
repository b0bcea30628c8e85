//! Park search, normalization and ranking shared by the park handlers

pub mod normalize;
pub mod search;

pub use normalize::{normalize_park, prefixed_fields, rank_parks};
pub use search::{ESCALATING_RADII_MILES, VALIDATED_RADIUS_MILES, search_with_escalation};
