use serde::{Deserialize, Serialize};

/// Envelope used by both park endpoints: `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
pub struct ParksEnvelope<T> {
    pub data: Option<Vec<T>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParkId {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkAddress {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// A park as returned by the park search endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkRecord {
    pub name: String,
    pub distance_in_miles: f64,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub address: ParkAddress,
    #[serde(default)]
    pub url_slug: Option<String>,
    pub id: ParkId,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryAddress {
    #[serde(default)]
    pub zip_code: Option<String>,
}

/// A park as listed in the brand directory.
///
/// Every field is optional so that one incomplete entry doesn't spoil the
/// whole listing; only the matched park needs a ZIP code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryPark {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<DirectoryAddress>,
}

impl DirectoryPark {
    #[must_use]
    pub fn zip_code(&self) -> Option<&str> {
        self.address
            .as_ref()?
            .zip_code
            .as_deref()
            .filter(|z| !z.trim().is_empty())
    }
}

/// Display-ready view of a park handed back to the voice agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPark {
    pub name: String,
    pub distance: String,
    pub timezone: Option<String>,
    pub phone_number: Option<String>,
    pub address: String,
    pub slug: Option<String>,
    pub id: ParkId,
}

/// Up to three parks ordered by distance.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedParks {
    pub nearest: NormalizedPark,
    pub backup_one: Option<NormalizedPark>,
    pub backup_two: Option<NormalizedPark>,
}
