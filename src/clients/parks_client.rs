//! Park service API client
//!
//! Wraps the radius search endpoint and the brand park directory.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{error, info};
use url::Url;

use crate::core::config::AppConfig;
use crate::core::models::{DirectoryPark, ParkRecord, ParksEnvelope};
use crate::errors::HandlerError;

const SEARCH_PATH: &str = "parks-service/parks/search";

pub struct ParksClient {
    http: Client,
    parks_api_url: String,
    directory_api_url: String,
    brand_id: u32,
    top: u32,
}

impl ParksClient {
    pub fn new(http: Client, config: &AppConfig) -> Self {
        Self {
            http,
            parks_api_url: config.parks_api_url.clone(),
            directory_api_url: config.directory_api_url.clone(),
            brand_id: config.brand_id,
            top: config.search_top,
        }
    }

    /// Parks within `miles` of `zip`, in whatever order the service returns them.
    pub async fn search(&self, zip: &str, miles: u32) -> Result<Vec<ParkRecord>, HandlerError> {
        let url = self.search_url(zip, miles)?;
        info!("Fetching parks within {} miles for ZIP {}", miles, zip);
        self.get_list(url).await
    }

    /// Every park in the brand directory. The endpoint is not paginated.
    pub async fn list_all(&self) -> Result<Vec<DirectoryPark>, HandlerError> {
        let url = join(
            &self.directory_api_url,
            &format!("brands/{}/parks", self.brand_id),
        )?;
        info!("Fetching full park list");
        self.get_list(url).await
    }

    fn search_url(&self, zip: &str, miles: u32) -> Result<Url, HandlerError> {
        let mut url = join(&self.parks_api_url, SEARCH_PATH)?;
        url.query_pairs_mut()
            .append_pair("location", zip)
            .append_pair("distanceInMiles", &miles.to_string())
            .append_pair("top", &self.top.to_string())
            .append_pair("brandId", &self.brand_id.to_string());
        Ok(url)
    }

    async fn get_list<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, HandlerError> {
        let resp = self.http.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            error!("GET {} failed: status={}", url, status);
            return Err(HandlerError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        let envelope: ParksEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| HandlerError::Decode {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        envelope.data.ok_or_else(|| {
            error!("Got back: {}", body);
            HandlerError::Decode {
                url: url.to_string(),
                reason: "missing `data` list".to_string(),
            }
        })
    }
}

/// Appends `path` to `base`, keeping any path prefix already on the base URL.
fn join(base: &str, path: &str) -> Result<Url, HandlerError> {
    let base = if base.ends_with('/') {
        Url::parse(base)?
    } else {
        Url::parse(&format!("{base}/"))?
    };
    Ok(base.join(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_carries_all_query_parameters() {
        let client = ParksClient::new(Client::new(), &AppConfig::default());
        let url = client.search_url("90210", 50).unwrap();
        assert_eq!(
            url.as_str(),
            "https://parksapi-test.urbanairparks.com/parks-service/parks/search?location=90210&distanceInMiles=50&top=3&brandId=1"
        );
    }

    #[test]
    fn join_keeps_base_path_prefix() {
        let url = join("http://localhost:8080/api", "brands/1/parks").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/brands/1/parks");
        let url = join("http://localhost:8080/api/", "brands/1/parks").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/brands/1/parks");
    }

    #[test]
    fn join_rejects_garbage_base() {
        let err = join("not a url", "x").unwrap_err();
        assert!(matches!(err, HandlerError::Config(_)));
    }
}
