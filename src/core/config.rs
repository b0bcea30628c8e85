use std::env;

pub const DEFAULT_PARKS_API_URL: &str = "https://parksapi-test.urbanairparks.com";
pub const DEFAULT_DIRECTORY_API_URL: &str = "https://unleashedapi-test.urbanairparks.com";
pub const DEFAULT_BRAND_ID: u32 = 1;
pub const DEFAULT_SEARCH_TOP: u32 = 3;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub booking_url: Option<String>,
    pub parks_api_url: String,
    pub directory_api_url: String,
    pub brand_id: u32,
    pub search_top: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            booking_url: None,
            parks_api_url: DEFAULT_PARKS_API_URL.to_string(),
            directory_api_url: DEFAULT_DIRECTORY_API_URL.to_string(),
            brand_id: DEFAULT_BRAND_ID,
            search_top: DEFAULT_SEARCH_TOP,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't have to touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            booking_url: non_blank("BOOKING_URL"),
            parks_api_url: non_blank("PARKS_API_URL")
                .unwrap_or_else(|| DEFAULT_PARKS_API_URL.to_string()),
            directory_api_url: non_blank("DIRECTORY_API_URL")
                .unwrap_or_else(|| DEFAULT_DIRECTORY_API_URL.to_string()),
            brand_id: parse_u32(non_blank("BRAND_ID"), "BRAND_ID", DEFAULT_BRAND_ID)?,
            search_top: parse_u32(
                non_blank("PARK_SEARCH_TOP"),
                "PARK_SEARCH_TOP",
                DEFAULT_SEARCH_TOP,
            )?,
        })
    }
}

fn parse_u32(raw: Option<String>, name: &str, default: u32) -> Result<u32, String> {
    match raw {
        Some(v) => v
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("{name}: {e}")),
        None => Ok(default),
    }
}
