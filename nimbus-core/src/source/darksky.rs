use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;

use super::{FetchError, ForecastSource};

/// Host of the forecast endpoint; also the target of the reachability probe.
pub const FORECAST_HOST: &str = "api.darksky.net";

const BASE_URL: &str = "https://api.darksky.net/forecast";

/// Forecast source backed by the Dark Sky HTTP API.
#[derive(Debug, Clone)]
pub struct DarkSkyClient {
    api_key: String,
    http: Client,
}

impl DarkSkyClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    /// The key travels in the path, not a header: `{base}/{key}/{lat},{lon}`.
    fn forecast_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{BASE_URL}/{}/{latitude},{longitude}", self.api_key)
    }
}

#[async_trait]
impl ForecastSource for DarkSkyClient {
    async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<String, FetchError> {
        let url = self.forecast_url(latitude, longitude);
        info!("requesting current conditions for {latitude},{longitude}");

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body_excerpt: truncate_body(&body),
            });
        }

        debug!("forecast endpoint returned {} bytes", body.len());
        Ok(body)
    }
}

/// Bound the body excerpt carried in a status error.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
