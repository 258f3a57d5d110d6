use reqwest::Client;
use serde_json::Value;

use crate::{
    analysis::acquirer::{FeatureSource, LookupError},
    config::AnalysisSourceSettings,
};

/// Free-text track search over HTTP.
///
/// Sends `GET {url}?term=<query>` and returns the decoded JSON body. When an
/// API key is configured it is sent as `X-RapidAPI-Key`, together with
/// `X-RapidAPI-Host` if a host is set.
pub struct HttpFeatureSource {
    client: Client,
    settings: AnalysisSourceSettings,
}

impl HttpFeatureSource {
    pub fn new(settings: AnalysisSourceSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }
}

impl FeatureSource for HttpFeatureSource {
    async fn lookup(&self, query: String) -> Result<Value, LookupError> {
        let mut request = self
            .client
            .get(&self.settings.url)
            .query(&[("term", query.as_str())]);

        if let Some(key) = &self.settings.api_key {
            request = request.header("X-RapidAPI-Key", key);
        }
        if let Some(host) = &self.settings.api_host {
            request = request.header("X-RapidAPI-Host", host);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}
