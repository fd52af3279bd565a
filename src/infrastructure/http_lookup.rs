use crate::domain::{
    lookup::{CityLookup, LookupError},
    models::Candidate,
};
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

// The service sends more fields per city, only the name is used.
#[derive(Debug, Deserialize)]
struct CityRecord {
    name: String,
}

/// `CityLookup` backed by the REST endpoint `GET <base>/cities?search=<query>`.
pub struct HttpCityLookup {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCityLookup {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: cities_endpoint(base_url),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn cities_endpoint(base_url: &str) -> String {
    format!("{}/cities", base_url.trim_end_matches('/'))
}

/// Map a response body to candidates, keeping the service's order.
pub fn parse_cities(body: &[u8]) -> Result<Vec<Candidate>, LookupError> {
    let records: Vec<CityRecord> =
        serde_json::from_slice(body).map_err(|e| LookupError::Malformed(e.to_string()))?;
    Ok(records.into_iter().map(|r| Candidate(r.name)).collect())
}

#[async_trait]
impl CityLookup for HttpCityLookup {
    async fn search(&self, query: &str) -> Result<Vec<Candidate>, LookupError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("search", query)])
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        parse_cities(&body)
    }
}
