// client.rs
use crate::config::AppConfig;
use crate::domain::{Activity, Association};
use crate::source::models::{
    ActivitiesEnvelope, ActivitiesPayload, AssociationPayload, AssociationsEnvelope,
};
use crate::source::{RecordSource, SourceError};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Instant;

const USER_AGENT: &str = concat!("associaval/", env!("CARGO_PKG_VERSION"));

/// Read-only client for the AssociaVal backend.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(cfg: &AppConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(cfg.fetch_timeout)
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: cfg.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, SourceError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let start = Instant::now();

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        check_status(endpoint, resp.status())?;

        let text = resp
            .text()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        tracing::debug!(
            endpoint,
            bytes = text.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fetched"
        );

        decode(&text)
    }
}

fn check_status(endpoint: &str, status: StatusCode) -> Result<(), SourceError> {
    if status == StatusCode::NOT_FOUND {
        return Err(SourceError::NotFound(endpoint.to_string()));
    }
    if !status.is_success() {
        return Err(SourceError::Status(status.as_u16()));
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::JsonParse(e.to_string()))
}

impl RecordSource for ApiClient {
    fn activities(&self) -> Result<Vec<Activity>, SourceError> {
        let env: ActivitiesEnvelope = self.get_json("/api/activities")?;
        Ok(Activity::from_api_list(env.activities))
    }

    fn associations(&self) -> Result<Vec<Association>, SourceError> {
        let env: AssociationsEnvelope = self.get_json("/api/associations")?;
        Ok(Association::from_api_list(env.associations))
    }

    fn association(&self, id: i64) -> Result<Association, SourceError> {
        let payload: AssociationPayload = self.get_json(&format!("/api/associations/{id}"))?;
        Association::from_api(payload.into_association())
            .map_err(|reason| SourceError::JsonParse(format!("association {id}: {reason}")))
    }

    fn association_activities(&self, id: i64) -> Result<Vec<Activity>, SourceError> {
        let payload: ActivitiesPayload =
            self.get_json(&format!("/api/associations/{id}/activities"))?;
        Ok(Activity::from_api_list(payload.into_activities()))
    }
}
