//! HTTP client for the planning backend.
//!
//! The backend exposes flat collections (`/events`, `/allocations`, ...) and
//! this client narrows them to a simulation or version before handing them to
//! the core services.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use patrimony_core::allocations::{Allocation, AllocationApiTrait, AllocationCreateData};
use patrimony_core::errors::{Error, Result};
use patrimony_core::events::{Event, EventApiTrait, EventCreateData};
use patrimony_core::history::RecentSimulation;
use patrimony_core::insurance::{Insurance, InsuranceApiTrait, InsuranceCreateData};
use patrimony_core::projection::ProjectionPoint;
use patrimony_core::simulations::{
    CurrentSituation, LifeStatus, Simulation, SimulationApiTrait, SimulationCreateData,
    SimulationVersion, SimulationVersionCreateData,
};

use crate::config::ApiClientConfig;

// ─────────────────────────────────────────────────────────────────────────────
// Wire types (request and response bodies that have no core counterpart)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ProjectionRequest {
    status: LifeStatus,
}

#[derive(Debug, Default, Deserialize)]
struct ProjectionEnvelope {
    #[serde(default)]
    projection: Option<Vec<ProjectionPoint>>,
}

#[derive(Debug, Serialize)]
struct DuplicateRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DuplicateResponse {
    new_simulation_id: i64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Decodes a response body, turning non-2xx statuses into core errors.
///
/// 404 becomes [`Error::NotFound`]; other failures become [`Error::Api`] with
/// the backend `message` (or `error`) when the body carries one.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| {
        Error::api_status(
            status,
            format!(
                "Failed to parse response: {} - {}",
                e,
                body.chars().take(200).collect::<String>()
            ),
        )
    })
}

/// Decodes a JSON array item by item.
///
/// Records that do not fit `T` (a null date, an unknown enum value) are
/// logged and dropped so the rest of the collection still loads.
pub fn decode_list<T: DeserializeOwned>(status: u16, body: &str) -> Result<Vec<T>> {
    let items: Vec<serde_json::Value> = decode_body(status, body)?;
    let total = items.len();

    let decoded: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed record #{} of {}: {}", index, total, e);
                None
            }
        })
        .collect();

    if decoded.len() < total {
        debug!("Decoded {} of {} records", decoded.len(), total);
    }
    Ok(decoded)
}

fn check_status(status: u16, body: &str) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(|err| err.message.or(err.error))
        .unwrap_or_else(|| {
            let snippet: String = body.trim().chars().take(200).collect();
            if snippet.is_empty() {
                format!("HTTP {}", status)
            } else {
                snippet
            }
        });

    if status == 404 {
        return Err(Error::NotFound(message));
    }
    Err(Error::api_status(status, message))
}

/// Projection answer: a missing, null or empty `projection` means no data.
fn decode_projection(status: u16, body: &str) -> Result<Vec<ProjectionPoint>> {
    if body.trim().is_empty() {
        check_status(status, body)?;
        return Ok(Vec::new());
    }
    let envelope: ProjectionEnvelope = decode_body(status, body)?;
    Ok(envelope.projection.unwrap_or_default())
}

// ─────────────────────────────────────────────────────────────────────────────
// Planning API Client
// ─────────────────────────────────────────────────────────────────────────────

/// REST client implementing the core collaborator traits.
///
/// ```ignore
/// let client = PlanningApiClient::new(&ApiClientConfig::from_env()?)?;
/// let simulations = client.list_simulations().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PlanningApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PlanningApiClient {
    /// Builds the client. Fails only if the TLS backend cannot be initialized.
    pub fn new(config: &ApiClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and returns the status code and raw body.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(u16, String)> {
        let response = request
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| Error::api(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::api_status(status, format!("Failed to read response: {}", e)))?;
        Ok((status, body))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("[PlanningApi] GET {}", url);
        let (status, body) = self.send(self.client.get(&url)).await?;
        decode_body(status, &body)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = self.url(path);
        debug!("[PlanningApi] GET {}", url);
        let (status, body) = self.send(self.client.get(&url)).await?;
        decode_list(status, &body)
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("[PlanningApi] POST {}", url);
        let (status, body) = self.send(self.client.post(&url).json(payload)).await?;
        decode_body(status, &body)
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("[PlanningApi] PUT {}", url);
        let (status, body) = self.send(self.client.put(&url).json(payload)).await?;
        decode_body(status, &body)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!("[PlanningApi] DELETE {}", url);
        let (status, body) = self.send(self.client.delete(&url)).await?;
        check_status(status, &body)
    }
}

#[async_trait]
impl SimulationApiTrait for PlanningApiClient {
    async fn list_simulations(&self) -> Result<Vec<Simulation>> {
        self.get_list("/simulations").await
    }

    async fn get_simulation(&self, simulation_id: i64) -> Result<Simulation> {
        self.get(&format!("/simulations/{}", simulation_id)).await
    }

    async fn create_simulation(&self, data: &SimulationCreateData) -> Result<Simulation> {
        self.post("/simulations", data).await
    }

    async fn update_simulation(
        &self,
        simulation_id: i64,
        data: &SimulationCreateData,
    ) -> Result<Simulation> {
        self.put(&format!("/simulations/{}", simulation_id), data)
            .await
    }

    async fn list_recent_simulations(&self) -> Result<Vec<RecentSimulation>> {
        self.get_list("/simulations/recent").await
    }

    async fn list_versions(&self, simulation_id: i64) -> Result<Vec<SimulationVersion>> {
        let versions: Vec<SimulationVersion> = self.get_list("/simulation-versions").await?;
        Ok(versions
            .into_iter()
            .filter(|v| v.simulation_id == simulation_id)
            .collect())
    }

    async fn get_version(&self, version_id: i64) -> Result<SimulationVersion> {
        self.get(&format!("/simulation-versions/{}", version_id))
            .await
    }

    async fn create_version(&self, data: &SimulationVersionCreateData) -> Result<SimulationVersion> {
        self.post("/simulation-versions", data).await
    }

    async fn update_version(
        &self,
        version_id: i64,
        data: &SimulationVersionCreateData,
    ) -> Result<SimulationVersion> {
        self.put(&format!("/simulation-versions/{}", version_id), data)
            .await
    }

    async fn delete_version(&self, version_id: i64) -> Result<()> {
        self.delete(&format!("/simulation-versions/{}", version_id))
            .await
    }

    async fn get_projection(
        &self,
        simulation_id: i64,
        status: LifeStatus,
    ) -> Result<Vec<ProjectionPoint>> {
        let url = self.url(&format!("/simulations/{}/projection", simulation_id));
        debug!("[PlanningApi] POST {} ({})", url, status);
        let request = self.client.post(&url).json(&ProjectionRequest { status });
        let (code, body) = self.send(request).await?;
        decode_projection(code, &body)
    }

    async fn duplicate_simulation(&self, simulation_id: i64, name: &str) -> Result<i64> {
        let response: DuplicateResponse = self
            .post(
                &format!("/simulations/{}/duplicate", simulation_id),
                &DuplicateRequest { name },
            )
            .await?;
        Ok(response.new_simulation_id)
    }

    async fn delete_simulation(&self, simulation_id: i64) -> Result<()> {
        self.delete(&format!("/simulations/{}", simulation_id)).await
    }

    async fn create_current_situation(&self, simulation_id: i64) -> Result<CurrentSituation> {
        self.post(
            &format!("/simulations/{}/current", simulation_id),
            &serde_json::json!({}),
        )
        .await
    }
}

#[async_trait]
impl EventApiTrait for PlanningApiClient {
    async fn list_events_for_version(&self, version_id: i64) -> Result<Vec<Event>> {
        let events: Vec<Event> = self.get_list("/events").await?;
        Ok(events
            .into_iter()
            .filter(|e| e.simulation_version_id == version_id)
            .collect())
    }

    async fn get_event(&self, event_id: i64) -> Result<Event> {
        self.get(&format!("/events/{}", event_id)).await
    }

    async fn create_event(&self, simulation_id: i64, data: &EventCreateData) -> Result<Event> {
        self.post(&format!("/simulations/{}/events", simulation_id), data)
            .await
    }

    async fn update_event(&self, event_id: i64, data: &EventCreateData) -> Result<Event> {
        self.put(&format!("/events/{}", event_id), data).await
    }

    async fn delete_event(&self, event_id: i64) -> Result<()> {
        self.delete(&format!("/events/{}", event_id)).await
    }
}

#[async_trait]
impl AllocationApiTrait for PlanningApiClient {
    async fn list_allocations_for_version(&self, version_id: i64) -> Result<Vec<Allocation>> {
        let allocations: Vec<Allocation> = self.get_list("/allocations").await?;
        Ok(allocations
            .into_iter()
            .filter(|a| a.simulation_version_id == version_id)
            .collect())
    }

    async fn get_allocation(&self, allocation_id: i64) -> Result<Allocation> {
        self.get(&format!("/allocations/{}", allocation_id)).await
    }

    async fn create_allocation(&self, data: &AllocationCreateData) -> Result<Allocation> {
        self.post("/allocations", data).await
    }

    async fn update_allocation(
        &self,
        allocation_id: i64,
        data: &AllocationCreateData,
    ) -> Result<Allocation> {
        self.put(&format!("/allocations/{}", allocation_id), data)
            .await
    }

    async fn delete_allocation(&self, allocation_id: i64) -> Result<()> {
        self.delete(&format!("/allocations/{}", allocation_id)).await
    }
}

#[async_trait]
impl InsuranceApiTrait for PlanningApiClient {
    async fn list_insurances_for_version(&self, version_id: i64) -> Result<Vec<Insurance>> {
        let insurances: Vec<Insurance> = self.get_list("/insurances").await?;
        Ok(insurances
            .into_iter()
            .filter(|i| i.simulation_version_id == version_id)
            .collect())
    }

    async fn get_insurance(&self, insurance_id: i64) -> Result<Insurance> {
        self.get(&format!("/insurances/{}", insurance_id)).await
    }

    async fn create_insurance(&self, data: &InsuranceCreateData) -> Result<Insurance> {
        self.post("/insurances", data).await
    }

    async fn update_insurance(
        &self,
        insurance_id: i64,
        data: &InsuranceCreateData,
    ) -> Result<Insurance> {
        self.put(&format!("/insurances/{}", insurance_id), data)
            .await
    }

    async fn delete_insurance(&self, insurance_id: i64) -> Result<()> {
        self.delete(&format!("/insurances/{}", insurance_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body_success() {
        let ids: Vec<i64> = decode_body(200, "[1, 2, 3]").unwrap();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_body_not_found() {
        let err = decode_body::<Vec<i64>>(404, r#"{"message":"Simulation 9 not found"}"#)
            .unwrap_err();
        match err {
            Error::NotFound(msg) => assert_eq!(msg, "Simulation 9 not found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_body_prefers_message_then_error() {
        let err = decode_body::<()>(500, r#"{"error":"Internal"}"#).unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, Some(500));
                assert_eq!(message, "Internal");
            }
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_body_plain_text_error() {
        let err = decode_body::<()>(502, "Bad Gateway").unwrap_err();
        assert!(matches!(
            err,
            Error::Api { status: Some(502), ref message } if message == "Bad Gateway"
        ));

        let err = decode_body::<()>(503, "").unwrap_err();
        assert!(matches!(
            err,
            Error::Api { status: Some(503), ref message } if message == "HTTP 503"
        ));
    }

    #[test]
    fn test_decode_body_invalid_json() {
        let err = decode_body::<Vec<i64>>(200, "{not json").unwrap_err();
        assert!(matches!(err, Error::Api { status: Some(200), .. }));
    }

    #[test]
    fn test_decode_list_skips_records_that_do_not_fit() {
        let body = r#"[
            {"id":1,"type":"entrada","value":12000,"frequency":"mensal","startDate":"2030-03-01"},
            {"id":2,"type":"saída","value":500,"frequency":"semanal","startDate":"2031-01-01"},
            {"id":3,"type":"saída","value":500,"frequency":"única","startDate":null}
        ]"#;
        let events: Vec<Event> = decode_list(200, body).unwrap();
        let ids: Vec<i64> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(events[1].start_date, None);
    }

    #[test]
    fn test_decode_list_requires_an_array() {
        assert!(decode_list::<Event>(200, r#"{"events":[]}"#).is_err());
        assert!(decode_list::<Event>(500, "[]").is_err());
    }

    #[test]
    fn test_projection_missing_or_empty_means_no_data() {
        assert!(decode_projection(200, "").unwrap().is_empty());
        assert!(decode_projection(200, "{}").unwrap().is_empty());
        assert!(decode_projection(200, r#"{"projection":null}"#).unwrap().is_empty());
        assert!(decode_projection(200, r#"{"projection":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_projection_points_are_decoded() {
        let body = r#"{"projection":[
            {"year":2025,"totalPatrimony":1000,"financialPatrimony":600,
             "immobilizedPatrimony":400,"totalWithoutInsurance":900}
        ]}"#;
        let points = decode_projection(200, body).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].year, 2025);
    }

    #[test]
    fn test_projection_error_status_is_reported() {
        assert!(decode_projection(500, "").is_err());
    }

    #[test]
    fn test_projection_request_uses_wire_status() {
        let body = serde_json::to_string(&ProjectionRequest {
            status: LifeStatus::Disabled,
        })
        .unwrap();
        assert_eq!(body, r#"{"status":"Inválido"}"#);
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ApiClientConfig {
            base_url: "http://localhost:3001/".to_string(),
            ..ApiClientConfig::default()
        };
        let client = PlanningApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3001");
    }
}
