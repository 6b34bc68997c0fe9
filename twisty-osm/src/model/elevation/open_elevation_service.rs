use itertools::Itertools;
use reqwest::{blocking::Client, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use twisty_core::model::{source::ElevationService, Point, TwistyError};

/// elevation service speaking the Open-Elevation lookup API,
/// see <https://github.com/Jorl17/open-elevation/blob/master/docs/api.md>
pub struct OpenElevationService {
    client: Client,
    url: String,
    batch_size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenElevationRequest {
    pub locations: Vec<OpenElevationLocation>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenElevationLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenElevationResponse {
    pub results: Vec<OpenElevationResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenElevationResult {
    #[serde(default)]
    pub elevation: Option<f64>,
}

impl OpenElevationRequest {
    pub fn new(points: &[Point]) -> OpenElevationRequest {
        let locations = points
            .iter()
            .map(|p| OpenElevationLocation {
                latitude: p.lat,
                longitude: p.lon,
            })
            .collect_vec();
        OpenElevationRequest { locations }
    }
}

impl OpenElevationResponse {
    /// the elevations in request order. fails if the service answered for a different
    /// number of points than requested. points the service has no data for are dropped.
    pub fn elevations(self, n_requested: usize) -> Result<Vec<f64>, TwistyError> {
        if self.results.len() != n_requested {
            return Err(TwistyError::ElevationServiceError(format!(
                "requested elevations for {} points but received {}",
                n_requested,
                self.results.len()
            )));
        }
        Ok(self.results.into_iter().flat_map(|r| r.elevation).collect_vec())
    }
}

impl OpenElevationService {
    pub fn new(
        url: &str,
        timeout_secs: u64,
        batch_size: usize,
    ) -> Result<OpenElevationService, TwistyError> {
        if batch_size == 0 {
            return Err(TwistyError::ConfigurationError(String::from(
                "elevation batch size must be positive",
            )));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                TwistyError::ElevationServiceError(format!(
                    "failure building elevation client: {e}"
                ))
            })?;
        Ok(OpenElevationService {
            client,
            url: String::from(url),
            batch_size,
        })
    }

    fn lookup_batch(&self, points: &[Point]) -> Result<Vec<f64>, TwistyError> {
        let body = serde_json::to_string(&OpenElevationRequest::new(points)).map_err(|e| {
            TwistyError::ElevationServiceError(format!("failure encoding request: {e}"))
        })?;
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| {
                TwistyError::ElevationServiceError(format!("POST to {} failed: {e}", self.url))
            })?;
        let status = response.status();
        let text = response.text().map_err(|e| {
            TwistyError::ElevationServiceError(format!("failure reading response: {e}"))
        })?;
        if !status.is_success() {
            return Err(TwistyError::ElevationServiceError(format!(
                "elevation service returned status {status}: {text}"
            )));
        }
        let decoded: OpenElevationResponse = serde_json::from_str(&text).map_err(|e| {
            TwistyError::ElevationServiceError(format!("failure decoding response: {e}"))
        })?;
        decoded.elevations(points.len())
    }
}

impl ElevationService for OpenElevationService {
    fn get_elevations(&self, points: &[Point]) -> Result<Option<Vec<f64>>, TwistyError> {
        if points.is_empty() {
            return Ok(None);
        }
        let mut elevations: Vec<f64> = Vec::with_capacity(points.len());
        for batch in points.chunks(self.batch_size) {
            elevations.extend(self.lookup_batch(batch)?);
        }
        if elevations.is_empty() {
            Ok(None)
        } else {
            Ok(Some(elevations))
        }
    }
}
