use super::{FilterQuery, OverpassQuery, OverpassResponse};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};
use twisty_core::model::{
    source::{WayQuery, WaySource},
    TwistyError, Way,
};

/// way source backed by an Overpass API interpreter endpoint
pub struct OverpassWaySource {
    client: Client,
    url: String,
    query_timeout_secs: u64,
    extra_filters: Vec<FilterQuery>,
}

impl OverpassWaySource {
    /// extra time allowed on the HTTP request beyond the server-side query timeout
    const HTTP_TIMEOUT_MARGIN_SECS: u64 = 10;

    pub fn new(
        url: &str,
        query_timeout_secs: u64,
        extra_filters: Vec<FilterQuery>,
    ) -> Result<OverpassWaySource, TwistyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(
                query_timeout_secs + Self::HTTP_TIMEOUT_MARGIN_SECS,
            ))
            .build()
            .map_err(|e| {
                TwistyError::WaySourceError(format!("failure building overpass client: {e}"))
            })?;
        Ok(OverpassWaySource {
            client,
            url: String::from(url),
            query_timeout_secs,
            extra_filters,
        })
    }

    pub fn build_query(&self, query: &WayQuery) -> OverpassQuery {
        OverpassQuery::new(query, &self.extra_filters, self.query_timeout_secs)
    }
}

impl WaySource for OverpassWaySource {
    fn get_ways(&self, query: &WayQuery) -> Result<Vec<Way>, TwistyError> {
        let ql = self.build_query(query).to_string();
        log::info!("querying {} with {}", self.url, ql);
        let response = self
            .client
            .post(&self.url)
            .form(&[("data", ql.as_str())])
            .send()
            .map_err(|e| TwistyError::WaySourceError(format!("POST to {} failed: {e}", self.url)))?;
        let status = response.status();
        let body = response.text().map_err(|e| {
            TwistyError::WaySourceError(format!("failure reading overpass response: {e}"))
        })?;
        if !status.is_success() {
            return Err(TwistyError::WaySourceError(format!(
                "overpass returned status {status}: {body}"
            )));
        }
        let decoded: OverpassResponse = serde_json::from_str(&body).map_err(|e| {
            TwistyError::WaySourceError(format!("failure decoding overpass response: {e}"))
        })?;
        Ok(decoded.into_ways())
    }
}

/// way source reading a saved response from disk. the file may hold either an
/// Overpass JSON response or a plain JSON array of ways. the query is not applied;
/// every way in the file is returned.
pub struct FileWaySource {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WayFile {
    Overpass(OverpassResponse),
    Ways(Vec<Way>),
}

impl FileWaySource {
    pub fn new(path: impl Into<PathBuf>) -> FileWaySource {
        FileWaySource { path: path.into() }
    }

    pub fn read_ways(&self) -> Result<Vec<Way>, TwistyError> {
        let s = std::fs::read_to_string(&self.path).map_err(|e| {
            TwistyError::WaySourceError(format!("failure reading {}: {e}", self.path.display()))
        })?;
        let decoded: WayFile = serde_json::from_str(&s).map_err(|e| {
            TwistyError::WaySourceError(format!("failure decoding {}: {e}", self.path.display()))
        })?;
        match decoded {
            WayFile::Overpass(response) => Ok(response.into_ways()),
            WayFile::Ways(ways) => Ok(ways),
        }
    }
}

impl WaySource for FileWaySource {
    fn get_ways(&self, _query: &WayQuery) -> Result<Vec<Way>, TwistyError> {
        self.read_ways()
    }
}
