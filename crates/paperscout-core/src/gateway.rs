use std::time::Duration;

use serde::Serialize;

use crate::error::CoreError;
use crate::model::{ExpandResponse, Paper, SearchResponse, Subtopic};
use crate::Config;

#[derive(Serialize)]
struct ExpandRequest<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct DownloadRequest<'a> {
    paper_ids: &'a [String],
}

/// HTTP client for the three collaborator endpoints: expansion, search and
/// export download. One request/response round trip per call — no retries,
/// no caching; the stage controller holds whatever needs holding.
///
/// Errors are translated here and nowhere else: transport failures become
/// [`CoreError::Network`], non-success statuses become [`CoreError::Service`]
/// carrying only an operation label and the status code.
pub struct RemoteGateway {
    client: reqwest::Client,
    /// Separate client with a longer timeout; export payloads can be large.
    download_client: reqwest::Client,
    base_url: String,
}

impl RemoteGateway {
    pub fn new(config: &Config) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| CoreError::Network(format!("failed to build HTTP client: {e}")))?;
        let download_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.download_timeout_secs))
            .build()
            .map_err(|e| CoreError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            download_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Expand a free-text query into labeled subtopics.
    pub async fn expand(&self, query: &str) -> Result<Vec<Subtopic>, CoreError> {
        let url = format!("{}/api/expand", self.base_url);
        log::debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .json(&ExpandRequest { query })
            .send()
            .await
            .map_err(|e| transport_error("expansion", e))?;

        let body: ExpandResponse = decode_json("expansion", response).await?;
        Ok(body.subtopics)
    }

    /// Search the paper index for `topic`, asking for at most `max_results`.
    pub async fn search(&self, topic: &str, max_results: usize) -> Result<Vec<Paper>, CoreError> {
        let url = format!("{}/api/search", self.base_url);
        log::debug!("GET {url}?query={topic}&max_results={max_results}");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", topic.to_string()),
                ("max_results", max_results.to_string()),
            ])
            .send()
            .await
            .map_err(|e| transport_error("search", e))?;

        let body: SearchResponse = decode_json("search", response).await?;
        Ok(body.papers)
    }

    /// Fetch the export payload for the given paper ids. The bytes are
    /// opaque — a single PDF or an archive, packaged by the service.
    pub async fn download(&self, paper_ids: &[String]) -> Result<Vec<u8>, CoreError> {
        let url = format!("{}/api/download", self.base_url);
        log::debug!("POST {url} ({} papers)", paper_ids.len());
        let response = self
            .download_client
            .post(&url)
            .json(&DownloadRequest { paper_ids })
            .send()
            .await
            .map_err(|e| transport_error("download", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Service {
                operation: "download",
                status: status.as_u16(),
            });
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error("download", e))?;
        Ok(bytes.to_vec())
    }
}

/// Check the status and decode the JSON body, folding a malformed body into
/// a service error — the collaborator responded, just not with its contract.
async fn decode_json<T: serde::de::DeserializeOwned>(
    operation: &'static str,
    response: reqwest::Response,
) -> Result<T, CoreError> {
    let status = response.status();
    if !status.is_success() {
        return Err(CoreError::Service {
            operation,
            status: status.as_u16(),
        });
    }
    response.json::<T>().await.map_err(|e| {
        log::warn!("{operation} returned a malformed body: {e}");
        CoreError::Service {
            operation,
            status: status.as_u16(),
        }
    })
}

/// Keep the user-facing message generic; the detail goes to the log only.
fn transport_error(operation: &'static str, err: reqwest::Error) -> CoreError {
    log::warn!("{operation} transport failure: {err}");
    CoreError::Network(format!("{operation} failed: no response from service"))
}
