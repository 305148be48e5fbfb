use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::CmsClientConfig;
use crate::error::CmsError;
use crate::query::CollectionQuery;
use crate::record::{Collection, DetailPayload, RawRecord};

/// Singleton endpoint holding the clinic's editable information.
pub const CLINIC_INFO_ENDPOINT: &str = "information";
/// List/detail endpoint for news entries.
pub const NEWS_ENDPOINT: &str = "news";

const API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";

/// Read-only client for the CMS content API.
///
/// Every call is a fresh round trip: no retries, no caching.
#[derive(Clone)]
pub struct CmsClient {
    config: CmsClientConfig,
    http: reqwest::Client,
}

impl CmsClient {
    pub fn new(config: CmsClientConfig) -> Result<Self, CmsError> {
        Url::parse(&config.base_url).map_err(|e| {
            CmsError::Config(format!("invalid CMS base url {}: {e}", config.base_url))
        })?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("clinic-site/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, http })
    }

    pub fn from_env() -> Result<Self, CmsError> {
        Self::new(CmsClientConfig::from_env()?)
    }

    pub fn config(&self) -> &CmsClientConfig {
        &self.config
    }

    /// Fetch an object-type (single record) endpoint.
    pub async fn fetch_singleton(&self, endpoint: &str) -> Result<RawRecord, CmsError> {
        let url = self.endpoint_url(endpoint, None)?;
        let value = self.get_json(url, &[]).await?;
        RawRecord::from_value(value).ok_or_else(|| {
            CmsError::UnexpectedShape(format!("{endpoint} did not return an object"))
        })
    }

    /// Fetch one page of a list-type endpoint.
    pub async fn fetch_collection(
        &self,
        endpoint: &str,
        query: &CollectionQuery,
    ) -> Result<Collection, CmsError> {
        let url = self.endpoint_url(endpoint, None)?;
        let value = self.get_json(url, &query.to_pairs()).await?;
        let collection: Collection = serde_json::from_value(value)?;
        debug!(
            endpoint,
            returned = collection.contents.len(),
            total = collection.total_count,
            "collection fetched"
        );
        Ok(collection)
    }

    /// Fetch a single entry of a list-type endpoint by id.
    pub async fn fetch_by_id(&self, endpoint: &str, id: &str) -> Result<RawRecord, CmsError> {
        let not_found = || CmsError::NotFound {
            endpoint: endpoint.to_string(),
            id: id.to_string(),
        };

        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(not_found());
        }

        let url = self.endpoint_url(endpoint, Some(trimmed))?;
        let value = match self.get_json(url, &[]).await {
            Ok(value) => value,
            Err(e) if upstream_status(&e) == Some(StatusCode::NOT_FOUND) => {
                return Err(not_found());
            }
            Err(e) => return Err(e),
        };

        match DetailPayload::decode(value) {
            DetailPayload::Record(record) => Ok(record),
            DetailPayload::List(items) => {
                debug!(endpoint, id = trimmed, count = items.len(), "detail request returned a list payload");
                let first = items.into_iter().next().ok_or_else(not_found)?;
                RawRecord::from_value(first).ok_or_else(|| {
                    CmsError::UnexpectedShape(format!("{endpoint}/{trimmed}: list element is not an object"))
                })
            }
            DetailPayload::Unrecognized(kind) => Err(CmsError::UnexpectedShape(format!(
                "{endpoint}/{trimmed}: {kind} payload"
            ))),
        }
    }

    pub async fn fetch_clinic_info(&self) -> Result<RawRecord, CmsError> {
        self.fetch_singleton(CLINIC_INFO_ENDPOINT).await
    }

    pub async fn fetch_news_list(&self, query: &CollectionQuery) -> Result<Collection, CmsError> {
        self.fetch_collection(NEWS_ENDPOINT, query).await
    }

    pub async fn fetch_news_detail(&self, id: &str) -> Result<RawRecord, CmsError> {
        self.fetch_by_id(NEWS_ENDPOINT, id).await
    }

    fn endpoint_url(&self, endpoint: &str, id: Option<&str>) -> Result<Url, CmsError> {
        let endpoint = endpoint.trim_matches('/');
        if endpoint.is_empty() {
            return Err(CmsError::Config("endpoint must not be empty".to_string()));
        }

        let mut url = Url::parse(&self.config.base_url).map_err(|e| {
            CmsError::Config(format!("invalid CMS base url {}: {e}", self.config.base_url))
        })?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                CmsError::Config(format!("CMS base url cannot carry a path: {}", self.config.base_url))
            })?;
            segments.pop_if_empty().push(endpoint);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    async fn get_json(&self, url: Url, query: &[(&str, String)]) -> Result<Value, CmsError> {
        let mut request = self
            .http
            .get(url.clone())
            .header(API_KEY_HEADER, &self.config.api_key);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }

        let resp = request.send().await.inspect_err(|e| {
            warn!(url = %url, error = %e, "cms request failed");
        })?;

        let status = resp.status();
        if !status.is_success() {
            let err = Self::to_upstream_error(resp, self.config.max_error_body_bytes).await;
            if status == StatusCode::NOT_FOUND {
                debug!(url = %url, "cms returned 404");
            } else {
                warn!(url = %url, status = status.as_u16(), error = %err, "cms returned error status");
            }
            return Err(err);
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn to_upstream_error(resp: reqwest::Response, max_error_body_bytes: usize) -> CmsError {
        let status = resp.status();
        let body = match resp.bytes().await {
            Ok(bytes) => capped_text(&bytes, max_error_body_bytes),
            Err(e) => {
                warn!(status = status.as_u16(), error = %e, "cms error body unreadable");
                String::new()
            }
        };
        upstream_error(status, body)
    }
}

fn upstream_status(err: &CmsError) -> Option<StatusCode> {
    match err {
        CmsError::Upstream { status, .. } | CmsError::UpstreamBody { status, .. } => Some(*status),
        _ => None,
    }
}

/// A `{"message": ...}` body becomes `Upstream`; anything else is kept verbatim.
fn upstream_error(status: StatusCode, body: String) -> CmsError {
    match serde_json::from_str::<CmsErrorEnvelope>(&body) {
        Ok(CmsErrorEnvelope {
            message: Some(message),
        }) if !message.trim().is_empty() => CmsError::Upstream { status, message },
        _ => CmsError::UpstreamBody { status, body },
    }
}

/// At most `max_bytes` of `bytes` as text, never splitting a character.
fn capped_text(bytes: &[u8], max_bytes: usize) -> String {
    let capped = &bytes[..bytes.len().min(max_bytes)];
    match std::str::from_utf8(capped) {
        Ok(text) => text.to_string(),
        // Only the cut at the end is incomplete: drop the partial character.
        Err(e) if e.error_len().is_none() => {
            String::from_utf8_lossy(&capped[..e.valid_up_to()]).into_owned()
        }
        Err(_) => String::from_utf8_lossy(capped).into_owned(),
    }
}

#[derive(Debug, Deserialize)]
struct CmsErrorEnvelope {
    message: Option<String>,
}
