/// Error types for the CMS content client.
///
/// Three kinds matter to callers: configuration problems (fatal, no request was
/// attempted), upstream failures (transport, status, payload shape) and missing
/// entries. Field-level anomalies inside a fetched record are not errors; the
/// resolver absorbs them.
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    #[error("config error: {0}")]
    Config(String),

    #[error("entry not found: {endpoint}/{id}")]
    NotFound { endpoint: String, id: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("upstream returned error: status={status} message={message}")]
    Upstream { status: StatusCode, message: String },

    #[error("upstream returned non-JSON error: status={status} body={body}")]
    UpstreamBody { status: StatusCode, body: String },

    #[error("unexpected payload shape: {0}")]
    UnexpectedShape(String),
}

/// Coarse classification used at the page-render boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Upstream,
    NotFound,
}

impl CmsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CmsError::Config(_) => ErrorKind::Configuration,
            CmsError::NotFound { .. } => ErrorKind::NotFound,
            CmsError::Request(_)
            | CmsError::InvalidJson(_)
            | CmsError::Upstream { .. }
            | CmsError::UpstreamBody { .. }
            | CmsError::UnexpectedShape(_) => ErrorKind::Upstream,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
