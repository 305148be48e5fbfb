use std::time::Duration;

use crate::error::CmsError;

const DEFAULT_MAX_ERROR_BODY_BYTES: usize = 8 * 1024;

/// Connection settings for the CMS read API.
///
/// `service_domain` and `api_key` are required. Everything else has a default.
#[derive(Clone, Debug)]
pub struct CmsClientConfig {
    /// Service subdomain, e.g. "sekisenmon" for `sekisenmon.microcms.io`.
    pub service_domain: String,
    pub api_key: String,
    /// API root without trailing slash. Derived from the service domain unless overridden.
    pub base_url: String,
    /// Per-request timeout. `None` leaves the HTTP client default in place.
    pub timeout: Option<Duration>,
    pub max_error_body_bytes: usize,
}

impl CmsClientConfig {
    pub fn new(service_domain: &str, api_key: &str) -> Result<Self, CmsError> {
        let service_domain = service_domain.trim();
        let api_key = api_key.trim();

        if service_domain.is_empty() {
            return Err(CmsError::Config(
                "MICROCMS_SERVICE_DOMAIN is not defined".to_string(),
            ));
        }
        if !service_domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(CmsError::Config(format!(
                "MICROCMS_SERVICE_DOMAIN is not a valid subdomain: {service_domain}"
            )));
        }
        if api_key.is_empty() {
            return Err(CmsError::Config("MICROCMS_API_KEY is not defined".to_string()));
        }

        Ok(Self {
            service_domain: service_domain.to_string(),
            api_key: api_key.to_string(),
            base_url: format!("https://{service_domain}.microcms.io/api/v1"),
            timeout: None,
            max_error_body_bytes: DEFAULT_MAX_ERROR_BODY_BYTES,
        })
    }

    /// Point the client at a different API root (local proxy, test server).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `MICROCMS_SERVICE_DOMAIN`
    /// - `MICROCMS_API_KEY`
    ///
    /// Optional:
    /// - `MICROCMS_BASE_URL`: API root override
    /// - `MICROCMS_TIMEOUT_SECS`: per-request timeout
    /// - `MICROCMS_MAX_ERROR_BODY_BYTES`: cap on upstream error bodies kept for messages
    pub fn from_env() -> Result<Self, CmsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CmsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_domain = lookup("MICROCMS_SERVICE_DOMAIN").unwrap_or_default();
        let api_key = lookup("MICROCMS_API_KEY").unwrap_or_default();
        let mut config = Self::new(&service_domain, &api_key)?;

        if let Some(base_url) = lookup("MICROCMS_BASE_URL").filter(|s| !s.trim().is_empty()) {
            config = config.with_base_url(base_url.trim());
        }

        config.timeout = lookup("MICROCMS_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&n| n > 0)
            .map(Duration::from_secs);

        config.max_error_body_bytes = lookup("MICROCMS_MAX_ERROR_BODY_BYTES")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_ERROR_BODY_BYTES);

        Ok(config)
    }
}
