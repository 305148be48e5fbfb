/// Site configuration loaded from environment variables.
///
/// CMS credentials are read separately by `clinic_cms::CmsClientConfig`.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Listen address, e.g. "0.0.0.0:3000".
    pub addr: String,
    /// Shared secret for the debug field listing. `None` disables the page.
    pub admin_token: Option<String>,
    /// Number of news entries shown on the home page.
    pub home_news_limit: u32,
    /// Number of news entries shown on the news index.
    pub news_limit: u32,
}

/// Collection endpoints return at most this many entries per request.
const MAX_PAGE_SIZE: u32 = 100;

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `SITE_ADDR`: listen address (default "0.0.0.0:3000")
    /// - `SITE_ADMIN_TOKEN`: enables `/admin` behind a bearer token
    /// - `SITE_HOME_NEWS_LIMIT`: news entries on the home page (default 3)
    /// - `SITE_NEWS_LIMIT`: news entries on the news index (default 100)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup("SITE_ADDR")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "0.0.0.0:3000".to_string());

        let admin_token = lookup("SITE_ADMIN_TOKEN")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let home_news_limit = parse_limit(lookup("SITE_HOME_NEWS_LIMIT"), 3);
        let news_limit = parse_limit(lookup("SITE_NEWS_LIMIT"), MAX_PAGE_SIZE);

        Self {
            addr,
            admin_token,
            home_news_limit,
            news_limit,
        }
    }
}

fn parse_limit(raw: Option<String>, default: u32) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
        .map(|n| n.min(MAX_PAGE_SIZE))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config.addr, "0.0.0.0:3000");
        assert_eq!(config.admin_token, None);
        assert_eq!(config.home_news_limit, 3);
        assert_eq!(config.news_limit, 100);
    }

    #[test]
    fn limits_are_clamped_and_validated() {
        let config = SiteConfig::from_lookup(|key| match key {
            "SITE_HOME_NEWS_LIMIT" => Some("0".into()),
            "SITE_NEWS_LIMIT" => Some("500".into()),
            "SITE_ADMIN_TOKEN" => Some("   ".into()),
            _ => None,
        });
        assert_eq!(config.home_news_limit, 3);
        assert_eq!(config.news_limit, 100);
        assert_eq!(config.admin_token, None);
    }
}
