use std::time::Duration;

use url::Url;

use crate::{EsiError, EsiResult};

pub const DEFAULT_BASE_URL: &str = "https://esi.evetech.net/latest/";
pub const DEFAULT_DATASOURCE: &str = "tranquility";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub datasource: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Upper bound on page requests in flight; `1` fetches pages sequentially.
    pub page_concurrency: usize,
    pub language: Option<String>,
}

impl ClientConfig {
    pub fn new(user_agent: impl Into<String>) -> EsiResult<Self> {
        Ok(Self {
            base_url: Url::parse(DEFAULT_BASE_URL)?,
            datasource: DEFAULT_DATASOURCE.to_string(),
            user_agent: user_agent.into(),
            timeout: DEFAULT_TIMEOUT,
            page_concurrency: 1,
            language: None,
        })
    }

    pub fn validate(&self) -> EsiResult<()> {
        if self.user_agent.trim().is_empty() {
            return Err(EsiError::InvalidConfig("user_agent must be set"));
        }
        if self.datasource.trim().is_empty() {
            return Err(EsiError::InvalidConfig("datasource must be set"));
        }
        if self.page_concurrency == 0 {
            return Err(EsiError::InvalidConfig(
                "page_concurrency must be at least 1",
            ));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(EsiError::InvalidConfig("base_url must be a base url"));
        }
        Ok(())
    }

    /// Base url with a guaranteed trailing slash so relative joins keep the version segment.
    pub(crate) fn normalized_base_url(&self) -> Url {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::ClientConfig;

    #[test]
    fn defaults_point_at_tranquility() {
        let config = ClientConfig::new("skyhook-tests/0.1").expect("default config");
        assert_eq!(config.base_url.as_str(), "https://esi.evetech.net/latest/");
        assert_eq!(config.datasource, "tranquility");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_blank_user_agent_and_zero_concurrency() {
        let mut config = ClientConfig::new("  ").expect("default config");
        assert!(config.validate().is_err());

        config.user_agent = "skyhook-tests/0.1".to_string();
        config.page_concurrency = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn normalizes_missing_trailing_slash() {
        let mut config = ClientConfig::new("skyhook-tests/0.1").expect("default config");
        config.base_url = Url::parse("http://127.0.0.1:8080/latest").expect("url");
        assert_eq!(
            config.normalized_base_url().as_str(),
            "http://127.0.0.1:8080/latest/"
        );
    }
}
