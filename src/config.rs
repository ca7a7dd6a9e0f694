/// Prediction service configuration
///
/// The classifier's base URL comes from the environment at startup. A
/// missing or malformed value is a configuration error the app refuses to
/// start with, never a runtime prediction failure.

use reqwest::Url;
use thiserror::Error;

/// Environment variable holding the prediction service's base URL,
/// e.g. `http://localhost:5000`
pub const ENDPOINT_ENV_VAR: &str = "DERMALENS_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("DERMALENS_API_URL is not set")]
    Missing,
    #[error("DERMALENS_API_URL is not a usable http(s) URL: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    base_url: Url,
    predict_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(ENDPOINT_ENV_VAR).map_err(|_| ConfigError::Missing)?;
        Self::from_base_url(&raw)
    }

    /// Parse and normalize a base URL, deriving the predict endpoint once
    /// so request construction can never fail later.
    pub fn from_base_url(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::Missing);
        }

        let base_url =
            Url::parse(trimmed).map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "unsupported scheme '{}'",
                base_url.scheme()
            )));
        }

        let predict_url = Url::parse(&format!("{}/api/predict", trimmed))
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        Ok(Self {
            base_url,
            predict_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of the classification endpoint
    pub fn predict_url(&self) -> Url {
        self.predict_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derives_the_predict_endpoint() {
        let config = Config::from_base_url("http://localhost:5000").unwrap();
        assert_eq!(
            config.predict_url().as_str(),
            "http://localhost:5000/api/predict"
        );
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let config = Config::from_base_url("https://derma.example.com/ ").unwrap();
        assert_eq!(
            config.predict_url().as_str(),
            "https://derma.example.com/api/predict"
        );
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        assert!(matches!(
            Config::from_base_url("ftp://derma.example.com"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            Config::from_base_url("not a url at all"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_blank_value() {
        assert_eq!(Config::from_base_url("   "), Err(ConfigError::Missing));
    }
}
