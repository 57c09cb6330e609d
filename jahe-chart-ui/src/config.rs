//! Where the backend lives.
//!
//! By default the page talks to its own origin (`/predict`, `/analytics`).
//! Setting the `jahe_api_url` localStorage key points it at another server.

/// localStorage key holding an alternative API base URL.
pub const API_URL_KEY: &str = "jahe_api_url";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Use `base_url` as the prefix for endpoint paths. A trailing slash is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read the override from localStorage, falling back to same-origin.
    pub fn from_local_storage() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(API_URL_KEY).ok().flatten());
        match stored {
            Some(url) if !url.trim().is_empty() => {
                log::info!("using API base from localStorage: {}", url);
                Self::new(url)
            }
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `/predict`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_by_default() {
        assert_eq!(ApiConfig::default().endpoint("/predict"), "/predict");
    }

    #[test]
    fn test_base_url_is_normalized() {
        let config = ApiConfig::new(" http://localhost:5000/ ");
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.endpoint("/analytics"), "http://localhost:5000/analytics");
    }
}
