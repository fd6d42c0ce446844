use crate::constants::{GRAPH_BASE_URL, GRAPH_BASE_URL_ENV};
use serde::{Deserialize, Serialize};

/// Where Graph requests are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphConfig {
    pub base_url: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            base_url: GRAPH_BASE_URL.to_string(),
        }
    }
}

impl GraphConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(Some(base_url.into())),
        }
    }

    /// Load from the environment, reading `.env` first if there is one.
    pub fn from_env() -> Self {
        if let Err(e) = dotenv::dotenv() {
            log::debug!("[graph] No .env file loaded: {}", e);
        }

        Self {
            base_url: normalize_base_url(std::env::var(GRAPH_BASE_URL_ENV).ok()),
        }
    }
}

// Blank falls back to the public cloud; trailing slashes are dropped so
// paths can be appended as-is.
fn normalize_base_url(raw: Option<String>) -> String {
    match raw {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => GRAPH_BASE_URL.to_string(),
    }
}
