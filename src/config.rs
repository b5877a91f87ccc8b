//! Entrez endpoint and credential configuration.
//!
//! Credentials are explicit values handed to [`EntrezClient`](crate::EntrezClient)
//! at construction, never process-wide state. The binary loads them from the
//! environment (after an optional `.env` pass); tests construct them directly
//! with [`EntrezConfig::with_base_url`].

use serde::{Deserialize, Serialize};

/// Default E-utilities endpoint root
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Configuration for the Entrez E-utilities client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrezConfig {
    /// Endpoint root, without trailing slash (`{base_url}/esearch.fcgi` etc.)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// NCBI API key (optional, raises the rate limit)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Contact email sent with every request, per NCBI usage policy
    #[serde(default)]
    pub email: Option<String>,

    /// Tool name sent with every request
    #[serde(default = "default_tool")]
    pub tool: String,
}

impl Default for EntrezConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            email: None,
            tool: default_tool(),
        }
    }
}

impl EntrezConfig {
    /// Read credentials from `ENTREZ_API_KEY` and `ENTREZ_EMAIL`
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("ENTREZ_API_KEY").ok(),
            email: std::env::var("ENTREZ_EMAIL").ok(),
            ..Self::default()
        }
    }

    /// Override the endpoint root (used by tests against a mock server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_tool() -> String {
    env!("CARGO_PKG_NAME").to_string()
}
