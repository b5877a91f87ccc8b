//! NCBI E-utilities client.
//!
//! Two operations are consumed: `esearch.fcgi` (query term to PMID list) and
//! `efetch.fcgi` (one PMID to one parsed record). Each call is a single
//! attempt with no retry; rate limiting is the caller's concern and the
//! pipeline stays strictly sequential anyway.

pub mod records;

use std::time::Duration;

use quick_xml::de::from_str;

use crate::config::EntrezConfig;
use crate::error::EntrezError;
use records::{ESearchResult, PubmedArticleSet};

/// Client for the esearch/efetch endpoints
#[derive(Debug, Clone)]
pub struct EntrezClient {
    http: reqwest::Client,
    config: EntrezConfig,
}

impl EntrezClient {
    /// Create a client with the given configuration
    pub fn new(config: EntrezConfig) -> Result<Self, EntrezError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| EntrezError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Search PubMed, returning at most `retmax` PMIDs in relevance order
    pub async fn esearch(&self, term: &str, retmax: usize) -> Result<Vec<String>, EntrezError> {
        let url = format!(
            "{}/esearch.fcgi?{}",
            self.config.base_url,
            self.query_string(&[
                ("term", term),
                ("retmax", &retmax.to_string()),
            ])
        );

        let xml = self.get(&url).await?;
        let result: ESearchResult = from_str(&xml)
            .map_err(|e| EntrezError::Parse(format!("Failed to parse esearch XML: {}", e)))?;

        tracing::info!(count = result.IdList.ids.len(), "esearch returned PMIDs");
        Ok(result.IdList.ids)
    }

    /// Fetch the full record for one PMID
    pub async fn efetch(&self, pmid: &str) -> Result<PubmedArticleSet, EntrezError> {
        let url = format!(
            "{}/efetch.fcgi?{}",
            self.config.base_url,
            self.query_string(&[("id", pmid)])
        );

        let xml = self.get(&url).await?;
        from_str(&xml).map_err(|e| EntrezError::Parse(format!("Failed to parse efetch XML: {}", e)))
    }

    /// Common parameters plus per-request ones, URL-encoded
    fn query_string(&self, extra: &[(&str, &str)]) -> String {
        let mut params: Vec<(String, String)> = vec![
            ("db".to_string(), "pubmed".to_string()),
            ("retmode".to_string(), "xml".to_string()),
            ("tool".to_string(), self.config.tool.clone()),
        ];
        if let Some(email) = &self.config.email {
            params.push(("email".to_string(), email.clone()));
        }
        if let Some(key) = &self.config.api_key {
            params.push(("api_key".to_string(), key.clone()));
        }
        for (k, v) in extra {
            params.push((k.to_string(), v.to_string()));
        }

        params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    async fn get(&self, url: &str) -> Result<String, EntrezError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| EntrezError::Network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(EntrezError::Api(format!(
                "E-utilities returned status: {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| EntrezError::Network(format!("Failed to read response body: {}", e)))
    }
}
