//! # pubmed-sift
//!
//! Search PubMed by author, topic, and creation-date range, then extract a
//! heuristic split of "non-academic" vs company-affiliated authors plus a
//! best-effort corresponding-author email, suitable for CSV export.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (SearchCriteria, OutputRow)
//! - [`query`]: E-utilities search term construction
//! - [`entrez`]: HTTP client for the NCBI esearch/efetch endpoints
//! - [`extract`]: Per-article field extraction and the affiliation heuristic
//! - [`pipeline`]: The search-then-extract orchestration
//! - [`export`]: CSV serialization of the extracted rows
//! - [`config`]: Entrez credentials and endpoint configuration

pub mod config;
pub mod entrez;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod query;

// Re-export commonly used types
pub use config::EntrezConfig;
pub use entrez::EntrezClient;
pub use error::{EntrezError, Error};
pub use models::{OutputRow, SearchCriteria};
pub use pipeline::search_and_extract;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
