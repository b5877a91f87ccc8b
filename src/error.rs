//! Error types for the search/extract pipeline.
//!
//! The taxonomy separates fatal errors, which abort a whole invocation, from
//! per-request errors raised by the Entrez client. A fetch failure for a
//! single article is an [`EntrezError`] that the pipeline recovers from by
//! skipping that article; the same error from the initial search is wrapped
//! in [`Error::Search`] and propagated.

/// Errors that abort an entire invocation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A date could not be rendered for the query term
    #[error("Cannot format date for query: {0}")]
    DateFormat(String),

    /// The initial identifier search failed
    #[error("PubMed search failed: {0}")]
    Search(#[source] EntrezError),

    /// Writing the CSV export failed
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from a single Entrez request
#[derive(Debug, thiserror::Error)]
pub enum EntrezError {
    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status from the E-utilities API
    #[error("API error: {0}")]
    Api(String),

    /// Response XML could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}
