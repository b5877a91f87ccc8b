//! Search criteria model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parameters for one PubMed search
///
/// Constructed once per invocation by the caller and treated as immutable by
/// the pipeline. The date range is passed through to PubMed as given: an
/// inverted range (`start_date > end_date`) is not rejected here, the remote
/// service decides what an empty interval means.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Author names, in query order (may be empty)
    pub authors: Vec<String>,

    /// Title/abstract topics, in query order (may be empty)
    pub topics: Vec<String>,

    /// Start of the creation-date range
    pub start_date: NaiveDate,

    /// End of the creation-date range
    pub end_date: NaiveDate,

    /// Maximum number of articles to fetch (esearch retmax)
    pub max_results: usize,
}

impl SearchCriteria {
    /// Create criteria covering a date range, with no author or topic filters
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            authors: Vec::new(),
            topics: Vec::new(),
            start_date,
            end_date,
            max_results: 50,
        }
    }

    /// Set the author filter list
    pub fn authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the topic filter list
    pub fn topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// Set maximum results
    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }
}
