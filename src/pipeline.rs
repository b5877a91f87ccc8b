//! Search-then-extract orchestration.
//!
//! One esearch, then one efetch per PMID, strictly in order. Query building
//! and the initial search are fatal on failure; a failed per-article fetch is
//! logged and skipped so one bad record never sinks the run.

use crate::entrez::EntrezClient;
use crate::error::Error;
use crate::extract::extract_row;
use crate::models::{OutputRow, SearchCriteria};
use crate::query::build_term;

/// Run the full pipeline for one set of criteria
///
/// Returns rows in fetch order, at most one per PMID found. The result is
/// `Err` only when the query cannot be built or the initial search fails.
pub async fn search_and_extract(
    client: &EntrezClient,
    criteria: &SearchCriteria,
) -> Result<Vec<OutputRow>, Error> {
    let term = build_term(criteria)?;
    tracing::debug!(%term, "constructed query");

    let pmids = client
        .esearch(&term, criteria.max_results)
        .await
        .map_err(Error::Search)?;
    tracing::info!(count = pmids.len(), "found articles");

    let mut rows = Vec::with_capacity(pmids.len());
    for pmid in &pmids {
        let record_set = match client.efetch(pmid).await {
            Ok(set) => set,
            Err(error) => {
                tracing::warn!(%pmid, %error, "skipping article after fetch failure");
                continue;
            }
        };

        for record in &record_set.articles {
            match extract_row(record) {
                Some(row) => rows.push(row),
                None => tracing::warn!(%pmid, "skipping record without PMID"),
            }
        }
    }

    Ok(rows)
}
