//! E-utilities search term construction.
//!
//! Pure string building: author and topic OR-clauses in input order, joined
//! with `AND`, followed by a `[Date - Create]` range clause that is always
//! present and always last. Names and topics are inserted verbatim, without
//! escaping or validation, and the date range is not checked for ordering.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::error::Error;
use crate::models::SearchCriteria;

const DATE_FMT: &str = "%Y/%m/%d";
const INPUT_DATE_FMT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` input date
///
/// Front ends call this before touching the network, so a malformed date
/// aborts the invocation without a single request being issued.
pub fn parse_input_date(value: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value, INPUT_DATE_FMT)
        .map_err(|_| Error::DateFormat(value.to_string()))
}

/// Build the full esearch term for the given criteria
///
/// With no authors and no topics the term is exactly the date-range clause.
pub fn build_term(criteria: &SearchCriteria) -> Result<String, Error> {
    let date_range = format!(
        "(\"{}\"[Date - Create] : \"{}\"[Date - Create])",
        render_date(criteria.start_date)?,
        render_date(criteria.end_date)?,
    );

    let mut clauses = Vec::new();
    if !criteria.authors.is_empty() {
        clauses.push(or_clause(&criteria.authors, "Author"));
    }
    if !criteria.topics.is_empty() {
        clauses.push(or_clause(&criteria.topics, "Title/Abstract"));
    }

    if clauses.is_empty() {
        Ok(date_range)
    } else {
        Ok(format!("{} AND {}", clauses.join(" AND "), date_range))
    }
}

/// Parenthesized OR-list of `term[field]` entries, in input order
fn or_clause(terms: &[String], field: &str) -> String {
    let tagged: Vec<String> = terms.iter().map(|t| format!("{}[{}]", t, field)).collect();
    format!("({})", tagged.join(" OR "))
}

/// Render a date as zero-padded `YYYY/MM/DD`
///
/// Chrono formatting reports failure through the `Display` impl, so the
/// result is captured with `write!` rather than `to_string`.
fn render_date(date: NaiveDate) -> Result<String, Error> {
    let mut out = String::new();
    write!(out, "{}", date.format(DATE_FMT)).map_err(|_| Error::DateFormat(date.to_string()))?;
    Ok(out)
}
