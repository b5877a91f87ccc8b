//! Per-article field extraction and the affiliation heuristic.
//!
//! Each field is pulled with an explicit fallback function returning the
//! value plus an optional [`FieldWarning`] instead of catch-all error
//! suppression. A warning never stops extraction; the article still produces
//! a row. The only skip condition is a missing PMID.

use std::collections::BTreeSet;
use std::fmt;

use crate::entrez::records::{Article, Author, PubDate, PubmedArticle};
use crate::models::OutputRow;

/// Substrings marking an affiliation as a company, matched case-insensitively
///
/// Deliberately crude: "inc" also matches inside "Princeton", and a company
/// name without any of these words slips through. The exact behavior is the
/// contract; do not tighten it.
pub const COMPANY_KEYWORDS: [&str; 5] = ["pharma", "biotech", "inc", "ltd", "corp"];

/// Punctuation stripped from both ends of an extracted email token
const EMAIL_TRIM: [char; 5] = ['.', ',', ';', '(', ')'];

/// A recoverable per-field extraction issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWarning {
    /// The record has no article title
    MissingTitle,
    /// The record has no journal publication date at all
    MissingPubDate,
    /// The record has no author list
    MissingAuthorList,
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FieldWarning::MissingTitle => "missing article title",
            FieldWarning::MissingPubDate => "missing publication date",
            FieldWarning::MissingAuthorList => "missing author list",
        };
        f.write_str(msg)
    }
}

/// A field value together with an optional warning about its provenance
#[derive(Debug, Clone)]
pub struct Extracted<T> {
    pub value: T,
    pub warning: Option<FieldWarning>,
}

impl<T> Extracted<T> {
    fn ok(value: T) -> Self {
        Self { value, warning: None }
    }

    fn with_warning(value: T, warning: FieldWarning) -> Self {
        Self { value, warning: Some(warning) }
    }
}

/// Turn one fetched article into one output row
///
/// Returns `None` only when the record carries no PMID; every other defect
/// degrades to an empty field and a `tracing` warning.
pub fn extract_row(record: &PubmedArticle) -> Option<OutputRow> {
    let citation = record.MedlineCitation.as_ref()?;
    let pmid = citation.PMID.as_ref()?.id.clone();
    let article = citation.Article.as_ref();

    let title = extract_title(article);
    if let Some(warning) = title.warning {
        tracing::warn!(%pmid, %warning, "field fallback applied");
    }

    let date = extract_pub_date(article);
    if let Some(warning) = date.warning {
        tracing::warn!(%pmid, %warning, "field fallback applied");
    }

    let authors = extract_authors(article);
    if let Some(warning) = authors.warning {
        tracing::warn!(%pmid, %warning, "field fallback applied");
    }
    let scan = authors.value;

    Some(OutputRow {
        pubmed_id: pmid,
        title: title.value,
        publication_date: date.value,
        non_academic_authors: join_sorted(&scan.non_academic),
        company_affiliations: join_sorted(&scan.companies),
        corresponding_email: scan.email.unwrap_or_default(),
    })
}

fn extract_title(article: Option<&Article>) -> Extracted<String> {
    match article.and_then(|a| a.ArticleTitle.as_ref()) {
        Some(t) => Extracted::ok(t.title.clone()),
        None => Extracted::with_warning(String::new(), FieldWarning::MissingTitle),
    }
}

fn extract_pub_date(article: Option<&Article>) -> Extracted<String> {
    let pub_date = article
        .and_then(|a| a.Journal.as_ref())
        .and_then(|j| j.JournalIssue.as_ref())
        .and_then(|ji| ji.PubDate.as_ref());

    match pub_date {
        Some(pd) => Extracted::ok(normalize_pub_date(pd)),
        None => Extracted::with_warning(String::new(), FieldWarning::MissingPubDate),
    }
}

/// Normalize a journal-issue date to `YYYY-MM-DD`
///
/// Missing pieces default low: no day gives `-01`, no month gives `-01-01`,
/// no year gives the empty string. The day is passed through exactly as
/// received, unpadded and unvalidated.
pub fn normalize_pub_date(pub_date: &PubDate) -> String {
    let year = non_empty(pub_date.Year.as_deref());
    let month = non_empty(pub_date.Month.as_deref()).map(month_to_numeric);
    let day = non_empty(pub_date.Day.as_deref());

    match (year, month, day) {
        (None, _, _) => String::new(),
        (Some(y), Some(m), Some(d)) => format!("{}-{}-{}", y, m, d),
        (Some(y), Some(m), None) => format!("{}-{}-01", y, m),
        (Some(y), None, _) => format!("{}-01-01", y),
    }
}

/// Map a three-letter month abbreviation to its zero-padded number
///
/// Anything outside the 12-entry table (already-numeric months included)
/// passes through unchanged.
fn month_to_numeric(month: &str) -> String {
    let numeric = match month {
        "Jan" => "01",
        "Feb" => "02",
        "Mar" => "03",
        "Apr" => "04",
        "May" => "05",
        "Jun" => "06",
        "Jul" => "07",
        "Aug" => "08",
        "Sep" => "09",
        "Oct" => "10",
        "Nov" => "11",
        "Dec" => "12",
        other => other,
    };
    numeric.to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Result of scanning one article's author list
#[derive(Debug, Default)]
pub struct AuthorScan {
    /// Full names of authors whose affiliation did not look corporate
    pub non_academic: BTreeSet<String>,
    /// Affiliation strings that matched the company heuristic
    pub companies: BTreeSet<String>,
    /// First email found in any affiliation, if any
    pub email: Option<String>,
}

fn extract_authors(article: Option<&Article>) -> Extracted<AuthorScan> {
    match article.and_then(|a| a.AuthorList.as_ref()) {
        Some(list) => Extracted::ok(scan_authors(&list.authors)),
        None => Extracted::with_warning(AuthorScan::default(), FieldWarning::MissingAuthorList),
    }
}

/// Classify authors by their first affiliation string
///
/// Authors with no affiliation entries are skipped entirely. When an entry
/// exists but its text is absent, the empty string is classified, which lands
/// the author in the non-academic set if they have a full name.
pub fn scan_authors(authors: &[Author]) -> AuthorScan {
    let mut scan = AuthorScan::default();

    for author in authors {
        let Some(first) = author.affiliations.first() else {
            continue;
        };
        let affiliation = first.Affiliation.as_deref().unwrap_or_default();

        if is_company_affiliation(affiliation) {
            scan.companies.insert(affiliation.to_string());
        } else {
            let name = full_name(author);
            if !name.is_empty() {
                scan.non_academic.insert(name);
            }
        }

        if scan.email.is_none() {
            scan.email = find_email(affiliation);
        }
    }

    scan
}

/// True when the affiliation contains any company keyword, ignoring case
pub fn is_company_affiliation(affiliation: &str) -> bool {
    let lowered = affiliation.to_lowercase();
    COMPANY_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// First whitespace-separated token containing `@`, trimmed of punctuation
pub fn find_email(affiliation: &str) -> Option<String> {
    if !affiliation.contains('@') {
        return None;
    }
    affiliation
        .split_whitespace()
        .find(|token| token.contains('@'))
        .map(|token| token.trim_matches(EMAIL_TRIM).to_string())
}

/// `"LastName ForeName"` when both parts exist, otherwise empty
fn full_name(author: &Author) -> String {
    match (&author.LastName, &author.ForeName) {
        (Some(last), Some(fore)) => format!("{} {}", last.name, fore.name).trim().to_string(),
        _ => String::new(),
    }
}

fn join_sorted(set: &BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entrez::records::{AffiliationInfo, NameText};

    fn pub_date(year: Option<&str>, month: Option<&str>, day: Option<&str>) -> PubDate {
        PubDate {
            Year: year.map(String::from),
            Month: month.map(String::from),
            Day: day.map(String::from),
        }
    }

    fn author(last: Option<&str>, fore: Option<&str>, affiliations: &[&str]) -> Author {
        Author {
            LastName: last.map(|n| NameText { name: n.to_string() }),
            ForeName: fore.map(|n| NameText { name: n.to_string() }),
            affiliations: affiliations
                .iter()
                .map(|a| AffiliationInfo {
                    Affiliation: Some(a.to_string()),
                })
                .collect(),
        }
    }

    #[test]
    fn test_date_year_only() {
        assert_eq!(normalize_pub_date(&pub_date(Some("2020"), None, None)), "2020-01-01");
    }

    #[test]
    fn test_date_year_and_abbreviated_month() {
        assert_eq!(
            normalize_pub_date(&pub_date(Some("2020"), Some("Mar"), None)),
            "2020-03-01"
        );
    }

    #[test]
    fn test_date_day_passes_through_unpadded() {
        assert_eq!(
            normalize_pub_date(&pub_date(Some("2020"), Some("Mar"), Some("5"))),
            "2020-03-5"
        );
    }

    #[test]
    fn test_date_numeric_month_unchanged() {
        assert_eq!(
            normalize_pub_date(&pub_date(Some("2020"), Some("11"), Some("23"))),
            "2020-11-23"
        );
    }

    #[test]
    fn test_date_missing_year_is_empty() {
        assert_eq!(normalize_pub_date(&pub_date(None, Some("Mar"), Some("5"))), "");
    }

    #[test]
    fn test_date_day_without_month_falls_back() {
        assert_eq!(
            normalize_pub_date(&pub_date(Some("2020"), None, Some("5"))),
            "2020-01-01"
        );
    }

    #[test]
    fn test_company_keywords_case_insensitive() {
        assert!(is_company_affiliation("XYZ PHARMA Inc, Boston"));
        assert!(is_company_affiliation("Acme Biotech"));
        assert!(!is_company_affiliation("Dept. of Biology, Harvard University"));
    }

    #[test]
    fn test_company_substring_false_positive_is_preserved() {
        // "Princeton" contains "inc"; the heuristic is the contract.
        assert!(is_company_affiliation("Princeton University"));
    }

    #[test]
    fn test_scan_company_author_not_in_non_academic_set() {
        let scan = scan_authors(&[author(
            Some("Smith"),
            Some("Jane"),
            &["XYZ Pharma Inc, Boston"],
        )]);
        assert!(scan.non_academic.is_empty());
        assert_eq!(
            scan.companies.iter().cloned().collect::<Vec<_>>(),
            vec!["XYZ Pharma Inc, Boston"]
        );
    }

    #[test]
    fn test_scan_academic_author_goes_to_non_academic_set() {
        let scan = scan_authors(&[author(
            Some("Doe"),
            Some("John"),
            &["Dept. of Biology, Harvard University"],
        )]);
        assert!(scan.companies.is_empty());
        assert_eq!(
            scan.non_academic.iter().cloned().collect::<Vec<_>>(),
            vec!["Doe John"]
        );
    }

    #[test]
    fn test_scan_skips_author_without_affiliation() {
        let scan = scan_authors(&[author(Some("Doe"), Some("John"), &[])]);
        assert!(scan.non_academic.is_empty());
        assert!(scan.companies.is_empty());
        assert!(scan.email.is_none());
    }

    #[test]
    fn test_scan_uses_first_affiliation_only() {
        let scan = scan_authors(&[author(
            Some("Doe"),
            Some("John"),
            &["University of Oxford", "Consulting for XYZ Pharma Inc"],
        )]);
        assert!(scan.companies.is_empty());
        assert_eq!(scan.non_academic.len(), 1);
    }

    #[test]
    fn test_scan_nameless_author_contributes_nothing_to_sets() {
        let scan = scan_authors(&[author(None, None, &["Some Institute of Science"])]);
        assert!(scan.non_academic.is_empty());
        assert!(scan.companies.is_empty());
    }

    #[test]
    fn test_email_trimmed_of_punctuation() {
        assert_eq!(
            find_email("Harvard Univ (jdoe@harvard.edu)."),
            Some("jdoe@harvard.edu".to_string())
        );
    }

    #[test]
    fn test_email_none_without_at_sign() {
        assert_eq!(find_email("Harvard University, Cambridge MA"), None);
    }

    #[test]
    fn test_first_email_wins_across_authors() {
        let scan = scan_authors(&[
            author(Some("A"), Some("B"), &["Univ One first@one.edu"]),
            author(Some("C"), Some("D"), &["Univ Two second@two.edu"]),
        ]);
        assert_eq!(scan.email.as_deref(), Some("first@one.edu"));
    }

    #[test]
    fn test_sets_deduplicate_and_sort() {
        let scan = scan_authors(&[
            author(Some("Zimmer"), Some("Kay"), &["Univ B"]),
            author(Some("Abel"), Some("Nina"), &["Univ A"]),
            author(Some("Zimmer"), Some("Kay"), &["Univ B"]),
        ]);
        assert_eq!(join_sorted(&scan.non_academic), "Abel Nina, Zimmer Kay");
    }

    #[test]
    fn test_extract_row_skips_record_without_pmid() {
        let record = PubmedArticle {
            MedlineCitation: Some(crate::entrez::records::MedlineCitation {
                PMID: None,
                Article: None,
            }),
        };
        assert!(extract_row(&record).is_none());
    }

    #[test]
    fn test_extract_row_defaults_missing_fields() {
        let record = PubmedArticle {
            MedlineCitation: Some(crate::entrez::records::MedlineCitation {
                PMID: Some(crate::entrez::records::Pmid {
                    id: "42".to_string(),
                }),
                Article: None,
            }),
        };
        let row = extract_row(&record).unwrap();
        assert_eq!(row.pubmed_id, "42");
        assert_eq!(row.title, "");
        assert_eq!(row.publication_date, "");
        assert_eq!(row.non_academic_authors, "");
        assert_eq!(row.company_affiliations, "");
        assert_eq!(row.corresponding_email, "");
    }
}
