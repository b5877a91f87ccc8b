//! Output row model, one per processed article.

use serde::{Deserialize, Serialize};

/// One extracted article, in export column order
///
/// The serde renames double as the fixed CSV header, so serializing a row
/// through [`csv::Writer`](csv::Writer) yields exactly:
/// `PubmedID,Title,Publication Date,Non-academic Author(s),Company Affiliation(s),Corresponding Author Email`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    /// PubMed identifier of the article
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,

    /// Article title, empty if absent in the record
    #[serde(rename = "Title")]
    pub title: String,

    /// Normalized publication date (`YYYY-MM-DD`), empty if the record has no year
    #[serde(rename = "Publication Date")]
    pub publication_date: String,

    /// Unique non-academic author names, sorted and joined with ", "
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,

    /// Unique company affiliation strings, sorted and joined with ", "
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,

    /// First email found in any author affiliation, empty if none
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}
