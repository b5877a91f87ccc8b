//! Serde models for E-utilities XML payloads.
//!
//! Field names mirror the PubMed DTD, so the structs opt out of snake_case.
//! Everything below the article set is optional: records in the wild omit
//! titles, dates, author names, and affiliations freely, and a missing field
//! must deserialize rather than fail the whole article.

use serde::Deserialize;

/// `esearch.fcgi` response body
#[derive(Debug, Default, Deserialize)]
#[allow(non_snake_case)]
pub struct ESearchResult {
    #[serde(default)]
    pub IdList: IdList,
}

/// List of matching PMIDs
#[derive(Debug, Default, Deserialize)]
pub struct IdList {
    #[serde(rename = "Id", default)]
    pub ids: Vec<String>,
}

/// `efetch.fcgi` response body
#[derive(Debug, Default, Deserialize)]
pub struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticle>,
}

/// One fetched article record
#[derive(Debug, Default, Deserialize)]
#[allow(non_snake_case)]
pub struct PubmedArticle {
    pub MedlineCitation: Option<MedlineCitation>,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub struct MedlineCitation {
    pub PMID: Option<Pmid>,
    pub Article: Option<Article>,
}

/// PMID carries a Version attribute, so the value lives in `$text`
#[derive(Debug, Deserialize)]
pub struct Pmid {
    #[serde(rename = "$text")]
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub struct Article {
    pub ArticleTitle: Option<ArticleTitle>,
    pub Journal: Option<Journal>,
    pub AuthorList: Option<AuthorList>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleTitle {
    #[serde(rename = "$text")]
    pub title: String,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub struct Journal {
    pub JournalIssue: Option<JournalIssue>,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub struct JournalIssue {
    pub PubDate: Option<PubDate>,
}

/// Journal issue publication date
///
/// Month may be a three-letter abbreviation ("Mar") or a two-digit string;
/// normalization happens in the extractor, not here.
#[derive(Debug, Default, Deserialize)]
#[allow(non_snake_case)]
pub struct PubDate {
    pub Year: Option<String>,
    pub Month: Option<String>,
    pub Day: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthorList {
    #[serde(rename = "Author", default)]
    pub authors: Vec<Author>,
}

#[derive(Debug, Default, Deserialize)]
#[allow(non_snake_case)]
pub struct Author {
    pub LastName: Option<NameText>,
    pub ForeName: Option<NameText>,
    #[serde(rename = "AffiliationInfo", default)]
    pub affiliations: Vec<AffiliationInfo>,
}

#[derive(Debug, Deserialize)]
pub struct NameText {
    #[serde(rename = "$text")]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[allow(non_snake_case)]
pub struct AffiliationInfo {
    pub Affiliation: Option<String>,
}
