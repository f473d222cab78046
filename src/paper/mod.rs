use serde::{Deserialize, Serialize};

pub mod fields;

/// Metadata of one arXiv paper, as scraped from its abstract page.
///
/// Every field apart from the URL and the code derived from it is optional: a page that lacks a
/// field still produces a record, and the missing field is written out as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    #[serde(rename = "paper_code")]
    code: String,
    #[serde(rename = "paper_page_url")]
    page_url: String,
    #[serde(rename = "paper_title")]
    title: Option<String>,
    #[serde(rename = "paper_authors_list")]
    authors: Option<Vec<String>>,
    #[serde(rename = "paper_submission_date")]
    submission_date: Option<String>,
    #[serde(rename = "paper_abstract")]
    abstract_text: Option<String>,
    #[serde(rename = "paper_comments")]
    comments: Option<String>,
    #[serde(rename = "paper_subjects")]
    subjects: Option<Vec<String>>,
}

/// The parsed, page-dependent part of a [`PaperRecord`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaperFields {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub submission_date: Option<String>,
    pub abstract_text: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub comments: Option<String>,
}

impl PaperRecord {
    pub fn new(page_url: impl Into<String>, fields: PaperFields) -> Self {
        let page_url = page_url.into();
        let PaperFields {
            title,
            authors,
            submission_date,
            abstract_text,
            subjects,
            comments,
        } = fields;
        PaperRecord {
            code: paper_code(&page_url).to_string(),
            page_url,
            title,
            authors,
            submission_date,
            abstract_text,
            comments,
            subjects,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn authors(&self) -> Option<&[String]> {
        self.authors.as_deref()
    }

    pub fn submission_date(&self) -> Option<&str> {
        self.submission_date.as_deref()
    }

    pub fn abstract_text(&self) -> Option<&str> {
        self.abstract_text.as_deref()
    }

    pub fn subjects(&self) -> Option<&[String]> {
        self.subjects.as_deref()
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }
}

/// The paper code is whatever follows the last `/` of the abstract page URL.
pub fn paper_code(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
