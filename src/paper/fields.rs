//! Field extractors for arXiv abstract pages.
//!
//! Each extractor works on the raw markup and is independent of the others, so a page that is
//! missing one field still yields the rest.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::{
    fetcher::Page,
    paper::{PaperFields, PaperRecord},
};

const ABSTRACT_START: &str = "Abstract:</span>";
const ABSTRACT_END: &str = "</blockquote>";

static TITLE_RE: Lazy<Regex> = Lazy::new(|| citation_meta("citation_title"));
static AUTHOR_RE: Lazy<Regex> = Lazy::new(|| citation_meta("citation_author"));
static DATE_RE: Lazy<Regex> = Lazy::new(|| citation_meta("citation_date"));
static SUBJECTS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<td.*subjects.*">.*</span>;(.*)</td>"#).unwrap());
static COMMENTS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<td.*comment.*>(.*)</td>").unwrap());

/// `<meta name="citation_xxx" content="..." />`, capturing the content.
fn citation_meta(name: &str) -> Regex {
    Regex::new(&format!(
        r#"<meta\sname="{}"\scontent="(.+)"\s*/>"#,
        regex::escape(name)
    ))
    .unwrap()
}

fn first_capture(re: &Regex, page: &str) -> Option<String> {
    re.captures(page)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn title(page: &str) -> Option<String> {
    first_capture(&TITLE_RE, page)
}

/// All `citation_author` tags, in page order. Unlike the other fields this keeps every match.
pub fn authors(page: &str) -> Option<Vec<String>> {
    let authors: Vec<String> = AUTHOR_RE
        .captures_iter(page)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect();
    (!authors.is_empty()).then_some(authors)
}

pub fn submission_date(page: &str) -> Option<String> {
    first_capture(&DATE_RE, page)
}

/// Text between the `Abstract:` label and the end of its blockquote, trimmed.
///
/// An abstract that trims down to nothing is `Some("")`; `None` means a marker was not found.
pub fn abstract_text(page: &str) -> Option<String> {
    let start = page.find(ABSTRACT_START)? + ABSTRACT_START.len();
    let end = start + page[start..].find(ABSTRACT_END)?;
    Some(page[start..end].trim().to_string())
}

/// Subjects listed after the primary subject span, split on `;`.
pub fn subjects(page: &str) -> Option<Vec<String>> {
    let segment = first_capture(&SUBJECTS_RE, page)?;
    Some(split_subjects(&segment))
}

pub(crate) fn split_subjects(segment: &str) -> Vec<String> {
    segment
        .trim()
        .split(';')
        .map(|s| s.trim().to_string())
        .collect()
}

pub fn comments(page: &str) -> Option<String> {
    first_capture(&COMMENTS_RE, page).map(|c| c.trim().to_string())
}

/// Run every extractor over a fetched abstract page and build the record for it.
pub fn parse_detail(page: &Page) -> PaperRecord {
    info!("Generating paper: {}", page.url);
    let html = page.body.as_str();
    PaperRecord::new(
        page.url.clone(),
        PaperFields {
            title: title(html),
            authors: authors(html),
            submission_date: submission_date(html),
            abstract_text: abstract_text(html),
            subjects: subjects(html),
            comments: comments(html),
        },
    )
}
