use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;
use url::Url;

pub const ARXIV_URL: &str = "https://arxiv.org";

/// URL templates for a site laid out like arXiv.
#[derive(Clone, Debug)]
pub struct SiteUrls {
    base: String,
}

impl SiteUrls {
    /// Accepts any absolute http(s) URL; a trailing slash is dropped.
    pub fn new(base: &str) -> anyhow::Result<Self> {
        let parsed = Url::parse(base)?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => anyhow::bail!("unsupported scheme {other:?} in base URL {base}"),
        }
        Ok(SiteUrls {
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// Listing of recent submissions for a category, e.g. `/list/cs.CE/recent`.
    pub fn recent_listing(&self, code_area: &str) -> String {
        format!("{}/list/{}/recent", self.base, code_area)
    }

    /// Abstract page of a single paper, e.g. `/abs/2101.00001`.
    pub fn paper(&self, paper_code: &str) -> String {
        format!("{}/abs/{}", self.base, paper_code)
    }
}

impl Default for SiteUrls {
    fn default() -> Self {
        SiteUrls {
            base: ARXIV_URL.to_string(),
        }
    }
}

/// Pull every `/abs/<digits>.<digits>` anchor out of a listing page, in document order, and turn
/// each into an absolute abstract-page URL. Repeated anchors are kept.
pub fn extract_paper_urls(page: &str, urls: &SiteUrls) -> Vec<String> {
    static ABS_LINK_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r#"a\shref="/abs/(\d*\.\d*)""#).unwrap());

    info!("Extracting papers url");
    ABS_LINK_RE
        .captures_iter(page)
        .filter_map(|c| c.get(1))
        .map(|m| urls.paper(m.as_str()))
        .collect()
}
