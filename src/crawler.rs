use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    fetcher::Fetcher,
    listing::{SiteUrls, extract_paper_urls},
    paper::{fields::parse_detail, paper_code},
    storage,
};

/// Where dumps go and which site they come from.
#[derive(Clone, Debug)]
pub struct CrawlConfig {
    pub output_root: PathBuf,
    pub urls: SiteUrls,
}

/// Counts for one category code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorySummary {
    pub code_area: String,
    /// Paper links found on the listing page, repeats included.
    pub listed: usize,
    pub saved: usize,
    /// Already dumped under some category before this paper came up.
    pub skipped: usize,
    /// Abstract page could not be fetched.
    pub failed: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub categories: Vec<CategorySummary>,
}

impl RunSummary {
    pub fn total_saved(&self) -> usize {
        self.categories.iter().map(|c| c.saved).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.categories.iter().map(|c| c.skipped).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.categories.iter().map(|c| c.failed).sum()
    }
}

/// Dumps the recent papers of each requested category, one request at a time.
pub struct Crawler<F> {
    fetcher: F,
    config: CrawlConfig,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F, config: CrawlConfig) -> Self {
        Crawler { fetcher, config }
    }

    pub fn run<S: AsRef<str>>(&self, code_areas: &[S]) -> anyhow::Result<RunSummary> {
        let mut summary = RunSummary::default();
        for code_area in code_areas {
            let category = self.crawl_category(code_area.as_ref())?;
            info!(
                "Number of papers saved for code {}: #{}",
                category.code_area, category.saved
            );
            summary.categories.push(category);
        }
        info!("Total number of papers saved: #{}", summary.total_saved());
        Ok(summary)
    }

    fn crawl_category(&self, code_area: &str) -> anyhow::Result<CategorySummary> {
        let folder = self.config.output_root.join(code_area);
        storage::ensure_directory(&folder);

        let mut summary = CategorySummary {
            code_area: code_area.to_string(),
            ..Default::default()
        };

        let listing_url = self.config.urls.recent_listing(code_area);
        let paper_urls = match self.fetcher.fetch(&listing_url) {
            Some(page) => extract_paper_urls(&page.body, &self.config.urls),
            None => {
                warn!("no listing for {code_area}, nothing to do");
                Vec::new()
            }
        };
        summary.listed = paper_urls.len();

        for paper_url in paper_urls {
            // Checked against the whole output root so a paper cross-listed in an earlier
            // category is not fetched twice.
            if storage::exists(&self.config.output_root, paper_code(&paper_url)) {
                summary.skipped += 1;
                continue;
            }

            let Some(page) = self.fetcher.fetch(&paper_url) else {
                summary.failed += 1;
                continue;
            };
            let record = parse_detail(&page);
            storage::save(&folder, &record)?;
            summary.saved += 1;
        }

        Ok(summary)
    }
}
