use tracing::{info, warn};
use ureq::{Agent, http::StatusCode};

use crate::fetcher::{Fetcher, Page};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; arxiv_dump/0.1; +https://arxiv.org)";

/// Blocking fetcher backed by a `ureq` agent.
pub struct HttpFetcher {
    agent: Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        // Statuses are checked by hand so that only an exact 200 counts as a page.
        let config = Agent::config_builder().http_status_as_error(false).build();
        HttpFetcher {
            agent: Agent::new_with_config(config),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Option<Page> {
        info!("Getting page content: {url}");
        let mut res = match self.agent.get(url).header("User-Agent", USER_AGENT).call() {
            Ok(res) => res,
            Err(e) => {
                warn!("request for {url} failed: {e}");
                return None;
            }
        };

        if res.status() != StatusCode::OK {
            warn!("request for {url} returned {}", res.status());
            return None;
        }

        match res.body_mut().read_to_string() {
            Ok(body) => Some(Page {
                url: url.to_string(),
                body,
            }),
            Err(e) => {
                warn!("failed to read body of {url}: {e}");
                None
            }
        }
    }
}
