//! Canned arXiv markup shared by unit tests.

use std::{cell::RefCell, collections::HashMap};

use crate::fetcher::{Fetcher, Page};

/// An abstract page shaped like the real thing, optionally without its `citation_date` tag.
pub fn detail_page(code: &str, with_date: bool) -> String {
    let date = if with_date {
        "<meta name=\"citation_date\" content=\"2021/01/01\" />\n"
    } else {
        ""
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta name="citation_title" content="Finite elements for paper {code}" />
<meta name="citation_author" content="Doe, Jane" />
<meta name="citation_author" content="Roe, Richard" />
{date}<meta name="citation_online_date" content="2021/01/02" />
<meta name="citation_arxiv_id" content="{code}" />
</head>
<body>
<h1 class="title mathjax"><span class="descriptor">Title:</span>Finite elements for paper {code}</h1>
<blockquote class="abstract mathjax">
<span class="descriptor">Abstract:</span>  We study things carefully.
</blockquote>
<table summary="Additional metadata">
<tr>
<td class="tablecell label">Comments:</td>
<td class="tablecell comments mathjax">12 pages, 3 figures</td>
</tr>
<tr>
<td class="tablecell label">Subjects:</td>
<td class="tablecell subjects"><span class="primary-subject">Computational Engineering, Finance, and Science (cs.CE)</span>; Artificial Intelligence (cs.AI); Numerical Analysis (math.NA)</td>
</tr>
</table>
</body>
</html>
"#
    )
}

/// A "recent submissions" listing linking to each code in order.
pub fn listing_page(codes: &[&str]) -> String {
    let mut html = String::from("<html><body><dl>\n");
    for code in codes {
        html.push_str(&format!(
            "<dt><a name=\"item\"></a><span class=\"list-identifier\"><a href=\"/abs/{code}\" title=\"Abstract\">arXiv:{code}</a> [<a href=\"/pdf/{code}\" title=\"Download PDF\">pdf</a>]</span></dt>\n"
        ));
    }
    html.push_str("</dl></body></html>\n");
    html
}

/// In-memory fetcher: URLs without a body behave like a failed request. Every request is recorded.
#[derive(Default)]
pub struct CannedFetcher {
    pages: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl CannedFetcher {
    pub fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for CannedFetcher {
    fn fetch(&self, url: &str) -> Option<Page> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages.get(url).map(|body| Page {
            url: url.to_string(),
            body: body.clone(),
        })
    }
}
