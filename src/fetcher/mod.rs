pub mod http;

/// A page fetched with a successful status, together with the URL it was requested from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub url: String,
    pub body: String,
}

/// Anything that can turn a URL into a [`Page`].
///
/// Implementations never fail loudly: a transport error or a non-200 status is reported as `None`,
/// and callers treat that as "skip this item".
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Option<Page>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Option<Page> {
        (**self).fetch(url)
    }
}
