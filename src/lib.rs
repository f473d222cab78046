//! Dump the metadata of recently submitted arXiv papers to one JSON file per paper.
//!
//! The pipeline is strictly sequential: fetch a category's "recent" listing, pull the paper links
//! out of it, and for every paper not already dumped somewhere under the output folder, fetch its
//! abstract page, parse it and write `<output>/<category>/<code>.json`.

pub mod crawler;
pub mod fetcher;
pub mod listing;
pub mod paper;
pub mod storage;

#[cfg(test)]
mod test_support;
