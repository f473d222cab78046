use std::path::{Path, PathBuf};

use clap::Parser;

use arxiv_dump::listing::ARXIV_URL;

/// Crawler for dumping recent papers from arxiv.org
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Science code area category (e.g. cs, cs.CE, physics, ...)
    #[arg(value_name = "CODE", required_unless_present = "codes_areas")]
    pub codes: Vec<String>,

    /// Same as the positional codes; kept for scripts written against the `--codes_areas` form
    #[arg(long = "codes_areas", value_name = "CODE", num_args = 1..)]
    pub codes_areas: Vec<String>,

    /// Folder where the dump will be saved [default: folder of this executable]
    #[arg(short, long, value_name = "DIR", visible_alias = "output_folder")]
    pub output_folder: Option<PathBuf>,

    /// Root of the site to crawl
    #[arg(long, value_name = "URL", default_value = ARXIV_URL)]
    pub base_url: String,
}

impl Cli {
    /// Codes given through `--codes_areas` first, then the positional ones.
    pub fn code_areas(&self) -> Vec<String> {
        self.codes_areas.iter().chain(&self.codes).cloned().collect()
    }

    /// The output folder, falling back to the executable's folder and then to the current one.
    pub fn output_root(&self) -> PathBuf {
        self.output_folder.clone().unwrap_or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }
}
