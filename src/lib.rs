pub mod error;
pub mod report;
pub mod scanner;
pub mod stopwords;

use std::io::Write;
use std::path::PathBuf;

pub use error::{Error, Result};
pub use report::{DEFAULT_TOP_N, LengthBucket, Report, TopEntry};
pub use scanner::WordStats;
pub use stopwords::StopwordSet;

pub const DEFAULT_STOPWORDS: &str = "englishST.txt";
pub const DEFAULT_CORPUS: &str = "blue.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub stopwords_path: PathBuf,
    pub corpus_path: PathBuf,
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stopwords_path: PathBuf::from(DEFAULT_STOPWORDS),
            corpus_path: PathBuf::from(DEFAULT_CORPUS),
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Load stopwords, scan the corpus and write the report to `out`.
///
/// Both files are read before anything is written, so a read failure leaves
/// `out` untouched.
pub fn run<W: Write>(config: &Config, out: W) -> Result<Report> {
    let stopwords = StopwordSet::load(&config.stopwords_path)?;
    let stats = WordStats::scan_file(&config.corpus_path, &stopwords)?;
    let report = Report::build(&stats, config.top_n);
    report.write_to(out)?;
    Ok(report)
}
