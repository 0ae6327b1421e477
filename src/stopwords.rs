use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Error, Result};

/// Words excluded from counting, matched exactly against lowercased tokens.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Load a newline-delimited list, one word per line.
    ///
    /// Each line is trimmed before insertion. A blank line becomes the empty
    /// string, which never matches a token. Bytes that are not UTF-8 are
    /// replaced rather than rejected.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let file = File::open(path_ref).map_err(|e| Error::read(path_ref, e))?;
        let reader = BufReader::new(file);

        let mut words = HashSet::new();
        for line in reader.split(b'\n') {
            let raw = line.map_err(|e| Error::read(path_ref, e))?;
            words.insert(String::from_utf8_lossy(&raw).trim().to_string());
        }

        let set = Self { words };
        if set.is_empty() {
            warn!("stopword list {} is empty", path_ref.display());
        } else {
            info!("loaded {} stopwords from {}", set.len(), path_ref.display());
        }
        Ok(set)
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .collect();
        Self { words }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
