//! Single forward pass over a corpus, building per-token aggregates.
//!
//! Tokens are whole lowercased lines split on whitespace. Punctuation is left
//! attached, so `happy.` and `happy` are different tokens.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::stopwords::StopwordSet;

#[derive(Debug, Clone)]
struct TokenStats {
    token: String,
    lines: Vec<usize>,
}

/// Frequency, line-index and length tables for one corpus.
///
/// Entries are kept in first-encounter order; the count of a token is the
/// length of its line-index list.
#[derive(Debug, Clone, Default)]
pub struct WordStats {
    entries: Vec<TokenStats>,
    positions: HashMap<String, usize>,
    by_length: BTreeMap<usize, BTreeSet<String>>,
    lines_scanned: usize,
}

impl WordStats {
    pub fn scan_file<P: AsRef<Path>>(path: P, stopwords: &StopwordSet) -> Result<Self> {
        let path_ref = path.as_ref();
        let file = File::open(path_ref).map_err(|e| Error::read(path_ref, e))?;
        let stats = Self::scan_reader(BufReader::new(file), stopwords)
            .map_err(|e| Error::read(path_ref, e))?;
        info!(
            "scanned {} lines from {}: {} tokens kept, {} distinct",
            stats.lines_scanned,
            path_ref.display(),
            stats.total_tokens(),
            stats.distinct_tokens()
        );
        Ok(stats)
    }

    pub fn scan_reader<R: BufRead>(reader: R, stopwords: &StopwordSet) -> io::Result<Self> {
        let mut stats = Self::default();
        let mut skipped = 0usize;
        for (idx, line) in reader.split(b'\n').enumerate() {
            let raw = line?;
            let lowered = String::from_utf8_lossy(&raw).to_lowercase();
            for token in lowered.split_whitespace() {
                if stopwords.contains(token) {
                    skipped += 1;
                    continue;
                }
                stats.record(token, idx);
            }
            stats.lines_scanned = idx + 1;
        }
        debug!("skipped {skipped} stopword occurrences");
        Ok(stats)
    }

    fn record(&mut self, token: &str, line: usize) {
        match self.positions.get(token) {
            Some(&pos) => self.entries[pos].lines.push(line),
            None => {
                self.positions.insert(token.to_string(), self.entries.len());
                self.entries.push(TokenStats {
                    token: token.to_string(),
                    lines: vec![line],
                });
                self.by_length
                    .entry(token.chars().count())
                    .or_default()
                    .insert(token.to_string());
            }
        }
    }

    pub fn count(&self, token: &str) -> usize {
        self.line_indices(token).map_or(0, <[usize]>::len)
    }

    pub fn line_indices(&self, token: &str) -> Option<&[usize]> {
        self.positions
            .get(token)
            .map(|&pos| self.entries[pos].lines.as_slice())
    }

    /// `(token, count)` pairs in first-encounter order.
    pub fn frequencies(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|e| (e.token.as_str(), e.lines.len()))
    }

    /// Length buckets in ascending length order.
    pub fn length_groups(&self) -> impl Iterator<Item = (usize, &BTreeSet<String>)> + '_ {
        self.by_length.iter().map(|(len, words)| (*len, words))
    }

    pub fn distinct_tokens(&self) -> usize {
        self.entries.len()
    }

    pub fn total_tokens(&self) -> usize {
        self.entries.iter().map(|e| e.lines.len()).sum()
    }

    pub fn lines_scanned(&self) -> usize {
        self.lines_scanned
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scan(corpus: &str, stopwords: &[&str]) -> WordStats {
        scan_bytes(corpus.as_bytes(), stopwords)
    }

    fn scan_bytes(corpus: &[u8], stopwords: &[&str]) -> WordStats {
        let stop = StopwordSet::from_lines(stopwords.iter().copied());
        WordStats::scan_reader(Cursor::new(corpus), &stop).expect("scan corpus")
    }

    #[test]
    fn counts_lowercased_non_stopwords() {
        let stats = scan("The cat is happy\nA dog is happy too\n", &["the", "a", "is"]);
        assert_eq!(stats.count("happy"), 2);
        assert_eq!(stats.count("cat"), 1);
        assert_eq!(stats.count("the"), 0);
        assert_eq!(stats.count("The"), 0);
        assert_eq!(stats.distinct_tokens(), 4);
        assert_eq!(stats.total_tokens(), 5);
        assert_eq!(stats.lines_scanned(), 2);
    }

    #[test]
    fn records_one_line_index_per_occurrence() {
        let stats = scan("echo echo\n\necho", &[]);
        assert_eq!(stats.line_indices("echo"), Some(&[0, 0, 2][..]));
        assert_eq!(stats.count("echo"), 3);
    }

    #[test]
    fn keeps_punctuation_attached() {
        let stats = scan("happy. happy, happy", &[]);
        assert_eq!(stats.count("happy"), 1);
        assert_eq!(stats.count("happy."), 1);
        assert_eq!(stats.count("happy,"), 1);
    }

    #[test]
    fn stopwords_match_after_lowercasing() {
        let stats = scan("THE End", &["the"]);
        assert_eq!(stats.count("the"), 0);
        assert_eq!(stats.count("end"), 1);

        let stats = scan("The end", &["The"]);
        assert_eq!(stats.count("the"), 1);
    }

    #[test]
    fn frequencies_follow_first_encounter() {
        let stats = scan("b a c\na b", &[]);
        let order: Vec<_> = stats.frequencies().collect();
        assert_eq!(order, vec![("b", 2), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn groups_distinct_tokens_by_char_length() {
        let stats = scan("café cat cat dog naïve", &[]);
        let groups: Vec<_> = stats
            .length_groups()
            .map(|(len, words)| (len, words.iter().cloned().collect::<Vec<_>>()))
            .collect();
        assert_eq!(
            groups,
            vec![
                (3, vec!["cat".to_string(), "dog".to_string()]),
                (4, vec!["café".to_string()]),
                (5, vec!["naïve".to_string()]),
            ]
        );
    }

    #[test]
    fn every_token_sits_in_its_length_bucket_only() {
        let stats = scan("one two three four five six seven\nfour three", &["six"]);
        for (token, count) in stats.frequencies() {
            assert_eq!(stats.line_indices(token).map(<[usize]>::len), Some(count));
            let buckets: Vec<usize> = stats
                .length_groups()
                .filter(|(_, words)| words.contains(token))
                .map(|(len, _)| len)
                .collect();
            assert_eq!(buckets, vec![token.chars().count()]);
        }
    }

    #[test]
    fn all_stopwords_yields_empty_stats() {
        let stats = scan("the a is\nis the", &["the", "a", "is"]);
        assert!(stats.is_empty());
        assert_eq!(stats.length_groups().count(), 0);
        assert_eq!(stats.lines_scanned(), 2);
    }

    #[test]
    fn non_utf8_bytes_do_not_stop_the_scan() {
        let stats = scan_bytes(b"the cat\ncaf\xe9 cat\ndog\n", &["the"]);
        assert_eq!(stats.count("cat"), 2);
        assert_eq!(stats.line_indices("cat"), Some(&[0, 1][..]));
        assert_eq!(stats.line_indices("caf\u{FFFD}"), Some(&[1][..]));
        assert_eq!(stats.count("dog"), 1);
        assert_eq!(stats.lines_scanned(), 3);
    }
}
