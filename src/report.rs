use std::io::{self, Write};

use serde::Serialize;

use crate::scanner::WordStats;

pub const DEFAULT_TOP_N: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopEntry {
    pub token: String,
    pub count: usize,
    pub lines: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthBucket {
    pub length: usize,
    pub distinct: usize,
}

/// Ordered view of a scan: most frequent tokens first, then the length histogram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub top: Vec<TopEntry>,
    pub lengths: Vec<LengthBucket>,
}

impl Report {
    pub fn build(stats: &WordStats, top_n: usize) -> Self {
        let mut ranked: Vec<(&str, usize)> = stats.frequencies().collect();
        // stable: equal counts keep first-encounter order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let top = ranked
            .into_iter()
            .take(top_n)
            .map(|(token, count)| TopEntry {
                token: token.to_string(),
                count,
                lines: stats.line_indices(token).unwrap_or_default().to_vec(),
            })
            .collect();

        let lengths = stats
            .length_groups()
            .map(|(length, words)| LengthBucket {
                length,
                distinct: words.len(),
            })
            .collect();

        Self { top, lengths }
    }

    /// Render the three blocks: counts, line indices, length histogram.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for entry in &self.top {
            writeln!(out, "{}, {}", entry.token, entry.count)?;
        }
        for entry in &self.top {
            writeln!(
                out,
                "{}, {}, {}",
                entry.token,
                entry.count,
                format_lines(&entry.lines)
            )?;
        }
        for bucket in &self.lengths {
            writeln!(out, "{}, {}", bucket.length, bucket.distinct)?;
        }
        out.flush()
    }
}

fn format_lines(lines: &[usize]) -> String {
    let joined = lines
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
