//! Reading the `url` column out of a CSV file, row by row.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Header name of the consumed column.
pub const URL_COLUMN: &str = "url";

/// Streaming iterator over the non-blank `url` values of a CSV file, in file order.
///
/// Values are trimmed; rows where the column is missing or blank are skipped
/// and counted. Parse errors are yielded as `Err` and end the iteration for the
/// caller (no partial-row recovery).
pub struct CsvUrls {
    records: csv::StringRecordsIntoIter<File>,
    url_index: Option<usize>,
    path: PathBuf,
    skipped: usize,
}

impl CsvUrls {
    /// Open `path` and read its header row.
    pub fn open(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("failed to open CSV {}", path.display()))?;
        let url_index = reader
            .headers()
            .with_context(|| format!("failed to read CSV header of {}", path.display()))?
            .iter()
            .position(|h| h == URL_COLUMN);
        if url_index.is_none() {
            tracing::warn!(path = %path.display(), "CSV has no `url` column; every row will be skipped");
        }
        Ok(Self {
            records: reader.into_records(),
            url_index,
            path: path.to_path_buf(),
            skipped: 0,
        })
    }

    /// Rows skipped so far because the `url` value was missing or blank.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Iterator for CsvUrls {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(r) => r,
                Err(e) => {
                    return Some(
                        Err(e).with_context(|| format!("failed to parse CSV {}", self.path.display())),
                    )
                }
            };
            let value = self
                .url_index
                .and_then(|i| record.get(i))
                .unwrap_or("")
                .trim();
            if value.is_empty() {
                self.skipped += 1;
                tracing::debug!(line = ?record.position().map(|p| p.line()), "skipping row with blank url");
                continue;
            }
            return Some(Ok(value.to_string()));
        }
    }
}

/// Collect every non-blank `url` value of the file; fails on the first parse error.
pub fn read_urls(path: &Path) -> Result<Vec<String>> {
    CsvUrls::open(path)?.collect()
}
