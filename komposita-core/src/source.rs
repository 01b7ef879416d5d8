//! Source table loading
//!
//! Both inputs are tab-separated without any quote handling:
//! - the lemmatized corpus, one token per row, with a header naming at least
//!   a `lemma` column and optionally a category column;
//! - the compound-split table, headerless, eight columns of which the
//!   constituent count, the lemma and the space-separated constituents are
//!   used.
//!
//! Rows that do not fit are skipped and counted, never fatal.

use std::path::Path;

use crate::config::ExplorerConfig;
use crate::constants::SourceDefaults;
use crate::models::{CorpusRow, SplitRow};

/// Both source tables of one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    pub corpus: Vec<CorpusRow>,
    pub splits: Vec<SplitRow>,
}

impl Sources {
    /// Read both tables from disk
    pub fn load(corpus_path: &Path, splits_path: &Path, config: &ExplorerConfig) -> crate::Result<Self> {
        let corpus = parse_corpus(&read_source(corpus_path)?, &config.category_column)?;
        let splits = parse_splits(&read_source(splits_path)?);

        tracing::info!(
            corpus = %corpus_path.display(),
            splits = %splits_path.display(),
            corpus_rows = corpus.len(),
            split_rows = splits.len(),
            "sources loaded"
        );

        Ok(Self { corpus, splits })
    }
}

fn read_source(path: &Path) -> crate::Result<String> {
    std::fs::read_to_string(path).map_err(|source| crate::Error::SourceFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the corpus table
///
/// Fails only when the header lacks a `lemma` column. A missing category
/// column yields uncategorized rows. Empty cells count as missing.
pub fn parse_corpus(content: &str, category_column: &str) -> crate::Result<Vec<CorpusRow>> {
    let mut lines = content.lines();
    let header: Vec<&str> = lines
        .next()
        .map(|line| line.split('\t').map(str::trim).collect())
        .unwrap_or_default();

    let lemma_index = header
        .iter()
        .position(|name| *name == SourceDefaults::LEMMA_COLUMN)
        .ok_or_else(|| {
            crate::Error::Source(format!(
                "corpus header has no '{}' column",
                SourceDefaults::LEMMA_COLUMN
            ))
        })?;
    let category_index = header.iter().position(|name| *name == category_column);
    if category_index.is_none() {
        tracing::warn!(category_column, "corpus has no category column; categories unavailable");
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for line in lines.filter(|line| !line.trim().is_empty()) {
        let fields: Vec<&str> = line.split('\t').collect();
        let Some(lemma) = cell(&fields, lemma_index) else {
            skipped += 1;
            continue;
        };
        let category = category_index.and_then(|index| cell(&fields, index));
        rows.push(CorpusRow::new(lemma, category));
    }

    if skipped > 0 {
        tracing::debug!(skipped, "corpus rows without lemma skipped");
    }

    Ok(rows)
}

/// Parse the compound-split table
pub fn parse_splits(content: &str) -> Vec<SplitRow> {
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for line in content.lines().filter(|line| !line.trim().is_empty()) {
        let fields: Vec<&str> = line.split('\t').collect();
        let parsed = (
            cell(&fields, SourceDefaults::SPLIT_DEPTH_COLUMN).and_then(parse_depth),
            cell(&fields, SourceDefaults::SPLIT_LEMMA_COLUMN),
            fields.get(SourceDefaults::SPLIT_COMPONENTS_COLUMN),
        );
        match parsed {
            (Some(depth), Some(lemma), Some(components)) => {
                rows.push(SplitRow::new(depth, lemma, components.trim()));
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "malformed split rows skipped");
    }

    rows
}

fn cell<'a>(fields: &[&'a str], index: usize) -> Option<&'a str> {
    fields
        .get(index)
        .map(|field| field.trim())
        .filter(|field| !field.is_empty())
}

/// Integral depth, also accepting float spellings such as `2.0`
fn parse_depth(field: &str) -> Option<i64> {
    field.parse::<i64>().ok().or_else(|| {
        field
            .parse::<f64>()
            .ok()
            .filter(|value| value.fract() == 0.0 && value.is_finite())
            .map(|value| value as i64)
    })
}
