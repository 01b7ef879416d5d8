//! Frequency aggregation over the lemma-occurrence corpus.

use std::collections::BTreeMap;

use crate::models::{CorpusRow, FrequencyRecord};

/// Count corpus rows per lemma, and per category when `group_by_category`
///
/// Output is ordered by lemma, then category. When grouping by category,
/// rows without a category have no group and are not counted.
pub fn aggregate(rows: &[CorpusRow], group_by_category: bool) -> Vec<FrequencyRecord> {
    let mut counts: BTreeMap<(&str, Option<&str>), u64> = BTreeMap::new();
    let mut uncategorized = 0usize;

    for row in rows {
        let category = if group_by_category {
            match row.category.as_deref() {
                Some(category) => Some(category),
                None => {
                    uncategorized += 1;
                    continue;
                }
            }
        } else {
            None
        };
        *counts.entry((row.lemma.as_str(), category)).or_insert(0) += 1;
    }

    if uncategorized > 0 {
        tracing::debug!(uncategorized, "corpus rows without category skipped");
    }

    counts
        .into_iter()
        .map(|((lemma, category), count)| FrequencyRecord {
            lemma: lemma.to_string(),
            category: category.map(str::to_string),
            count,
        })
        .collect()
}

/// Summed count of `lemma` across all its records
pub fn total_count(records: &[FrequencyRecord], lemma: &str) -> u64 {
    records
        .iter()
        .filter(|record| record.lemma == lemma)
        .map(|record| record.count)
        .sum()
}
