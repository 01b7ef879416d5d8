//! Category (party) filtering.

use std::collections::BTreeSet;

use crate::models::{CorpusRow, JoinedRecord};

/// Distinct categories in the corpus, ascending
pub fn categories(rows: &[CorpusRow]) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.category.as_deref())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Keep records counted under one of the `selected` categories
///
/// In a per-category table each record carries the frequency of its lemma
/// within one category, so a record is eligible exactly when that category
/// is selected. Uncategorized records never pass, and an empty selection
/// keeps nothing.
pub fn restrict_to_categories(
    records: &[JoinedRecord],
    selected: &BTreeSet<String>,
) -> Vec<JoinedRecord> {
    if selected.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| is_selected(record, selected))
        .cloned()
        .collect()
}

fn is_selected(record: &JoinedRecord, selected: &BTreeSet<String>) -> bool {
    record
        .category
        .as_ref()
        .is_some_and(|category| selected.contains(category))
}
