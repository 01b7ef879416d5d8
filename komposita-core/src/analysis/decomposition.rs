//! Decomposition table: two-part noun compounds joined with frequencies.

use regex::Regex;
use std::collections::HashMap;

use crate::constants::RankingDefaults;
use crate::models::{FrequencyRecord, JoinedRecord, LemmaRecord, SplitRow};

lazy_static::lazy_static! {
    /// Capitalized constituents stand in for nouns. ASCII only, so umlaut
    /// initials and OCR-damaged casing fall out.
    static ref NOUN_PATTERN: Regex = Regex::new(r"^[A-Z]").expect("noun pattern is valid");
}

/// Whether `constituent` passes the capitalization check
pub fn is_noun_like(constituent: &str) -> bool {
    NOUN_PATTERN.is_match(constituent)
}

/// Split one row into a two-part compound, if it is one
///
/// Rejects rows whose depth is not exactly two, whose components field has
/// fewer than two tokens, or whose constituents are not both capitalized.
/// Tokens beyond the second are ignored.
pub fn decompose(row: &SplitRow) -> Option<LemmaRecord> {
    if row.hierarchy_depth != RankingDefaults::COMPOUND_DEPTH {
        return None;
    }

    let mut tokens = row.components.split_whitespace();
    let first = tokens.next()?;
    let second = tokens.next()?;

    if !is_noun_like(first) || !is_noun_like(second) {
        return None;
    }

    Some(LemmaRecord {
        lemma: row.lemma.clone(),
        hierarchy_depth: row.hierarchy_depth,
        first: first.to_string(),
        second: second.to_string(),
        components: row.components.clone(),
    })
}

/// Build the joined decomposition table
///
/// Inner join on lemma: split rows whose lemma never occurs in
/// `frequencies` are dropped, and a lemma with several frequency records
/// (one per category) yields one joined record each. Output follows split
/// table order, then frequency record order.
pub fn build_table(splits: &[SplitRow], frequencies: &[FrequencyRecord]) -> Vec<JoinedRecord> {
    let mut by_lemma: HashMap<&str, Vec<&FrequencyRecord>> = HashMap::new();
    for record in frequencies {
        by_lemma.entry(record.lemma.as_str()).or_default().push(record);
    }

    let mut rejected = 0usize;
    let mut unmatched = 0usize;
    let mut table = Vec::new();

    for row in splits {
        let Some(record) = decompose(row) else {
            rejected += 1;
            continue;
        };
        match by_lemma.get(record.lemma.as_str()) {
            Some(matches) => {
                table.extend(matches.iter().map(|frequency| JoinedRecord::new(&record, frequency)));
            }
            None => unmatched += 1,
        }
    }

    tracing::debug!(
        split_rows = splits.len(),
        rejected,
        unmatched,
        joined = table.len(),
        "decomposition table built"
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn freq(lemma: &str, category: Option<&str>, count: u64) -> FrequencyRecord {
        FrequencyRecord {
            lemma: lemma.to_string(),
            category: category.map(str::to_string),
            count,
        }
    }

    #[test]
    fn noun_check_is_first_character_ascii_uppercase() {
        assert!(is_noun_like("Wahl"));
        assert!(is_noun_like("X"));
        assert!(!is_noun_like("wahl"));
        assert!(!is_noun_like("Ökonomie"));
        assert!(!is_noun_like("-Wahl"));
        assert!(!is_noun_like(""));
    }

    #[test]
    fn decompose_keeps_two_part_noun_compounds() {
        let record = decompose(&SplitRow::new(2, "Wahlprogramm", "Wahl Programm"));
        let record = record.expect("two-part compound");
        assert_eq!(record.first, "Wahl");
        assert_eq!(record.second, "Programm");
        assert_eq!(record.hierarchy_depth, 2);
    }

    #[test]
    fn decompose_rejects_other_depths() {
        assert!(decompose(&SplitRow::new(1, "Wahl", "Wahl")).is_none());
        assert!(decompose(&SplitRow::new(3, "Bundestagswahlprogramm", "Bundestag Wahl Programm")).is_none());
    }

    #[test]
    fn decompose_rejects_missing_or_lowercase_tokens() {
        assert!(decompose(&SplitRow::new(2, "Wahl", "Wahl")).is_none());
        assert!(decompose(&SplitRow::new(2, "Wahl", "   ")).is_none());
        assert!(decompose(&SplitRow::new(2, "wählbar", "wählen Bar")).is_none());
        assert!(decompose(&SplitRow::new(2, "Wahlen", "Wahl en")).is_none());
    }

    #[test]
    fn decompose_splits_on_any_whitespace() {
        let record = decompose(&SplitRow::new(2, "Klimaschutz", " Klima\t Schutz "));
        assert_eq!(record.map(|r| (r.first, r.second)), Some(("Klima".into(), "Schutz".into())));
    }

    #[test]
    fn build_table_is_an_inner_join() {
        let splits = vec![
            SplitRow::new(2, "Wahlprogramm", "Wahl Programm"),
            SplitRow::new(2, "Wahlkampf", "Wahl Kampf"),
        ];
        let frequencies = vec![freq("Wahlkampf", None, 4)];

        let table = build_table(&splits, &frequencies);

        assert_eq!(table.len(), 1);
        assert_eq!(table[0].lemma, "Wahlkampf");
        assert_eq!(table[0].frequency, 4);
    }

    #[test]
    fn build_table_yields_one_row_per_category() {
        let splits = vec![SplitRow::new(2, "Wahlkampf", "Wahl Kampf")];
        let frequencies = vec![freq("Wahlkampf", Some("CDU"), 1), freq("Wahlkampf", Some("SPD"), 2)];

        let table = build_table(&splits, &frequencies);

        let categories: Vec<_> = table.iter().map(|r| r.category.as_deref()).collect();
        assert_eq!(categories, vec![Some("CDU"), Some("SPD")]);
        assert_eq!(table.iter().map(|r| r.frequency).sum::<u64>(), 3);
    }

    #[test]
    fn build_table_preserves_split_order() {
        let splits = vec![
            SplitRow::new(2, "Wahlprogramm", "Wahl Programm"),
            SplitRow::new(2, "Arbeitsmarkt", "Arbeit Markt"),
        ];
        let frequencies = vec![freq("Arbeitsmarkt", None, 1), freq("Wahlprogramm", None, 1)];

        let lemmas: Vec<_> = build_table(&splits, &frequencies).into_iter().map(|r| r.lemma).collect();
        assert_eq!(lemmas, vec!["Wahlprogramm", "Arbeitsmarkt"]);
    }

    proptest! {
        #[test]
        fn joined_records_are_two_part_noun_compounds(
            rows in prop::collection::vec((0i64..5, "[A-Za-zÄÖÜäöü ]{0,16}"), 0..60)
        ) {
            let splits: Vec<SplitRow> = rows
                .iter()
                .enumerate()
                .map(|(i, (depth, components))| SplitRow::new(*depth, format!("L{i}"), components.clone()))
                .collect();
            let frequencies: Vec<FrequencyRecord> = splits
                .iter()
                .map(|row| freq(&row.lemma, None, 1))
                .collect();

            for record in build_table(&splits, &frequencies) {
                prop_assert_eq!(record.hierarchy_depth, 2);
                prop_assert!(is_noun_like(&record.first));
                prop_assert!(is_noun_like(&record.second));
            }
        }
    }
}
