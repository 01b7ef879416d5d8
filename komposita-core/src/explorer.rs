//! Exploration session
//!
//! Holds the selection-independent tables for one pair of source tables and
//! answers each [`Selection`] with a fresh [`Exploration`]. The source tables
//! are treated as immutable for the lifetime of the session, so the joined
//! tables are built once; anything depending on the category filter is
//! recomputed on every call.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::analysis::{
    aggregate, build_graph, build_table, categories, lemma_table, restrict_to_categories,
    top_constituents_by,
};
use crate::config::ExplorerConfig;
use crate::models::{
    CategorySelection, CorpusRow, DiagramMode, GraphIndex, JoinedRecord, LemmaFrequency, Selection,
    Side, SplitRow,
};
use crate::source::Sources;

/// Result of one recomputation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Exploration {
    /// No pivot chosen yet; these are the constituents on offer
    Unselected { choices: Vec<String> },
    /// A pivot is chosen; its graph may still have no partners
    Graph(GraphView),
}

/// Everything a renderer needs for one selected pivot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphView {
    pub mode: DiagramMode,
    pub graph: GraphIndex,
    /// Lemmas of the pivot, frequencies summed per lemma
    pub lemmas: Vec<LemmaFrequency>,
    /// Categories the view is restricted to (empty in flow mode)
    pub categories: Vec<String>,
}

/// Session over one corpus and split table
#[derive(Debug, Clone)]
pub struct Explorer {
    config: ExplorerConfig,
    categories: Vec<String>,
    /// Joined with per-lemma frequencies (flow mode)
    table: Vec<JoinedRecord>,
    /// Joined with per-lemma-and-category frequencies (tree mode)
    categorized: Vec<JoinedRecord>,
}

impl Explorer {
    pub fn new(corpus: &[CorpusRow], splits: &[SplitRow], config: ExplorerConfig) -> Self {
        let table = build_table(splits, &aggregate(corpus, false));
        let categorized = build_table(splits, &aggregate(corpus, true));
        let categories = categories(corpus);

        tracing::info!(
            corpus_rows = corpus.len(),
            split_rows = splits.len(),
            compounds = table.len(),
            categorized_compounds = categorized.len(),
            categories = categories.len(),
            "explorer ready"
        );

        Self {
            config,
            categories,
            table,
            categorized,
        }
    }

    pub fn from_sources(sources: &Sources, config: ExplorerConfig) -> Self {
        Self::new(&sources.corpus, &sources.splits, config)
    }

    /// Every category in the corpus, ascending
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Joined records visible in `mode` under `categories`
    ///
    /// Flow mode ignores categories and uses the whole-corpus table.
    pub fn records(&self, mode: DiagramMode, categories: &CategorySelection) -> Cow<'_, [JoinedRecord]> {
        match mode {
            DiagramMode::Flow => Cow::Borrowed(&self.table),
            DiagramMode::Tree => match categories {
                CategorySelection::All => Cow::Borrowed(&self.categorized),
                CategorySelection::Only(_) => {
                    let selected = categories.resolve(&self.categories);
                    Cow::Owned(restrict_to_categories(&self.categorized, &selected))
                }
            },
        }
    }

    /// Constituents on `side` offered for selection
    pub fn ranking(&self, mode: DiagramMode, side: Side, categories: &CategorySelection) -> Vec<String> {
        let mode_config = self.config.mode(mode);
        top_constituents_by(
            &self.records(mode, categories),
            side,
            mode_config.top_n,
            &mode_config.blocklist(side),
            self.config.ranking_weight,
        )
    }

    /// Recompute everything for `selection`
    pub fn explore(&self, selection: &Selection) -> Exploration {
        let Ok(pivot) = selection.require_pivot() else {
            return Exploration::Unselected {
                choices: self.ranking(
                    selection.mode,
                    selection.direction.pivot_side(),
                    &selection.categories,
                ),
            };
        };

        let records = self.records(selection.mode, &selection.categories);
        let graph = build_graph(&records, pivot, selection.direction);
        let lemmas = lemma_table(&records, pivot, selection.direction);
        let categories = if selection.mode.is_categorized() {
            selection.categories.resolve(&self.categories).into_iter().collect()
        } else {
            Vec::new()
        };

        Exploration::Graph(GraphView {
            mode: selection.mode,
            graph,
            lemmas,
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;

    fn corpus() -> Vec<CorpusRow> {
        let mut rows = Vec::new();
        for (lemma, party, times) in [
            ("Wahlprogramm", "SPD", 3),
            ("Wahlprogramm", "CDU", 1),
            ("Wahlkampf", "CDU", 2),
            ("Regierungsprogramm", "SPD", 1),
            ("Anneliese", "SPD", 9),
        ] {
            for _ in 0..times {
                rows.push(CorpusRow::new(lemma, Some(party)));
            }
        }
        rows
    }

    fn splits() -> Vec<SplitRow> {
        vec![
            SplitRow::new(2, "Wahlprogramm", "Wahl Programm"),
            SplitRow::new(2, "Wahlkampf", "Wahl Kampf"),
            SplitRow::new(2, "Regierungsprogramm", "Regierung Programm"),
            SplitRow::new(2, "Anneliese", "Ann Liese"),
            SplitRow::new(3, "Bundestagswahlprogramm", "Bundestag Wahl Programm"),
        ]
    }

    fn explorer() -> Explorer {
        Explorer::new(&corpus(), &splits(), ExplorerConfig::default())
    }

    #[test]
    fn unselected_pivot_offers_blocklist_free_choices() {
        let selection = Selection::new(DiagramMode::Flow, Direction::ExpandFirst);

        match explorer().explore(&selection) {
            Exploration::Unselected { choices } => {
                assert_eq!(choices, vec!["Wahl", "Regierung"]);
            }
            other => panic!("expected choices, got {other:?}"),
        }
    }

    #[test]
    fn flow_mode_uses_whole_corpus_frequencies() {
        let selection = Selection::new(DiagramMode::Flow, Direction::ExpandFirst).with_pivot("Wahl");

        let Exploration::Graph(view) = explorer().explore(&selection) else {
            panic!("expected a graph");
        };

        assert_eq!(view.graph.components, vec!["Wahl", "Kampf", "Programm"]);
        assert_eq!(view.graph.edges[1].frequency, 4);
        assert!(view.categories.is_empty());
    }

    #[test]
    fn tree_mode_restricts_to_selected_categories() {
        let selection = Selection::new(DiagramMode::Tree, Direction::ExpandSecond)
            .with_pivot("Programm")
            .with_categories(CategorySelection::only(["SPD"]));

        let Exploration::Graph(view) = explorer().explore(&selection) else {
            panic!("expected a graph");
        };

        assert_eq!(view.graph.components, vec!["Regierung", "Wahl", "Programm"]);
        assert_eq!(view.categories, vec!["SPD"]);
        assert_eq!(
            view.lemmas,
            vec![
                LemmaFrequency { lemma: "Regierungsprogramm".into(), frequency: 1 },
                LemmaFrequency { lemma: "Wahlprogramm".into(), frequency: 3 },
            ]
        );
    }

    #[test]
    fn tree_mode_lemma_table_sums_across_categories() {
        let selection = Selection::new(DiagramMode::Tree, Direction::ExpandFirst).with_pivot("Wahl");

        let Exploration::Graph(view) = explorer().explore(&selection) else {
            panic!("expected a graph");
        };

        // The edge shows the first category's count (CDU), the table the total.
        let programm = view.graph.edge_pairs().find(|(_, second, _)| *second == "Programm");
        assert_eq!(programm.map(|(_, _, meta)| meta.frequency), Some(1));
        assert!(view.lemmas.contains(&LemmaFrequency { lemma: "Wahlprogramm".into(), frequency: 4 }));
        assert_eq!(view.categories, vec!["CDU", "SPD"]);
    }

    #[test]
    fn empty_category_selection_matches_nothing() {
        let explorer = explorer();
        let none = CategorySelection::none();

        assert!(explorer.records(DiagramMode::Tree, &none).is_empty());
        assert!(explorer.ranking(DiagramMode::Tree, Side::First, &none).is_empty());

        let selection = Selection::new(DiagramMode::Tree, Direction::ExpandFirst)
            .with_pivot("Wahl")
            .with_categories(none);
        let Exploration::Graph(view) = explorer.explore(&selection) else {
            panic!("expected a graph");
        };
        assert!(view.graph.has_no_partners());
        assert_eq!(view.graph.components, vec!["Wahl"]);
    }

    #[test]
    fn empty_pivot_string_counts_as_unselected() {
        let selection = Selection::new(DiagramMode::Tree, Direction::ExpandSecond).with_pivot("");
        assert!(matches!(
            explorer().explore(&selection),
            Exploration::Unselected { .. }
        ));
        assert!(matches!(selection.require_pivot(), Err(crate::Error::EmptySelection)));
    }

    #[test]
    fn categories_are_listed_once() {
        assert_eq!(explorer().categories(), ["CDU".to_string(), "SPD".to_string()]);
    }
}
