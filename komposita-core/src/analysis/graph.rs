//! Graph index construction around a pivot constituent.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Direction, EdgeMeta, GraphIndex, JoinedRecord, LemmaFrequency};

/// Build the star graph of `pivot` and its partners
///
/// Partners are the distinct constituents combined with `pivot` on the
/// other side, in ascending order. `ExpandFirst` puts the pivot at index 0
/// with edges `0 -> 1..=n`; `ExpandSecond` puts it last with edges
/// `0..n -> n`. A pivot without partners gives one node and no edges.
pub fn build_graph(records: &[JoinedRecord], pivot: &str, direction: Direction) -> GraphIndex {
    let pivot_side = direction.pivot_side();
    let partner_side = direction.partner_side();

    let partners: BTreeSet<&str> = records
        .iter()
        .filter(|record| record.constituent(pivot_side) == pivot)
        .map(|record| record.constituent(partner_side))
        .collect();
    let partner_count = partners.len();

    let (components, source_indices, target_indices) = match direction {
        Direction::ExpandFirst => {
            let components: Vec<String> = std::iter::once(pivot)
                .chain(partners)
                .map(str::to_string)
                .collect();
            (components, vec![0; partner_count], (1..=partner_count).collect())
        }
        Direction::ExpandSecond => {
            let components: Vec<String> = partners
                .into_iter()
                .chain(std::iter::once(pivot))
                .map(str::to_string)
                .collect();
            (components, (0..partner_count).collect(), vec![partner_count; partner_count])
        }
    };

    let edges: Vec<EdgeMeta> = source_indices
        .iter()
        .zip(&target_indices)
        .map(|(&source, &target)| lookup_edge(records, &components[source], &components[target]))
        .collect();

    let unmatched = edges.iter().filter(|meta| !meta.is_matched()).count();
    tracing::debug!(
        pivot,
        %direction,
        partners = partner_count,
        unmatched,
        "graph index built"
    );

    GraphIndex {
        direction,
        components,
        source_indices,
        target_indices,
        edges,
    }
}

/// Metadata of the first record for the exact `(first, second)` pair
///
/// Duplicate matches (one per category) are not summed; the first one in
/// input order wins. Falls back to [`EdgeMeta::unmatched`].
pub fn lookup_edge(records: &[JoinedRecord], first: &str, second: &str) -> EdgeMeta {
    records
        .iter()
        .find(|record| record.first == first && record.second == second)
        .map_or_else(EdgeMeta::unmatched, EdgeMeta::from)
}

/// Lemmas combining `pivot` with a partner, frequencies summed per lemma
///
/// Unlike [`lookup_edge`], every record counts: a lemma listed under
/// several categories shows its total across them. Sorted by lemma.
pub fn lemma_table(records: &[JoinedRecord], pivot: &str, direction: Direction) -> Vec<LemmaFrequency> {
    let pivot_side = direction.pivot_side();
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();

    for record in records.iter().filter(|record| record.constituent(pivot_side) == pivot) {
        *totals.entry(record.lemma.as_str()).or_insert(0) += record.frequency;
    }

    totals
        .into_iter()
        .map(|(lemma, frequency)| LemmaFrequency {
            lemma: lemma.to_string(),
            frequency,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(first: &str, second: &str, category: Option<&str>, frequency: u64) -> JoinedRecord {
        JoinedRecord {
            lemma: format!("{first}{}", second.to_lowercase()),
            hierarchy_depth: 2,
            first: first.to_string(),
            second: second.to_string(),
            components: format!("{first} {second}"),
            category: category.map(str::to_string),
            frequency,
        }
    }

    fn table() -> Vec<JoinedRecord> {
        vec![
            record("Wahl", "Programm", None, 12),
            record("Wahl", "Kampf", None, 7),
            record("Regierung", "Programm", None, 3),
            record("Klima", "Schutz", None, 20),
        ]
    }

    #[test]
    fn expand_first_builds_out_star() {
        let graph = build_graph(&table(), "Wahl", Direction::ExpandFirst);

        assert_eq!(graph.components, vec!["Wahl", "Kampf", "Programm"]);
        assert_eq!(graph.source_indices, vec![0, 0]);
        assert_eq!(graph.target_indices, vec![1, 2]);
        assert_eq!(
            graph.edges,
            vec![
                EdgeMeta { lemma: "Wahlkampf".into(), frequency: 7 },
                EdgeMeta { lemma: "Wahlprogramm".into(), frequency: 12 },
            ]
        );
        assert_eq!(graph.pivot(), "Wahl");
    }

    #[test]
    fn expand_second_builds_in_star() {
        let graph = build_graph(&table(), "Programm", Direction::ExpandSecond);

        assert_eq!(graph.components, vec!["Regierung", "Wahl", "Programm"]);
        assert_eq!(graph.source_indices, vec![0, 1]);
        assert_eq!(graph.target_indices, vec![2, 2]);
        assert_eq!(graph.pivot(), "Programm");
        assert_eq!(graph.pivot_index(), 2);
        assert_eq!(graph.edges[0].lemma, "Regierungprogramm");
    }

    #[test]
    fn pivot_without_partners_is_a_single_node() {
        let graph = build_graph(&table(), "Steuer", Direction::ExpandFirst);

        assert_eq!(graph.components, vec!["Steuer"]);
        assert!(graph.source_indices.is_empty());
        assert!(graph.target_indices.is_empty());
        assert!(graph.has_no_partners());
        assert!(graph.partners().is_empty());

        let graph = build_graph(&[], "Steuer", Direction::ExpandSecond);
        assert_eq!(graph.components, vec!["Steuer"]);
        assert_eq!(graph.pivot(), "Steuer");
    }

    #[test]
    fn duplicate_pairs_report_first_match_only() {
        let records = vec![
            record("Wahl", "Kampf", Some("SPD"), 2),
            record("Wahl", "Kampf", Some("CDU"), 5),
        ];

        let graph = build_graph(&records, "Wahl", Direction::ExpandFirst);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges[0].frequency, 2);
    }

    #[test]
    fn lookup_without_match_degrades_to_placeholder() {
        let meta = lookup_edge(&table(), "Klima", "Programm");
        assert_eq!(meta, EdgeMeta::unmatched());
        assert_eq!(meta.lemma, "N/A");
        assert_eq!(meta.frequency, 0);
        assert!(!meta.is_matched());
    }

    #[test]
    fn partners_from_one_table_looked_up_in_another() {
        let filtered = vec![record("Wahl", "Kampf", Some("SPD"), 1)];
        let graph = build_graph(&filtered, "Wahl", Direction::ExpandFirst);
        let meta = lookup_edge(&[], &graph.components[0], &graph.components[1]);
        assert!(!meta.is_matched());
    }

    #[test]
    fn lemma_table_sums_duplicates() {
        let records = vec![
            record("Wahl", "Kampf", Some("SPD"), 2),
            record("Wahl", "Kampf", Some("CDU"), 5),
            record("Wahl", "Programm", Some("CDU"), 1),
            record("Klima", "Schutz", Some("CDU"), 4),
        ];

        let rows = lemma_table(&records, "Wahl", Direction::ExpandFirst);

        assert_eq!(
            rows,
            vec![
                LemmaFrequency { lemma: "Wahlkampf".into(), frequency: 7 },
                LemmaFrequency { lemma: "Wahlprogramm".into(), frequency: 1 },
            ]
        );
    }

    #[test]
    fn edge_rows_follow_edge_order() {
        let graph = build_graph(&table(), "Programm", Direction::ExpandSecond);
        let lemmas: Vec<_> = graph.edge_rows().into_iter().map(|row| row.lemma).collect();
        assert_eq!(lemmas, vec!["Regierungprogramm", "Wahlprogramm"]);
    }

    #[test]
    fn bipartite_grouping_places_pivot_on_its_side() {
        let graph = build_graph(&table(), "Programm", Direction::ExpandSecond);
        let bipartite = graph.bipartite();
        assert_eq!(bipartite.firsts(), vec!["Regierung", "Wahl"]);
        assert_eq!(bipartite.seconds(), vec!["Programm"]);

        let graph = build_graph(&table(), "Wahl", Direction::ExpandFirst);
        let bipartite = graph.bipartite();
        assert_eq!(bipartite.firsts(), vec!["Wahl"]);
        assert_eq!(bipartite.seconds(), vec!["Kampf", "Programm"]);
    }

    fn arbitrary_table() -> impl Strategy<Value = Vec<JoinedRecord>> {
        let names = ["Wahl", "Kampf", "Programm", "Regierung", "Klima", "Schutz", "Arbeit", "Markt"];
        prop::collection::vec((0usize..8, 0usize..8, 0u64..50), 0..40).prop_map(move |triples| {
            triples
                .into_iter()
                .map(|(f, s, freq)| record(names[f], names[s], None, freq))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn partners_round_trip_through_node_list(
            records in arbitrary_table(),
            pivot in prop::sample::select(vec!["Wahl", "Programm", "Klima", "Markt"]),
            expand_first in any::<bool>(),
        ) {
            let direction = if expand_first { Direction::ExpandFirst } else { Direction::ExpandSecond };
            let expected: Vec<String> = records
                .iter()
                .filter(|r| r.constituent(direction.pivot_side()) == pivot)
                .map(|r| r.constituent(direction.partner_side()).to_string())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();

            let graph = build_graph(&records, pivot, direction);

            prop_assert_eq!(graph.partners(), expected.as_slice());
            prop_assert_eq!(graph.pivot(), pivot);
            prop_assert_eq!(graph.source_indices.len(), graph.target_indices.len());
            prop_assert_eq!(graph.edges.len(), expected.len());
            prop_assert_eq!(graph.node_count(), expected.len() + 1);
        }

        #[test]
        fn building_twice_is_identical(
            records in arbitrary_table(),
            pivot in prop::sample::select(vec!["Wahl", "Programm", "Schutz"]),
        ) {
            for direction in [Direction::ExpandFirst, Direction::ExpandSecond] {
                prop_assert_eq!(
                    build_graph(&records, pivot, direction),
                    build_graph(&records, pivot, direction)
                );
            }
        }
    }
}
