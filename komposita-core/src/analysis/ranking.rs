//! Constituent rankings offered for pivot selection.

use std::collections::{HashMap, HashSet};

use crate::models::{ConstituentCount, JoinedRecord, RankingWeight, Side};

/// Score every constituent on `side`, highest first
///
/// Ties keep first-encountered order.
pub fn rank_constituents(
    records: &[JoinedRecord],
    side: Side,
    weight: RankingWeight,
) -> Vec<ConstituentCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut ranking: Vec<ConstituentCount> = Vec::new();

    for record in records {
        let constituent = record.constituent(side);
        let vote = match weight {
            RankingWeight::Records => 1,
            RankingWeight::Frequency => record.frequency,
        };
        match positions.get(constituent) {
            Some(&position) => ranking[position].count += vote,
            None => {
                positions.insert(constituent, ranking.len());
                ranking.push(ConstituentCount {
                    constituent: constituent.to_string(),
                    count: vote,
                });
            }
        }
    }

    // sort_by is stable
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking
}

/// The `n` most frequent constituents on `side`, minus `blocklist`
///
/// Counts one vote per record. The blocklist is applied after truncation
/// and removed slots are not refilled, so fewer than `n` entries may come
/// back.
pub fn top_constituents(
    records: &[JoinedRecord],
    side: Side,
    n: usize,
    blocklist: &HashSet<String>,
) -> Vec<String> {
    top_constituents_by(records, side, n, blocklist, RankingWeight::Records)
}

/// [`top_constituents`] with a configurable weight
pub fn top_constituents_by(
    records: &[JoinedRecord],
    side: Side,
    n: usize,
    blocklist: &HashSet<String>,
    weight: RankingWeight,
) -> Vec<String> {
    let mut top: Vec<String> = rank_constituents(records, side, weight)
        .into_iter()
        .take(n)
        .map(|entry| entry.constituent)
        .collect();

    let before = top.len();
    top.retain(|constituent| !blocklist.contains(constituent));
    if top.len() < before {
        tracing::debug!(%side, removed = before - top.len(), "blocklisted constituents removed");
    }

    top
}
