//! Visualization-ready graph structure around a pivot constituent.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::records::{JoinedRecord, LemmaFrequency, Side};

/// Lemma shown for an edge whose constituent pair has no joined record
pub const UNMATCHED_LEMMA: &str = "N/A";

/// Which side of the compound the pivot anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Pivot is the first constituent, partners are second constituents
    ExpandFirst,
    /// Pivot is the second constituent, partners are first constituents
    ExpandSecond,
}

impl Direction {
    /// Side the pivot constituent sits on
    pub const fn pivot_side(self) -> Side {
        match self {
            Self::ExpandFirst => Side::First,
            Self::ExpandSecond => Side::Second,
        }
    }

    /// Side the partner constituents sit on
    pub const fn partner_side(self) -> Side {
        self.pivot_side().opposite()
    }

    /// Direction whose pivot sits on `side`
    pub const fn from_pivot_side(side: Side) -> Self {
        match side {
            Side::First => Self::ExpandFirst,
            Side::Second => Self::ExpandSecond,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpandFirst => write!(f, "expand_first"),
            Self::ExpandSecond => write!(f, "expand_second"),
        }
    }
}

/// Lemma and frequency attached to one edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeMeta {
    pub lemma: String,
    pub frequency: u64,
}

impl EdgeMeta {
    /// Metadata for an edge without a matching joined record
    pub fn unmatched() -> Self {
        Self {
            lemma: UNMATCHED_LEMMA.to_string(),
            frequency: 0,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.lemma != UNMATCHED_LEMMA
    }
}

impl From<&JoinedRecord> for EdgeMeta {
    fn from(record: &JoinedRecord) -> Self {
        Self {
            lemma: record.lemma.clone(),
            frequency: record.frequency,
        }
    }
}

/// Star-shaped graph around one pivot constituent
///
/// `source_indices`, `target_indices` and `edges` are parallel and hold one
/// entry per partner. Edges always point from the first constituent to the
/// second, so an expand-first star fans out of index 0 and an expand-second
/// star fans into the last index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphIndex {
    pub direction: Direction,
    pub components: Vec<String>,
    pub source_indices: Vec<usize>,
    pub target_indices: Vec<usize>,
    pub edges: Vec<EdgeMeta>,
}

impl GraphIndex {
    /// Position of the pivot in `components`
    pub fn pivot_index(&self) -> usize {
        match self.direction {
            Direction::ExpandFirst => 0,
            Direction::ExpandSecond => self.components.len().saturating_sub(1),
        }
    }

    pub fn pivot(&self) -> &str {
        self.components
            .get(self.pivot_index())
            .map_or("", String::as_str)
    }

    /// Partner constituents in node order (ascending)
    pub fn partners(&self) -> &[String] {
        match self.direction {
            Direction::ExpandFirst => self.components.get(1..).unwrap_or(&[]),
            Direction::ExpandSecond => {
                let end = self.components.len().saturating_sub(1);
                &self.components[..end]
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.components.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the pivot combines with nothing (a single node, no edges)
    pub fn has_no_partners(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate edges as `(first, second, meta)`
    pub fn edge_pairs(&self) -> impl Iterator<Item = (&str, &str, &EdgeMeta)> + '_ {
        self.source_indices
            .iter()
            .zip(&self.target_indices)
            .zip(&self.edges)
            .map(|((&source, &target), meta)| {
                (
                    self.components[source].as_str(),
                    self.components[target].as_str(),
                    meta,
                )
            })
    }

    /// One table row per edge, in edge order, unmatched edges included
    pub fn edge_rows(&self) -> Vec<LemmaFrequency> {
        self.edges
            .iter()
            .map(|meta| LemmaFrequency {
                lemma: meta.lemma.clone(),
                frequency: meta.frequency,
            })
            .collect()
    }

    /// Bipartite grouping used by the tree diagram
    pub fn bipartite(&self) -> Bipartite {
        Bipartite {
            direction: self.direction,
            pivot: self.pivot().to_string(),
            partners: self.partners().to_vec(),
        }
    }
}

/// Pivot on one side, its partners on the other
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bipartite {
    pub direction: Direction,
    pub pivot: String,
    pub partners: Vec<String>,
}

impl Bipartite {
    /// Constituents placed in the first-constituent column
    pub fn firsts(&self) -> Vec<&str> {
        match self.direction {
            Direction::ExpandFirst => vec![self.pivot.as_str()],
            Direction::ExpandSecond => self.partners.iter().map(String::as_str).collect(),
        }
    }

    /// Constituents placed in the second-constituent column
    pub fn seconds(&self) -> Vec<&str> {
        match self.direction {
            Direction::ExpandFirst => self.partners.iter().map(String::as_str).collect(),
            Direction::ExpandSecond => vec![self.pivot.as_str()],
        }
    }
}
