//! Data models module for komposita core
//!
//! Source rows, the joined decomposition records, the selection value and
//! the graph index handed to the diagram renderers.

pub mod graph_index;
pub mod records;
pub mod selection;

pub use graph_index::{Bipartite, Direction, EdgeMeta, GraphIndex, UNMATCHED_LEMMA};
pub use records::{
    ConstituentCount, CorpusRow, FrequencyRecord, JoinedRecord, LemmaFrequency, LemmaRecord,
    RankingWeight, Side, SplitRow,
};
pub use selection::{CategorySelection, DiagramMode, Selection};
