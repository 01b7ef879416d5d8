//! Komposita Analysis
//!
//! The transformation steps from source rows to graph indices, leaves first:
//! frequency aggregation, decomposition table, category filter, constituent
//! ranking and graph index construction.

pub mod category;
pub mod decomposition;
pub mod frequency;
pub mod graph;
pub mod ranking;

pub use category::{categories, restrict_to_categories};
pub use decomposition::{build_table, decompose, is_noun_like};
pub use frequency::{aggregate, total_count};
pub use graph::{build_graph, lemma_table, lookup_edge};
pub use ranking::{rank_constituents, top_constituents, top_constituents_by};
