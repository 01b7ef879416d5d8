//! Komposita Core - Compound Decomposition and Graph Indices
//!
//! This crate turns a lemma-occurrence corpus and a compound-split table into
//! the structures behind the komposita diagrams:
//! - per-lemma (and per-category) frequency counts
//! - the joined table of two-part noun compounds with their frequencies
//! - rankings of the most productive first and second constituents
//! - category (party) filtering
//! - star-shaped graph indices around a selected pivot constituent
//!
//! Every operation here is a pure function over immutable inputs. The
//! [`Explorer`] session builds the selection-independent tables once and
//! recomputes everything else per [`Selection`].

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::multiple_crate_versions,  // Common in large dependency trees
    clippy::module_name_repetitions,  // Often necessary for clarity
)]

pub mod analysis;
pub mod config;
pub mod constants;
pub mod explorer;
pub mod models;
pub mod source;

pub use analysis::{
    aggregate, build_graph, build_table, categories, lemma_table, rank_constituents,
    restrict_to_categories, top_constituents, top_constituents_by,
};
pub use config::{ExplorerConfig, ModeConfig};
pub use explorer::{Exploration, Explorer, GraphView};
pub use models::{
    Bipartite, CategorySelection, ConstituentCount, CorpusRow, DiagramMode, Direction, EdgeMeta,
    FrequencyRecord, GraphIndex, JoinedRecord, LemmaFrequency, LemmaRecord, RankingWeight,
    Selection, Side, SplitRow,
};
pub use source::Sources;

/// Result type used throughout komposita core
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for komposita core operations
///
/// Malformed source rows never surface here; they are filtered out.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A source table could not be read
    #[error("Failed to read {}: {source}", path.display())]
    SourceFile {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    /// A source table is structurally unusable (e.g. missing header column)
    #[error("Source error: {0}")]
    Source(String),

    /// No pivot constituent has been selected yet
    #[error("No constituent selected")]
    EmptySelection,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Utility error
    #[error("Utility error: {0}")]
    Util(#[from] komposita_utils::UtilError),
}
