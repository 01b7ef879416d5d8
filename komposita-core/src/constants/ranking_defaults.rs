//! Ranking and source defaults
//!
//! The blocklisted first constituents are compound-splitter artefacts that
//! would otherwise show up among the most productive constituents.

use serde::{Deserialize, Serialize};

/// Defaults for the constituent rankings of both diagram modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingDefaults;

impl RankingDefaults {
    /// Constituents offered for selection in the flow diagram
    pub const FLOW_TOP_N: usize = 30;
    /// Constituents offered for selection in the tree diagram
    pub const TREE_TOP_N: usize = 50;

    /// Mis-split first constituents hidden from the flow ranking
    pub const FLOW_FIRST_BLOCKLIST: &'static [&'static str] = &["Ann", "Eu", "Ei", "Vers", "De"];
    /// Mis-split first constituents hidden from the tree ranking
    pub const TREE_FIRST_BLOCKLIST: &'static [&'static str] =
        &["Ann", "Eu", "Ei", "Vers", "De", "Minden", "Ente"];
    /// Second constituents are not blocklisted by default
    pub const SECOND_BLOCKLIST: &'static [&'static str] = &[];

    /// Only compounds with exactly this many constituents are considered
    pub const COMPOUND_DEPTH: i64 = 2;
}

/// Defaults for reading the source tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDefaults;

impl SourceDefaults {
    /// Corpus header naming the lemma column
    pub const LEMMA_COLUMN: &'static str = "lemma";
    /// Corpus header naming the category column
    pub const CATEGORY_COLUMN: &'static str = "party";

    /// Split table column holding the constituent count
    pub const SPLIT_DEPTH_COLUMN: usize = 3;
    /// Split table column holding the lemma
    pub const SPLIT_LEMMA_COLUMN: usize = 4;
    /// Split table column holding the space-separated constituents
    pub const SPLIT_COMPONENTS_COLUMN: usize = 6;
}

/// Convert a static list into owned strings
pub fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}
