//! Row and record types flowing through the decomposition pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One token occurrence from the lemmatized manifesto corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRow {
    pub lemma: String,
    /// Grouping dimension such as the party whose manifesto the token is from
    pub category: Option<String>,
}

impl CorpusRow {
    pub fn new(lemma: impl Into<String>, category: Option<&str>) -> Self {
        Self {
            lemma: lemma.into(),
            category: category.map(str::to_string),
        }
    }
}

/// One row of the compound-split table, as produced by the splitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRow {
    /// Number of constituents the splitter found
    pub hierarchy_depth: i64,
    pub lemma: String,
    /// Whitespace-separated constituents, e.g. `"Wahl Programm"`
    pub components: String,
}

impl SplitRow {
    pub fn new(hierarchy_depth: i64, lemma: impl Into<String>, components: impl Into<String>) -> Self {
        Self {
            hierarchy_depth,
            lemma: lemma.into(),
            components: components.into(),
        }
    }
}

/// A two-part noun compound split into its constituents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaRecord {
    pub lemma: String,
    pub hierarchy_depth: i64,
    pub first: String,
    pub second: String,
    pub components: String,
}

/// Occurrence count of a lemma, optionally within one category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrequencyRecord {
    pub lemma: String,
    pub category: Option<String>,
    pub count: u64,
}

/// A [`LemmaRecord`] joined with one matching [`FrequencyRecord`]
///
/// When frequencies were aggregated per category, the same lemma appears
/// once per category it occurs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedRecord {
    pub lemma: String,
    pub hierarchy_depth: i64,
    pub first: String,
    pub second: String,
    pub components: String,
    pub category: Option<String>,
    pub frequency: u64,
}

impl JoinedRecord {
    pub fn new(record: &LemmaRecord, frequency: &FrequencyRecord) -> Self {
        Self {
            lemma: record.lemma.clone(),
            hierarchy_depth: record.hierarchy_depth,
            first: record.first.clone(),
            second: record.second.clone(),
            components: record.components.clone(),
            category: frequency.category.clone(),
            frequency: frequency.count,
        }
    }

    /// The constituent on `side`
    pub fn constituent(&self, side: Side) -> &str {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }
}

/// Which member of a two-part compound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Side {
    /// Erstglied
    First,
    /// Zweitglied
    Second,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(Self::First),
            "second" => Ok(Self::Second),
            _ => Err(format!("Invalid side: '{s}'. Valid options: first, second")),
        }
    }
}

/// How constituents are weighted when ranking them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingWeight {
    /// One vote per joined record
    #[default]
    Records,
    /// Each joined record votes with its corpus frequency
    Frequency,
}

/// A constituent and its ranking score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstituentCount {
    pub constituent: String,
    pub count: u64,
}

/// One row of the tabular lemma listing shown under a diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaFrequency {
    pub lemma: String,
    pub frequency: u64,
}
