//! The externally owned selection, passed in whole on every recomputation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::graph_index::Direction;

/// Which of the two diagram variants a selection is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DiagramMode {
    /// Sankey flow diagram over the whole corpus
    Flow,
    /// Bipartite tree diagram, filterable by category
    Tree,
}

impl DiagramMode {
    /// Whether frequencies are aggregated per category in this mode
    pub const fn is_categorized(self) -> bool {
        matches!(self, Self::Tree)
    }
}

impl fmt::Display for DiagramMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flow => write!(f, "flow"),
            Self::Tree => write!(f, "tree"),
        }
    }
}

impl std::str::FromStr for DiagramMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flow" | "sankey" => Ok(Self::Flow),
            "tree" | "graphviz" => Ok(Self::Tree),
            _ => Err(format!("Invalid diagram mode: '{s}'. Valid options: flow, tree")),
        }
    }
}

/// Selected categories
///
/// `All` is the initial state of the checkbox grid. An explicit empty set is
/// a distinct, valid selection that matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySelection {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl CategorySelection {
    pub fn only<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(categories.into_iter().map(Into::into).collect())
    }

    pub fn none() -> Self {
        Self::Only(BTreeSet::new())
    }

    /// Concrete category set, given every category the corpus knows
    pub fn resolve(&self, known: &[String]) -> BTreeSet<String> {
        match self {
            Self::All => known.iter().cloned().collect(),
            Self::Only(selected) => selected.clone(),
        }
    }
}

/// Everything the user has chosen for one recomputation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub mode: DiagramMode,
    pub direction: Direction,
    pub pivot: Option<String>,
    pub categories: CategorySelection,
}

impl Selection {
    pub fn new(mode: DiagramMode, direction: Direction) -> Self {
        Self {
            mode,
            direction,
            pivot: None,
            categories: CategorySelection::All,
        }
    }

    #[must_use]
    pub fn with_pivot(mut self, pivot: impl Into<String>) -> Self {
        self.pivot = Some(pivot.into());
        self
    }

    #[must_use]
    pub fn with_categories(mut self, categories: CategorySelection) -> Self {
        self.categories = categories;
        self
    }

    /// The pivot, or [`crate::Error::EmptySelection`] when none is chosen
    pub fn require_pivot(&self) -> crate::Result<&str> {
        match self.pivot.as_deref() {
            Some(pivot) if !pivot.is_empty() => Ok(pivot),
            _ => Err(crate::Error::EmptySelection),
        }
    }
}
