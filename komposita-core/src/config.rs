//! Explorer configuration
//!
//! Ranking limits and blocklists per diagram mode plus source-table options.
//! Files are TOML, JSON or YAML; any key a file leaves out keeps its default.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use komposita_utils::ConfigBuilder;

use crate::constants::ranking_defaults::owned;
use crate::constants::{RankingDefaults, SourceDefaults};
use crate::models::{DiagramMode, RankingWeight, Side};

/// Ranking settings for one diagram mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeConfig {
    /// Length of the ranking before blocklisted entries are removed
    pub top_n: usize,
    pub first_blocklist: Vec<String>,
    pub second_blocklist: Vec<String>,
}

impl ModeConfig {
    pub fn flow() -> Self {
        Self {
            top_n: RankingDefaults::FLOW_TOP_N,
            first_blocklist: owned(RankingDefaults::FLOW_FIRST_BLOCKLIST),
            second_blocklist: owned(RankingDefaults::SECOND_BLOCKLIST),
        }
    }

    pub fn tree() -> Self {
        Self {
            top_n: RankingDefaults::TREE_TOP_N,
            first_blocklist: owned(RankingDefaults::TREE_FIRST_BLOCKLIST),
            second_blocklist: owned(RankingDefaults::SECOND_BLOCKLIST),
        }
    }

    /// Blocklist applied to rankings of `side`
    pub fn blocklist(&self, side: Side) -> HashSet<String> {
        let list = match side {
            Side::First => &self.first_blocklist,
            Side::Second => &self.second_blocklist,
        };
        list.iter().cloned().collect()
    }
}

/// Global configuration for the explorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    pub flow: ModeConfig,
    pub tree: ModeConfig,
    /// Corpus header naming the category column
    pub category_column: String,
    pub ranking_weight: RankingWeight,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            flow: ModeConfig::flow(),
            tree: ModeConfig::tree(),
            category_column: SourceDefaults::CATEGORY_COLUMN.to_string(),
            ranking_weight: RankingWeight::Records,
        }
    }
}

impl ExplorerConfig {
    /// Defaults, overridden by `path` when given
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let config: Self = ConfigBuilder::new().load_optional(path)?.build();
        config.validate()?;
        Ok(config)
    }

    pub fn mode(&self, mode: DiagramMode) -> &ModeConfig {
        match mode {
            DiagramMode::Flow => &self.flow,
            DiagramMode::Tree => &self.tree,
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.category_column.trim().is_empty() {
            return Err(crate::Error::Config("category_column must not be empty".to_string()));
        }
        if self.category_column == SourceDefaults::LEMMA_COLUMN {
            return Err(crate::Error::Config(format!(
                "category_column must differ from the '{}' column",
                SourceDefaults::LEMMA_COLUMN
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_follow_ranking_constants() {
        let config = ExplorerConfig::default();
        assert_eq!(config.flow.top_n, 30);
        assert_eq!(config.tree.top_n, 50);
        assert_eq!(config.category_column, "party");
        assert!(config.mode(DiagramMode::Tree).blocklist(Side::First).contains("Minden"));
        assert!(!config.mode(DiagramMode::Flow).blocklist(Side::First).contains("Minden"));
        assert!(config.flow.blocklist(Side::Second).is_empty());
    }

    #[test]
    fn no_path_yields_defaults() -> crate::Result<()> {
        assert_eq!(ExplorerConfig::load(None)?, ExplorerConfig::default());
        Ok(())
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() -> crate::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("komposita.toml");
        std::fs::write(
            &path,
            "ranking_weight = \"frequency\"\n\n[tree]\ntop_n = 10\nsecond_blocklist = [\"Ung\"]\n",
        )?;

        let config = ExplorerConfig::load(Some(&path))?;

        assert_eq!(config.tree.top_n, 10);
        assert_eq!(config.tree.second_blocklist, vec!["Ung"]);
        assert_eq!(config.tree.first_blocklist, ModeConfig::tree().first_blocklist);
        assert_eq!(config.flow, ModeConfig::flow());
        assert_eq!(config.ranking_weight, RankingWeight::Frequency);
        Ok(())
    }

    #[test]
    fn empty_category_column_is_rejected() -> crate::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("komposita.json");
        std::fs::write(&path, r#"{ "category_column": "" }"#)?;

        assert!(matches!(ExplorerConfig::load(Some(&path)), Err(crate::Error::Config(_))));
        Ok(())
    }
}
