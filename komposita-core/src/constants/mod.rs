//! Constants module for komposita core
//!
//! Default ranking limits and the known mis-splits excluded from the
//! constituent rankings. The blocklists here only seed
//! [`crate::ExplorerConfig`]; deployments override them in config files.

pub mod ranking_defaults;

pub use ranking_defaults::{RankingDefaults, SourceDefaults};
