//! Engine settings with documented defaults
//!
//! Defaults mirror the shipped application settings; everything here can
//! be overridden from a TOML file.

use crate::core::error::Result;
use crate::core::types::ClassType;
use crate::stats::StatType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tuning knobs for normalization and search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeSettings {
    /// Minimum base stat total an armor piece needs to enter the search
    /// pool
    ///
    /// Pieces below this threshold are junk for optimization purposes and
    /// only inflate the product space. Set to 0 to keep everything.
    pub min_stat_total: i32,

    /// Rank loadouts by base stat values instead of current values
    ///
    /// Base values ignore whatever mods happen to be socketed right now,
    /// which is the fairer comparison when the user intends to re-mod.
    pub compare_base_stats: bool,

    /// How many distinct objective values to retain in the ranked output
    ///
    /// Every assignment tied at a retained value is kept, so the result
    /// list can be longer than this number.
    pub max_ranked_values: usize,

    /// Per-class override of which stats count toward the "custom total"
    /// objective
    ///
    /// Classes without an entry use all six stats.
    pub custom_total_stats_by_class: Vec<(ClassType, Vec<StatType>)>,
}

impl Default for ForgeSettings {
    fn default() -> Self {
        Self {
            min_stat_total: 55,
            compare_base_stats: false,
            max_ranked_values: 10,
            custom_total_stats_by_class: Vec::new(),
        }
    }
}

impl ForgeSettings {
    /// Settings with every pool filter disabled, for exhaustive searches
    pub fn unfiltered() -> Self {
        Self {
            min_stat_total: 0,
            ..Self::default()
        }
    }

    /// Load settings from a TOML file
    pub fn from_toml_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Stats counted toward the custom total objective for `class`
    pub fn custom_total_stats(&self, class: ClassType) -> Vec<StatType> {
        self.custom_total_stats_by_class
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, stats)| stats.clone())
            .unwrap_or_else(|| StatType::all().to_vec())
    }
}
