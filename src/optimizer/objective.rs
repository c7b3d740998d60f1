//! Optimization targets

use crate::core::config::ForgeSettings;
use crate::core::error::{ForgeError, Result};
use crate::core::types::ClassType;
use crate::optimizer::process::ProcessItem;
use crate::stats::{StatType, StatVector};
use serde::{Deserialize, Serialize};

/// What the combination search maximizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    /// Total of one stat across the loadout
    Stat(StatType),
    /// Weighted total of a fixed stat subset
    WeightedTotal(Vec<(StatType, i32)>),
    /// The items' own power values; mods contribute nothing here
    MaxPower,
}

impl Objective {
    /// The custom-total objective for `class` per the settings
    pub fn custom_total(settings: &ForgeSettings, class: ClassType) -> Objective {
        let weights = settings
            .custom_total_stats(class)
            .into_iter()
            .map(|stat| (stat, 1))
            .collect();
        Objective::WeightedTotal(weights)
    }

    /// Parse a target name: a stat name, `total` for the per-class custom
    /// total, or the reserved `power`
    pub fn parse(name: &str, settings: &ForgeSettings, class: ClassType) -> Result<Objective> {
        match name {
            "power" => Ok(Objective::MaxPower),
            "total" => Ok(Objective::custom_total(settings, class)),
            stat_name => StatType::from_name(stat_name)
                .map(Objective::Stat)
                .ok_or_else(|| ForgeError::UnknownStat(stat_name.to_string())),
        }
    }

    /// One item's contribution to the objective
    pub fn contribution(&self, item: &ProcessItem, by_base: bool) -> i32 {
        match self {
            Objective::Stat(stat) => item.stat(*stat, by_base),
            Objective::WeightedTotal(weights) => {
                if by_base {
                    item.base_stats.weighted_total(weights)
                } else {
                    item.stats.weighted_total(weights)
                }
            }
            Objective::MaxPower => item.power,
        }
    }

    /// The once-per-loadout contribution of the aggregated mod deltas
    pub fn delta_contribution(&self, deltas: &StatVector) -> i32 {
        match self {
            Objective::Stat(stat) => deltas[*stat],
            Objective::WeightedTotal(weights) => deltas.weighted_total(weights),
            Objective::MaxPower => 0,
        }
    }
}
